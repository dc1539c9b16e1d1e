//! Frame driver
//!
//! One frame = apply queued input, advance the simulation, draw. The host
//! calls [`Game::frame`] from its animation callback (or a plain loop when
//! headless) and pushes input into [`Game::input`] between frames.

use crate::display::{Display, Notifier};
use crate::highscores::ScoreStore;
use crate::platform::input::InputQueue;
use crate::sim::{RoundEnd, next_move};
use crate::simulator::RoundSimulator;

pub struct Game<D, S, N> {
    pub sim: RoundSimulator<D, S, N>,
    /// Commands received since the last frame
    pub input: InputQueue,
    /// Let the autopilot play
    pub idle_mode: bool,
    frames: u64,
    rounds: u32,
}

impl<D: Display, S: ScoreStore, N: Notifier> Game<D, S, N> {
    pub fn new(sim: RoundSimulator<D, S, N>) -> Self {
        Self {
            sim,
            input: InputQueue::new(),
            idle_mode: false,
            frames: 0,
            rounds: 0,
        }
    }

    /// Run one frame
    pub fn frame(&mut self) -> Option<RoundEnd> {
        for event in self.input.drain() {
            self.sim.handle_input(event);
        }
        if self.idle_mode {
            if let Some(event) = next_move(self.sim.court()) {
                self.sim.handle_input(event);
            }
        }

        let end = self.sim.update();
        self.sim.render();

        self.frames += 1;
        if end.is_some() {
            self.rounds += 1;
        }
        end
    }

    pub fn toggle_idle_mode(&mut self) {
        self.idle_mode = !self.idle_mode;
        log::info!("Idle mode: {}", self.idle_mode);
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Rounds finished so far
    pub fn rounds(&self) -> u32 {
        self.rounds
    }
}
