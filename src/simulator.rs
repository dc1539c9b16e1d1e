//! Round simulator
//!
//! Owns the [`Court`] together with the collaborators it reports to: a
//! [`Display`] for drawing, a [`ScoreStore`] for the best score and a
//! [`Notifier`] for announcements. The court logic itself stays in `sim`.

use crate::display::{
    BALL_COLOR, Display, Notifier, PADDLE_COLOR, SCORE_STYLE, greeting, round_over, score_text,
};
use crate::highscores::{HighScoreRecord, ScoreStore};
use crate::settings::Settings;
use crate::sim::{Court, InputEvent, RoundEnd, apply_input, tick};

/// Position of the score readout
const SCORE_POS: (f32, f32) = (10.0, 30.0);

pub struct RoundSimulator<D, S, N> {
    court: Court,
    display: D,
    store: S,
    notifier: N,
    high_score: Option<HighScoreRecord>,
}

impl<D: Display, S: ScoreStore, N: Notifier> RoundSimulator<D, S, N> {
    /// Build a simulator sized to the display, with default tuning
    pub fn new(display: D, store: S, notifier: N) -> Self {
        Self::with_settings(display, store, notifier, &Settings::default())
    }

    /// Build a simulator sized to the display
    ///
    /// Loads the best score once and greets the player with it.
    pub fn with_settings(display: D, mut store: S, mut notifier: N, settings: &Settings) -> Self {
        let (width, height) = display.surface_size();
        let court = Court::with_settings(width, height, settings);

        let high_score = store.load();
        notifier.announce(&greeting(high_score.as_ref()));
        log::info!("Court ready ({}x{})", width, height);

        Self {
            court,
            display,
            store,
            notifier,
            high_score,
        }
    }

    pub fn court(&self) -> &Court {
        &self.court
    }

    /// Direct access to the court, for scripted test setups
    #[cfg(test)]
    pub(crate) fn court_mut(&mut self) -> &mut Court {
        &mut self.court
    }

    pub fn high_score(&self) -> Option<&HighScoreRecord> {
        self.high_score.as_ref()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn is_playing(&self) -> bool {
        self.court.is_playing()
    }

    /// Apply a player command
    pub fn handle_input(&mut self, event: InputEvent) {
        apply_input(&mut self.court, event);
    }

    pub fn move_left(&mut self) {
        self.handle_input(InputEvent::MoveLeft);
    }

    pub fn move_right(&mut self) {
        self.handle_input(InputEvent::MoveRight);
    }

    pub fn serve(&mut self) {
        self.handle_input(InputEvent::Serve);
    }

    /// Advance one frame, finishing the round if the ball got away
    pub fn update(&mut self) -> Option<RoundEnd> {
        let end = tick(&mut self.court)?;
        self.finish_round(&end);
        Some(end)
    }

    /// Round-end side effects: announce, record the score, reset
    ///
    /// The court is already stopped when this runs, so a store that fails
    /// or blocks cannot leave the round in play.
    fn finish_round(&mut self, end: &RoundEnd) {
        log::info!(
            "Round over: {} rod wins, score {}",
            end.winner.as_str(),
            end.score
        );
        self.notifier.announce(&round_over(end));
        self.high_score = self.store.check_and_update(end.score);
        self.court.reset_for_serve(end.loser);
    }

    /// Draw the current frame
    pub fn render(&mut self) {
        let court = &self.court;
        let display = &mut self.display;

        display.clear();
        for paddle in [&court.top, &court.bottom] {
            display.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, PADDLE_COLOR);
        }
        display.fill_circle(court.ball.pos.x, court.ball.pos.y, court.ball.radius, BALL_COLOR);
        display.fill_text(&score_text(court.score), SCORE_POS.0, SCORE_POS.1, SCORE_STYLE);
    }
}
