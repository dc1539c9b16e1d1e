//! Per-frame simulation tick
//!
//! Core game loop that advances the court by one frame.

use super::collision::{Exit, hits_bottom_paddle, hits_side_wall, hits_top_paddle, out_of_bounds};
use super::state::{Court, RoundEnd, Side};

/// Discrete player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    /// Launch the ball (ignored mid-round)
    Serve,
}

/// Apply one input command to the court
pub fn apply_input(court: &mut Court, event: InputEvent) {
    match event {
        InputEvent::MoveLeft => court.shift_paddles(-court.paddle_step),
        InputEvent::MoveRight => court.shift_paddles(court.paddle_step),
        InputEvent::Serve => {
            if court.serve() {
                log::info!(
                    "Served from {} rod, velocity {:?}",
                    court.serve_from.as_str(),
                    court.ball.vel
                );
            }
        }
    }
}

/// Advance the court by one frame
///
/// Returns the outcome when the ball leaves the court this frame. The court
/// is left stopped but not reset, so the caller can report the final state
/// before calling [`Court::reset_for_serve`].
pub fn tick(court: &mut Court) -> Option<RoundEnd> {
    if !court.is_playing() {
        return None;
    }

    let ball = &mut court.ball;
    ball.pos += ball.vel;

    // Plain reflection, the ball may overlap the wall for a frame
    if hits_side_wall(ball, court.width) {
        ball.vel.x = -ball.vel.x;
    }

    if hits_bottom_paddle(ball, &court.bottom) {
        ball.vel.y = -ball.vel.y;
        court.score += 1;
        log::debug!("Bottom rod bounce, score {}", court.score);
    }

    if hits_top_paddle(ball, &court.top) {
        ball.vel.y = -ball.vel.y;
        court.score += 1;
        log::debug!("Top rod bounce, score {}", court.score);
    }

    let loser = match out_of_bounds(&court.ball, court.height)? {
        Exit::Top => Side::Top,
        Exit::Bottom => Side::Bottom,
    };
    Some(court.stop(loser))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;
    use glam::Vec2;
    use proptest::prelude::*;

    fn playing_court(pos: Vec2, vel: Vec2) -> Court {
        let mut court = Court::new(400.0, 600.0);
        court.phase = GamePhase::Playing;
        court.ball.pos = pos;
        court.ball.vel = vel;
        court
    }

    #[test]
    fn test_tick_idle_does_nothing() {
        let mut court = Court::new(400.0, 600.0);
        let before = court.ball;
        assert_eq!(tick(&mut court), None);
        assert_eq!(court.ball, before);
    }

    #[test]
    fn test_tick_integrates_velocity() {
        let mut court = playing_court(Vec2::new(200.0, 300.0), Vec2::new(3.0, -3.0));
        assert_eq!(tick(&mut court), None);
        assert_eq!(court.ball.pos, Vec2::new(203.0, 297.0));
    }

    #[test]
    fn test_bottom_rod_bounce_scores() {
        // Rods span x=[140,260], bottom rod at y=570
        let mut court = playing_court(Vec2::new(200.0, 560.0), Vec2::new(0.0, 5.0));
        assert_eq!(tick(&mut court), None);
        assert_eq!(court.ball.pos.y, 565.0);
        assert_eq!(court.ball.vel.y, -5.0);
        assert_eq!(court.score, 1);
    }

    #[test]
    fn test_top_rod_bounce_scores() {
        let mut court = playing_court(Vec2::new(200.0, 43.0), Vec2::new(3.0, -3.0));
        assert_eq!(tick(&mut court), None);
        assert_eq!(court.ball.vel.y, 3.0);
        assert_eq!(court.score, 1);
    }

    #[test]
    fn test_side_wall_reflects_without_correction() {
        let mut court = playing_court(Vec2::new(392.0, 300.0), Vec2::new(3.0, 3.0));
        tick(&mut court);
        assert_eq!(court.ball.vel.x, -3.0);
        assert_eq!(court.ball.pos.x, 395.0);

        let mut court = playing_court(Vec2::new(11.0, 300.0), Vec2::new(-3.0, 3.0));
        tick(&mut court);
        assert_eq!(court.ball.vel.x, 3.0);
    }

    #[test]
    fn test_miss_past_top_rod_ends_round() {
        let mut court = playing_court(Vec2::new(20.0, 8.0), Vec2::new(3.0, -3.0));
        court.score = 2;
        let end = tick(&mut court).expect("round should end");
        assert_eq!(end.winner, Side::Bottom);
        assert_eq!(end.loser, Side::Top);
        assert_eq!(end.score, 2);
        assert!(!court.is_playing());
        assert!(court.ball.is_stationary());
    }

    #[test]
    fn test_miss_past_bottom_rod_ends_round() {
        let mut court = playing_court(Vec2::new(20.0, 589.0), Vec2::new(3.0, 3.0));
        let end = tick(&mut court).expect("round should end");
        assert_eq!(end.winner, Side::Top);
        assert_eq!(end.loser, Side::Bottom);
    }

    #[test]
    fn test_serve_ignored_mid_round() {
        let mut court = Court::new(400.0, 600.0);
        apply_input(&mut court, InputEvent::Serve);
        tick(&mut court);
        let vel = court.ball.vel;
        apply_input(&mut court, InputEvent::Serve);
        assert_eq!(court.ball.vel, vel);
    }

    #[test]
    fn test_rods_move_mid_round() {
        let mut court = Court::new(400.0, 600.0);
        apply_input(&mut court, InputEvent::Serve);
        tick(&mut court);
        assert!(court.is_playing());

        let x = court.top.x;
        apply_input(&mut court, InputEvent::MoveRight);
        assert_eq!(court.top.x, x + 20.0);
        assert_eq!(court.bottom.x, x + 20.0);

        apply_input(&mut court, InputEvent::MoveLeft);
        apply_input(&mut court, InputEvent::MoveLeft);
        assert_eq!(court.top.x, x - 20.0);
        assert_eq!(court.bottom.x, x - 20.0);
        assert!(court.is_playing());
    }

    fn input_strategy() -> impl Strategy<Value = InputEvent> {
        prop_oneof![
            Just(InputEvent::MoveLeft),
            Just(InputEvent::MoveRight),
            Just(InputEvent::Serve),
        ]
    }

    proptest! {
        #[test]
        fn paddles_stay_on_surface_and_aligned(
            moves in proptest::collection::vec(input_strategy(), 0..200),
        ) {
            let mut court = Court::new(400.0, 600.0);
            for event in moves {
                apply_input(&mut court, event);
                prop_assert!(court.top.x >= 0.0);
                prop_assert!(court.top.x <= court.width - court.top.width);
                prop_assert_eq!(court.top.x, court.bottom.x);
            }
        }

        #[test]
        fn idle_ball_never_moves_and_score_only_grows(
            events in proptest::collection::vec(proptest::option::of(input_strategy()), 1..600),
        ) {
            let mut court = Court::new(400.0, 600.0);
            for event in events {
                if let Some(event) = event {
                    apply_input(&mut court, event);
                }

                let score_before = court.score;
                let dy_before = court.ball.vel.y;
                let end = tick(&mut court);

                if !court.is_playing() {
                    prop_assert!(court.ball.is_stationary());
                }

                match end {
                    Some(end) => {
                        prop_assert!(end.score >= score_before);
                        court.reset_for_serve(end.loser);
                    }
                    None if court.is_playing() => {
                        let gained = court.score - score_before;
                        prop_assert!(gained <= 1);
                        if gained == 1 {
                            prop_assert_eq!(court.ball.vel.y, -dy_before);
                        }
                    }
                    None => {}
                }
            }
        }
    }
}
