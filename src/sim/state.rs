//! Game state and core simulation types
//!
//! Everything a round needs lives in [`Court`]; the rest of the crate only
//! reads it or mutates it through the functions in `sim::tick`.

use glam::Vec2;

use crate::settings::Settings;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball resting against the serving rod, waiting for a serve
    Serve,
    /// Ball in flight
    Playing,
}

/// One of the two rods
///
/// Names the serving rod as well as the winner and loser of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
}

impl Side {
    /// The rod facing this one
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "Top",
            Side::Bottom => "Bottom",
        }
    }
}

/// Outcome of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEnd {
    pub winner: Side,
    /// Rod the ball got past; it serves next
    pub loser: Side,
    /// Bounces scored before the ball left the court
    pub score: u32,
}

/// A horizontal rod
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Horizontal centre of the rod
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn is_stationary(&self) -> bool {
        self.vel == Vec2::ZERO
    }
}

/// Complete round state: both rods, the ball and the scoreboard
#[derive(Debug, Clone)]
pub struct Court {
    /// Surface width
    pub width: f32,
    /// Surface height
    pub height: f32,
    pub top: Paddle,
    pub bottom: Paddle,
    pub ball: Ball,
    /// Bounces in the current round
    pub score: u32,
    pub phase: GamePhase,
    /// Rod the ball rests against for the next serve
    pub serve_from: Side,
    /// Distance one move command shifts the rods
    pub paddle_step: f32,
    /// Per-axis serve speed
    pub serve_speed: f32,
}

impl Court {
    /// Create a court with default tuning for a surface of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_settings(width, height, &Settings::default())
    }

    /// Create a court using the given tuning
    pub fn with_settings(width: f32, height: f32, settings: &Settings) -> Self {
        let settings = settings.sanitized(width);
        let x = (width - settings.paddle_width) / 2.0;

        let top = Paddle {
            x,
            y: settings.paddle_inset,
            width: settings.paddle_width,
            height: settings.paddle_height,
        };
        let bottom = Paddle {
            x,
            y: height - settings.paddle_inset - settings.paddle_height,
            width: settings.paddle_width,
            height: settings.paddle_height,
        };

        Self {
            width,
            height,
            top,
            bottom,
            ball: Ball::new(Vec2::new(width / 2.0, height / 2.0), settings.ball_radius),
            score: 0,
            phase: GamePhase::Serve,
            serve_from: Side::Bottom,
            paddle_step: settings.paddle_step,
            serve_speed: settings.serve_speed,
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Largest x either rod may take
    pub fn max_paddle_x(&self) -> f32 {
        (self.width - self.top.width).max(0.0)
    }

    /// Shift both rods by `dx`, keeping them on the surface
    pub fn shift_paddles(&mut self, dx: f32) {
        let x = (self.top.x + dx).clamp(0.0, self.max_paddle_x());
        self.top.x = x;
        self.bottom.x = x;
    }

    /// Put both rods back in the middle of the surface
    pub fn center_paddles(&mut self) {
        let x = (self.width - self.top.width) / 2.0;
        self.top.x = x;
        self.bottom.x = x;
    }

    /// Point where the ball rests against a rod before serving
    pub fn contact_point(&self, side: Side) -> Vec2 {
        match side {
            Side::Top => Vec2::new(
                self.top.center_x(),
                self.top.bottom() + self.ball.radius,
            ),
            Side::Bottom => Vec2::new(
                self.bottom.center_x(),
                self.bottom.top() - self.ball.radius,
            ),
        }
    }

    /// Launch the ball away from the serving rod
    ///
    /// Returns false (and changes nothing) when a round is already running.
    pub fn serve(&mut self) -> bool {
        if self.is_playing() {
            return false;
        }

        let dy = match self.serve_from {
            Side::Bottom => -self.serve_speed,
            Side::Top => self.serve_speed,
        };
        self.ball.vel = Vec2::new(self.serve_speed, dy);
        self.phase = GamePhase::Playing;
        true
    }

    /// Stop play after the ball got past `loser`
    ///
    /// The ball freezes where it left the court; positions are restored
    /// separately by [`Court::reset_for_serve`].
    pub fn stop(&mut self, loser: Side) -> RoundEnd {
        self.phase = GamePhase::Serve;
        self.ball.vel = Vec2::ZERO;
        RoundEnd {
            winner: loser.opposite(),
            loser,
            score: self.score,
        }
    }

    /// Re-center the rods and rest the ball against the rod that serves next
    pub fn reset_for_serve(&mut self, serve_from: Side) {
        self.center_paddles();
        self.ball.pos = self.contact_point(serve_from);
        self.ball.vel = Vec2::ZERO;
        self.serve_from = serve_from;
        self.score = 0;
        self.phase = GamePhase::Serve;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_court_layout() {
        let court = Court::new(400.0, 600.0);
        assert_eq!(court.top.x, 140.0);
        assert_eq!(court.bottom.x, 140.0);
        assert_eq!(court.top.y, 20.0);
        assert_eq!(court.bottom.y, 570.0);
        assert_eq!(court.ball.pos, Vec2::new(200.0, 300.0));
        assert!(court.ball.is_stationary());
        assert_eq!(court.serve_from, Side::Bottom);
        assert_eq!(court.phase, GamePhase::Serve);
    }

    #[test]
    fn test_contact_points() {
        let court = Court::new(400.0, 600.0);
        assert_eq!(court.contact_point(Side::Bottom), Vec2::new(200.0, 560.0));
        assert_eq!(court.contact_point(Side::Top), Vec2::new(200.0, 40.0));
    }

    #[test]
    fn test_serve_direction_follows_side() {
        let mut court = Court::new(400.0, 600.0);
        assert!(court.serve());
        assert_eq!(court.ball.vel, Vec2::new(3.0, -3.0));

        let mut court = Court::new(400.0, 600.0);
        court.serve_from = Side::Top;
        assert!(court.serve());
        assert_eq!(court.ball.vel, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_serve_while_playing_is_noop() {
        let mut court = Court::new(400.0, 600.0);
        court.serve();
        court.ball.vel = Vec2::new(-3.0, 3.0);
        assert!(!court.serve());
        assert_eq!(court.ball.vel, Vec2::new(-3.0, 3.0));
    }

    #[test]
    fn test_stop_reports_winner_and_freezes_ball() {
        let mut court = Court::new(400.0, 600.0);
        court.serve();
        court.score = 4;
        let end = court.stop(Side::Top);
        assert_eq!(end.winner, Side::Bottom);
        assert_eq!(end.loser, Side::Top);
        assert_eq!(end.score, 4);
        assert!(!court.is_playing());
        assert!(court.ball.is_stationary());
    }

    #[test]
    fn test_shift_paddles_clamps() {
        let mut court = Court::new(400.0, 600.0);
        court.shift_paddles(-1000.0);
        assert_eq!(court.top.x, 0.0);
        court.shift_paddles(1000.0);
        assert_eq!(court.top.x, 280.0);
        assert_eq!(court.bottom.x, 280.0);
    }
}
