//! Rod Bounce - a two-rod ball bounce game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, round state)
//! - `simulator`: Round simulator wiring the sim to its collaborators
//! - `display`: Drawing surface and notification capabilities
//! - `highscores`: Best-score record persistence
//! - `platform`: Browser/native platform abstraction
//! - `settings`: Data-driven game tuning

pub mod display;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod simulator;

pub use display::{Display, Notifier};
pub use game::Game;
pub use highscores::{HighScoreBook, HighScoreRecord, NamePrompt, ScoreStore};
pub use settings::Settings;
pub use simulator::RoundSimulator;

/// Game configuration constants
pub mod consts {
    /// Default drawing surface size (matches the canvas in index.html)
    pub const SURFACE_WIDTH: f32 = 400.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Rod (paddle) defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Distance between a rod and its edge of the surface
    pub const PADDLE_INSET: f32 = 20.0;
    /// Horizontal distance covered by one move command
    pub const PADDLE_STEP: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-axis speed of a fresh serve (units per tick)
    pub const SERVE_SPEED: f32 = 3.0;

    /// Name stored when the player declines to enter one
    pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";
}
