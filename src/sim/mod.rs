//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per rendered frame, fixed per-tick velocities
//! - No rendering, storage or platform dependencies
//! - Side effects are reported as values, never performed

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use autopilot::next_move;
pub use collision::{Exit, hits_bottom_paddle, hits_side_wall, hits_top_paddle, out_of_bounds};
pub use state::{Ball, Court, GamePhase, Paddle, RoundEnd, Side};
pub use tick::{InputEvent, apply_input, tick};
