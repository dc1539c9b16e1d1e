//! Idle/demo mode - the game plays itself
//!
//! Serves whenever the ball is resting and otherwise steers the rods under
//! the ball. Used by the headless native session and the `i` toggle on web.

use super::state::Court;
use super::tick::InputEvent;

/// Pick the command a player would issue this frame, if any
pub fn next_move(court: &Court) -> Option<InputEvent> {
    if !court.is_playing() {
        return Some(InputEvent::Serve);
    }

    // Lead the ball slightly so the rods arrive before it does
    let target = court.ball.pos.x + court.ball.vel.x * 4.0;
    let offset = target - court.top.center_x();

    // Within half a step there is nothing to gain from moving
    if offset.abs() <= court.paddle_step / 2.0 {
        None
    } else if offset < 0.0 {
        Some(InputEvent::MoveLeft)
    } else {
        Some(InputEvent::MoveRight)
    }
}
