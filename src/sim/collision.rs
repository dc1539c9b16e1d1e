//! Collision tests between the ball, the side walls and the rods
//!
//! Everything is axis-aligned. The rod tests compare the ball's leading
//! edge vertically but only its centre horizontally, so a ball clipping a
//! rod's corner with its rim passes by.

use super::state::{Ball, Paddle};

/// Ball overlaps the left or right edge of the surface
pub fn hits_side_wall(ball: &Ball, surface_width: f32) -> bool {
    ball.left() < 0.0 || ball.right() > surface_width
}

/// Centre of the ball lies within the rod's horizontal span (inclusive)
#[inline]
fn within_span(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x >= paddle.left() && ball.pos.x <= paddle.right()
}

/// Falling ball lands on the bottom rod
pub fn hits_bottom_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.vel.y > 0.0
        && ball.bottom() >= paddle.top()
        && ball.bottom() <= paddle.bottom()
        && within_span(ball, paddle)
}

/// Rising ball meets the top rod
pub fn hits_top_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.vel.y < 0.0
        && ball.top() <= paddle.bottom()
        && ball.top() >= paddle.top()
        && within_span(ball, paddle)
}

/// Edge of the surface the ball left through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Top,
    Bottom,
}

/// Which edge of the surface the ball has crossed, if any
///
/// The top edge is checked first.
pub fn out_of_bounds(ball: &Ball, surface_height: f32) -> Option<Exit> {
    if ball.top() < 0.0 {
        Some(Exit::Top)
    } else if ball.bottom() > surface_height {
        Some(Exit::Bottom)
    } else {
        None
    }
}
