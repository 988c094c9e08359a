//! Fixed-step motion integration
//!
//! Vertical motion is velocity-based with constant gravity (semi-implicit
//! Euler, one step per tick). Horizontal motion is a discrete per-tick
//! displacement with no acceleration or friction.

use crate::entity::Entity;

/// Applies one tick of gravity: `vy += gravity`, then `y += vy`.
pub fn integrate_vertical(body: &mut Entity, vy: &mut f32, gravity: f32) {
    *vy += gravity;
    body.y += *vy;
}

/// Shifts the body by `speed` for each held direction.
///
/// Holding both directions cancels out.
pub fn step_horizontal(body: &mut Entity, left: bool, right: bool, speed: f32) {
    if left {
        body.x -= speed;
    }
    if right {
        body.x += speed;
    }
}
