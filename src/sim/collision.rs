//! Collision response for the ball
//!
//! Two independent responses: mirroring the ball's velocity across the tangent
//! line at a paddle contact, and forcing velocity signs at the arena walls.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{center, midpoint};
use crate::config::ArenaBounds;
use crate::{Position, Velocity};

/// True when the ball is already moving away from the paddle
///
/// Uses the stored (top-left) positions of both bodies, not their centers.
/// With unequal sizes the test axis is offset from the center line, so a
/// ball nearly grazing the paddle can count as separating.
#[inline]
pub fn is_separating(paddle_pos: Position, ball_pos: Position, vel: Velocity) -> bool {
    (ball_pos - paddle_pos).dot(vel) > 0.0
}

/// Mirror a velocity across the tangent line through the contact midpoint
///
/// The tangent is perpendicular to the line joining the two circle centers.
/// Coinciding centers fall back to a point reflection through the midpoint.
pub fn mirror_velocity(
    paddle_pos: Position,
    paddle_size: f64,
    ball_pos: Position,
    ball_size: f64,
    vel: Velocity,
) -> Velocity {
    let player = center(paddle_pos, paddle_size);
    let ball = center(ball_pos, ball_size);
    let mid = midpoint(player, ball);

    // Tangent direction
    let dx = -(ball.y - player.y);
    let dy = ball.x - player.x;

    // Velocity as a point relative to the midpoint
    let bv = vel + mid;

    if dx == 0.0 && dy == 0.0 {
        return DVec2::new(2.0 * mid.x - bv.x, 2.0 * mid.y - bv.y);
    }

    let t = ((bv.x - mid.x) * dx + (bv.y - mid.y) * dy) / (dx * dx + dy * dy);
    let x = 2.0 * (mid.x + t * dx) - bv.x - mid.x;
    let y = 2.0 * (mid.y + t * dy) - bv.y - mid.y;
    DVec2::new(x, y)
}

/// Bounce the ball off a paddle it overlaps
///
/// Returns `vel` unchanged while the ball is separating, so a ball that stays
/// inside the paddle for several ticks is only reflected once.
pub fn reflect_off_paddle(
    paddle_pos: Position,
    paddle_size: f64,
    ball_pos: Position,
    ball_size: f64,
    vel: Velocity,
) -> Velocity {
    if is_separating(paddle_pos, ball_pos, vel) {
        return vel;
    }
    mirror_velocity(paddle_pos, paddle_size, ball_pos, ball_size, vel)
}

/// Walls touched by the ball in one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Force the velocity to point back into the arena on each touched axis
///
/// X and Y are handled independently, so a corner flips both.
pub fn reflect_off_walls(
    ball_pos: Position,
    diameter: f64,
    vel: Velocity,
    bounds: &ArenaBounds,
) -> (Velocity, WallHits) {
    let mut hits = WallHits::default();
    let mut out = vel;

    if ball_pos.x + diameter >= bounds.max_x {
        out.x = -vel.x.abs();
        hits.right = true;
    } else if ball_pos.x <= bounds.min_x {
        out.x = vel.x.abs();
        hits.left = true;
    }

    if ball_pos.y + diameter >= bounds.max_y {
        out.y = -vel.y.abs();
        hits.bottom = true;
    } else if ball_pos.y <= bounds.min_y {
        out.y = vel.y.abs();
        hits.top = true;
    }

    (out, hits)
}
