//! Circle geometry over top-left anchored boxes
//!
//! Ball and paddle are stored as the top-left corner of a square box. For
//! collision purposes each box is treated as the circle inscribed in it.

use glam::DVec2;

use crate::Position;

/// Center of the circle inscribed in a box of side `size` at `pos`
#[inline]
pub fn center(pos: Position, size: f64) -> Position {
    DVec2::new(pos.x + size / 2.0, pos.y + size / 2.0)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(p1: Position, p2: Position) -> f64 {
    ((p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)).sqrt()
}

/// Arithmetic mean of two points
#[inline]
pub fn midpoint(a: Position, b: Position) -> Position {
    DVec2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// True when the paddle and ball circles touch or intersect
pub fn overlap(paddle_pos: Position, paddle_size: f64, ball_pos: Position, ball_size: f64) -> bool {
    let paddle_center = center(paddle_pos, paddle_size);
    let ball_center = center(ball_pos, ball_size);
    distance(paddle_center, ball_center) <= paddle_size / 2.0 + ball_size / 2.0
}
