//! Goal detection
//!
//! A goal is scored when the ball's horizontal extent reaches a vertical edge
//! (within the configured tolerance) while its center lies inside the goal
//! opening. Detection never touches ball state.

use serde::{Deserialize, Serialize};

use super::geometry::center;
use crate::Position;
use crate::config::ArenaConfig;

/// Vertical arena edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Which goal, if any, the ball at `ball_pos` is in
pub fn goal_scored(config: &ArenaConfig, ball_pos: Position) -> Option<Side> {
    let goal = config.goal.as_ref()?;
    let diameter = config.ball_diameter;
    let bounds = &config.bounds;

    let (low, high) = goal.span();
    let center_y = center(ball_pos, diameter).y;
    if center_y < low || center_y > high {
        return None;
    }

    if goal.sides.includes_left() && ball_pos.x <= bounds.min_x + goal.tolerance {
        Some(Side::Left)
    } else if goal.sides.includes_right() && ball_pos.x + diameter >= bounds.max_x - goal.tolerance
    {
        Some(Side::Right)
    } else {
        None
    }
}

/// Boolean form of [`goal_scored`]
#[inline]
pub fn is_goal(config: &ArenaConfig, ball_pos: Position) -> bool {
    goal_scored(config, ball_pos).is_some()
}
