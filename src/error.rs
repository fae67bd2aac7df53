//! Error types
//!
//! The physics core itself is infallible. Only configuration loading and
//! command routing can fail.

use thiserror::Error;

/// Rejected arena configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("arena bounds are empty or inverted: x {min_x}..{max_x}, y {min_y}..{max_y}")]
    InvalidBounds {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },

    #[error("{field} must be positive, got {value}")]
    NonPositiveSize { field: &'static str, value: f64 },

    #[error("paddle step must not be negative, got {0}")]
    NegativeStep(f64),

    #[error("tick period must be at least 1 ms")]
    ZeroTickPeriod,

    #[error("ball diameter {diameter} does not fit a {width}x{height} arena")]
    BallExceedsArena {
        diameter: f64,
        width: f64,
        height: f64,
    },

    #[error("expected 1 or 2 paddles, got {0}")]
    PaddleCount(usize),

    #[error("goal height must be positive, got {0}")]
    NonPositiveGoalHeight(f64),

    #[error("goal height {height} exceeds arena height {arena_height}")]
    GoalTooTall { height: f64, arena_height: f64 },

    #[error("goal center y {center_y} lies outside {min_y}..{max_y}")]
    GoalOutOfBounds {
        center_y: f64,
        min_y: f64,
        max_y: f64,
    },

    #[error("goal tolerance must not be negative, got {0}")]
    NegativeTolerance(f64),
}

/// Rejected paddle command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("no paddle with id {0}")]
    UnknownPaddle(usize),

    #[error("paddle {0} only moves vertically")]
    AxisLocked(usize),
}
