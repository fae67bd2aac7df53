//! Mirror Pong - ball-and-paddle physics core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, reflection, goals, tick loop)
//! - `config`: Validated arena configuration (JSON loadable)
//! - `error`: Configuration and command errors
//!
//! Rendering and keyboard wiring live outside this crate. A presentation layer
//! reads [`sim::Snapshot`]s and forwards [`sim::Command`]s.

pub mod config;
pub mod error;
pub mod sim;

pub use config::{ArenaBounds, ArenaConfig, GoalConfig, GoalSides, PaddleConfig};
pub use error::{CommandError, ConfigError};

use glam::DVec2;

/// A top-left anchored point in arena space
pub type Position = DVec2;

/// Per-tick displacement applied to a position
pub type Velocity = DVec2;

/// Reference configuration constants
pub mod consts {
    /// Arena bounds
    pub const MIN_X: f64 = 0.0;
    pub const MAX_X: f64 = 1200.0;
    pub const MIN_Y: f64 = 0.0;
    pub const MAX_Y: f64 = 800.0;

    /// Entity diameters (bounding box side length)
    pub const BALL_SIZE: f64 = 48.0;
    pub const PLAYER_SIZE: f64 = 64.0;

    /// Paddle displacement per command
    pub const PLAYER_SPEED: f64 = 10.0;

    /// Simulation tick period in milliseconds
    pub const UPDATE_TICK_MS: u64 = 20;
    /// Maximum ticks the driver runs for a single elapsed-time message
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Initial ball state
    pub const BALL_INITIAL_SPEED: f64 = 3.0;
    pub const BALL_INITIAL_POS: (f64, f64) = (500.0, 500.0);

    /// Single-player paddle spawn
    pub const PLAYER_INITIAL_POS: (f64, f64) = (1150.0, 50.0);

    /// Goal geometry (centered on the vertical midpoint)
    pub const GOAL_HEIGHT: f64 = 160.0;
    pub const GOAL_TOLERANCE: f64 = 4.0;
}
