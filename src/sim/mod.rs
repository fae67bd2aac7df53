//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (paddles by id)
//! - No rendering or platform dependencies

pub mod collision;
pub mod driver;
pub mod geometry;
pub mod goal;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{WallHits, is_separating, mirror_velocity, reflect_off_paddle, reflect_off_walls};
pub use driver::{Message, Simulation, TickDriver};
pub use geometry::{center, distance, midpoint, overlap};
pub use goal::{Side, goal_scored, is_goal};
pub use input::{Command, CommandOutcome, apply_command};
pub use state::{Aabb, Ball, BodySnapshot, GameState, Paddle, PaddleId, Snapshot};
pub use tick::{GameEvent, overlapping_paddle, tick};
