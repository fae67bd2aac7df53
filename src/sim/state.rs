//! Simulation state
//!
//! Plain value records for the ball and paddles, plus the read-only snapshot
//! handed to presentation code.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::ArenaConfig;
use crate::{Position, Velocity};

/// Index of a paddle in configuration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PaddleId(pub usize);

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Position,
    pub vel: Velocity,
}

impl Ball {
    pub fn new(pos: Position, vel: Velocity) -> Self {
        Self { pos, vel }
    }

    /// Advance one tick
    #[inline]
    pub fn integrate(&mut self) {
        self.pos.x += self.vel.x;
        self.pos.y += self.vel.y;
    }
}

/// A player-controlled paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub id: PaddleId,
    pub pos: Position,
    /// Horizontal commands are rejected
    pub vertical_only: bool,
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Position,
    pub max: Position,
}

impl Aabb {
    pub fn from_top_left(pos: Position, size: f64) -> Self {
        Self {
            min: pos,
            max: pos + DVec2::splat(size),
        }
    }
}

/// Position and extent of one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub pos: Position,
    pub size: f64,
    pub bounds: Aabb,
}

impl BodySnapshot {
    fn new(pos: Position, size: f64) -> Self {
        Self {
            pos,
            size,
            bounds: Aabb::from_top_left(pos, size),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub ball: BodySnapshot,
    pub ball_vel: Velocity,
    pub paddles: Vec<BodySnapshot>,
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Ticks applied so far
    pub time_ticks: u64,
    pub ball: Ball,
    /// Sorted by id
    pub paddles: Vec<Paddle>,
}

impl GameState {
    /// Spawn ball and paddles from the configured initial values
    pub fn new(config: &ArenaConfig) -> Self {
        let paddles = config
            .paddles
            .iter()
            .enumerate()
            .map(|(i, p)| Paddle {
                id: PaddleId(i),
                pos: p.position,
                vertical_only: p.vertical_only,
            })
            .collect();

        Self {
            time_ticks: 0,
            ball: Ball::new(config.initial_ball_pos, config.initial_ball_vel),
            paddles,
        }
    }

    pub fn paddle(&self, id: PaddleId) -> Option<&Paddle> {
        self.paddles.get(id.0)
    }

    pub fn paddle_mut(&mut self, id: PaddleId) -> Option<&mut Paddle> {
        self.paddles.get_mut(id.0)
    }

    pub fn snapshot(&self, config: &ArenaConfig) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            ball: BodySnapshot::new(self.ball.pos, config.ball_diameter),
            ball_vel: self.ball.vel,
            paddles: self
                .paddles
                .iter()
                .map(|p| BodySnapshot::new(p.pos, config.paddle_diameter))
                .collect(),
        }
    }
}
