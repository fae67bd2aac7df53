//! Arena configuration
//!
//! Everything the core needs to know up front: bounds, entity sizes, tick
//! cadence, spawn points and optional goal geometry. Loaded from JSON and
//! validated once before a simulation may start.

use std::path::Path;
use std::time::Duration;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::geometry::overlap;
use crate::{Position, Velocity};

/// Rectangular play field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            min_x: MIN_X,
            max_x: MAX_X,
            min_y: MIN_Y,
            max_y: MAX_Y,
        }
    }
}

impl ArenaBounds {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Vertical midpoint of the arena
    #[inline]
    pub fn center_y(&self) -> f64 {
        (self.max_y + self.min_y) / 2.0
    }
}

/// Which vertical edges carry a goal opening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GoalSides {
    Left,
    Right,
    #[default]
    Both,
}

impl GoalSides {
    pub fn includes_left(&self) -> bool {
        matches!(self, GoalSides::Left | GoalSides::Both)
    }

    pub fn includes_right(&self) -> bool {
        matches!(self, GoalSides::Right | GoalSides::Both)
    }
}

/// Goal opening on the vertical edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalConfig {
    /// Y coordinate of the opening's center
    pub center_y: f64,
    /// Full height of the opening
    pub height: f64,
    /// Inward margin from the edge that still counts as crossing it
    #[serde(default)]
    pub tolerance: f64,
    #[serde(default)]
    pub sides: GoalSides,
}

impl GoalConfig {
    /// Goal of the reference height centered on the arena's vertical midpoint
    pub fn centered(bounds: &ArenaBounds) -> Self {
        Self {
            center_y: bounds.center_y(),
            height: GOAL_HEIGHT,
            tolerance: GOAL_TOLERANCE,
            sides: GoalSides::Both,
        }
    }

    /// Inclusive vertical span of the opening
    pub fn span(&self) -> (f64, f64) {
        let half = self.height / 2.0;
        (self.center_y - half, self.center_y + half)
    }
}

/// Spawn settings for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleConfig {
    pub position: Position,
    /// Restrict the paddle to up/down commands (two-paddle mode)
    #[serde(default)]
    pub vertical_only: bool,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            position: DVec2::new(PLAYER_INITIAL_POS.0, PLAYER_INITIAL_POS.1),
            vertical_only: false,
        }
    }
}

/// Immutable simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub bounds: ArenaBounds,
    pub ball_diameter: f64,
    pub paddle_diameter: f64,
    /// Displacement applied per paddle command
    pub paddle_step: f64,
    pub tick_period_ms: u64,
    pub initial_ball_pos: Position,
    pub initial_ball_vel: Velocity,
    pub paddles: Vec<PaddleConfig>,
    pub goal: Option<GoalConfig>,
    /// Keep paddles inside the arena bounds
    pub clamp_paddles: bool,
    /// Ignore commands for a paddle while it overlaps the ball
    pub freeze_paddle_on_contact: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        let bounds = ArenaBounds::default();
        Self {
            bounds,
            ball_diameter: BALL_SIZE,
            paddle_diameter: PLAYER_SIZE,
            paddle_step: PLAYER_SPEED,
            tick_period_ms: UPDATE_TICK_MS,
            initial_ball_pos: DVec2::new(BALL_INITIAL_POS.0, BALL_INITIAL_POS.1),
            initial_ball_vel: DVec2::splat(BALL_INITIAL_SPEED),
            paddles: vec![PaddleConfig::default()],
            goal: Some(GoalConfig::centered(&bounds)),
            clamp_paddles: false,
            freeze_paddle_on_contact: false,
        }
    }
}

impl ArenaConfig {
    /// Two vertical-only paddles near the left and right edges
    pub fn two_player() -> Self {
        let bounds = ArenaBounds::default();
        let y = bounds.center_y() - PLAYER_SIZE / 2.0;
        Self {
            paddles: vec![
                PaddleConfig {
                    position: DVec2::new(bounds.min_x + 20.0, y),
                    vertical_only: true,
                },
                PaddleConfig {
                    position: DVec2::new(bounds.max_x - 20.0 - PLAYER_SIZE, y),
                    vertical_only: true,
                },
            ],
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded arena config from {}", path.as_ref().display());
        Ok(config)
    }

    #[inline]
    pub fn arena_width(&self) -> f64 {
        self.bounds.width()
    }

    #[inline]
    pub fn arena_height(&self) -> f64 {
        self.bounds.height()
    }

    /// Circle overlap test using the configured paddle and ball sizes
    pub fn overlaps(&self, paddle_pos: Position, ball_pos: Position) -> bool {
        overlap(paddle_pos, self.paddle_diameter, ball_pos, self.ball_diameter)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Clamp a paddle's top-left corner so its box stays inside the arena
    pub fn clamp_paddle(&self, pos: Position) -> Position {
        let b = &self.bounds;
        let max_x = (b.max_x - self.paddle_diameter).max(b.min_x);
        let max_y = (b.max_y - self.paddle_diameter).max(b.min_y);
        DVec2::new(pos.x.clamp(b.min_x, max_x), pos.y.clamp(b.min_y, max_y))
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.bounds;
        let mut scalars = vec![
            ("bounds.min_x", b.min_x),
            ("bounds.max_x", b.max_x),
            ("bounds.min_y", b.min_y),
            ("bounds.max_y", b.max_y),
            ("ball_diameter", self.ball_diameter),
            ("paddle_diameter", self.paddle_diameter),
            ("paddle_step", self.paddle_step),
            ("initial_ball_pos.x", self.initial_ball_pos.x),
            ("initial_ball_pos.y", self.initial_ball_pos.y),
            ("initial_ball_vel.x", self.initial_ball_vel.x),
            ("initial_ball_vel.y", self.initial_ball_vel.y),
        ];
        for paddle in &self.paddles {
            scalars.push(("paddles.position.x", paddle.position.x));
            scalars.push(("paddles.position.y", paddle.position.y));
        }
        if let Some(goal) = &self.goal {
            scalars.push(("goal.center_y", goal.center_y));
            scalars.push(("goal.height", goal.height));
            scalars.push(("goal.tolerance", goal.tolerance));
        }
        if let Some(&(field, value)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field, value });
        }

        if b.max_x <= b.min_x || b.max_y <= b.min_y {
            return Err(ConfigError::InvalidBounds {
                min_x: b.min_x,
                max_x: b.max_x,
                min_y: b.min_y,
                max_y: b.max_y,
            });
        }
        if self.ball_diameter <= 0.0 {
            return Err(ConfigError::NonPositiveSize {
                field: "ball_diameter",
                value: self.ball_diameter,
            });
        }
        if self.paddle_diameter <= 0.0 {
            return Err(ConfigError::NonPositiveSize {
                field: "paddle_diameter",
                value: self.paddle_diameter,
            });
        }
        if self.paddle_step < 0.0 {
            return Err(ConfigError::NegativeStep(self.paddle_step));
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.ball_diameter > b.width() || self.ball_diameter > b.height() {
            return Err(ConfigError::BallExceedsArena {
                diameter: self.ball_diameter,
                width: b.width(),
                height: b.height(),
            });
        }
        if self.paddles.is_empty() || self.paddles.len() > 2 {
            return Err(ConfigError::PaddleCount(self.paddles.len()));
        }

        if let Some(goal) = &self.goal {
            if goal.height <= 0.0 {
                return Err(ConfigError::NonPositiveGoalHeight(goal.height));
            }
            if goal.height > b.height() {
                return Err(ConfigError::GoalTooTall {
                    height: goal.height,
                    arena_height: b.height(),
                });
            }
            if goal.center_y < b.min_y || goal.center_y > b.max_y {
                return Err(ConfigError::GoalOutOfBounds {
                    center_y: goal.center_y,
                    min_y: b.min_y,
                    max_y: b.max_y,
                });
            }
            if goal.tolerance < 0.0 {
                return Err(ConfigError::NegativeTolerance(goal.tolerance));
            }
        }

        Ok(())
    }
}
