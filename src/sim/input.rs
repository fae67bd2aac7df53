//! Paddle commands
//!
//! Each command moves exactly one paddle by a fixed step along one axis. The
//! ball is never touched here.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::state::{GameState, PaddleId};
use crate::Position;
use crate::config::ArenaConfig;
use crate::error::CommandError;

/// Discrete movement command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::MoveUp,
        Command::MoveDown,
        Command::MoveLeft,
        Command::MoveRight,
    ];

    /// Displacement for a step of the given size (screen y grows downward)
    pub fn delta(&self, step: f64) -> DVec2 {
        match self {
            Command::MoveUp => DVec2::new(0.0, -step),
            Command::MoveDown => DVec2::new(0.0, step),
            Command::MoveLeft => DVec2::new(-step, 0.0),
            Command::MoveRight => DVec2::new(step, 0.0),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Command::MoveLeft | Command::MoveRight)
    }
}

/// Result of an accepted command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CommandOutcome {
    /// Paddle moved to this position
    Moved(Position),
    /// Paddle overlaps the ball and `freeze_paddle_on_contact` is set
    Suppressed,
}

/// Apply one command to one paddle
pub fn apply_command(
    state: &mut GameState,
    config: &ArenaConfig,
    id: PaddleId,
    command: Command,
) -> Result<CommandOutcome, CommandError> {
    let ball_pos = state.ball.pos;
    let paddle = state
        .paddle_mut(id)
        .ok_or(CommandError::UnknownPaddle(id.0))?;

    if paddle.vertical_only && command.is_horizontal() {
        return Err(CommandError::AxisLocked(id.0));
    }

    if config.freeze_paddle_on_contact && config.overlaps(paddle.pos, ball_pos) {
        return Ok(CommandOutcome::Suppressed);
    }

    let mut pos = paddle.pos + command.delta(config.paddle_step);
    if config.clamp_paddles {
        pos = config.clamp_paddle(pos);
    }
    paddle.pos = pos;

    Ok(CommandOutcome::Moved(pos))
}
