//! Simulation ownership and tick scheduling
//!
//! [`Simulation`] owns a validated config and the mutable state. Outside code
//! can read snapshots and move paddles, nothing else. [`TickDriver`] is a
//! single-threaded actor that turns elapsed wall time into whole ticks.

use std::time::Duration;

use super::input::{Command, CommandOutcome, apply_command};
use super::state::{Ball, GameState, Paddle, PaddleId, Snapshot};
use super::tick::{GameEvent, tick};
use crate::config::ArenaConfig;
use crate::consts::MAX_SUBSTEPS;
use crate::error::{CommandError, ConfigError};

/// A running ball-and-paddle session
#[derive(Debug, Clone)]
pub struct Simulation {
    config: ArenaConfig,
    state: GameState,
}

impl Simulation {
    /// Validate `config` and spawn the initial state
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config);
        log::info!(
            "Simulation created: {}x{} arena, {} paddle(s), tick {} ms",
            config.arena_width(),
            config.arena_height(),
            config.paddles.len(),
            config.tick_period_ms
        );
        Ok(Self { config, state })
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn ball(&self) -> &Ball {
        &self.state.ball
    }

    pub fn paddles(&self) -> &[Paddle] {
        &self.state.paddles
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot(&self.config)
    }

    /// Run exactly one tick
    pub fn step(&mut self) -> Vec<GameEvent> {
        tick(&mut self.state, &self.config)
    }

    /// Move one paddle
    pub fn command(
        &mut self,
        paddle: PaddleId,
        command: Command,
    ) -> Result<CommandOutcome, CommandError> {
        apply_command(&mut self.state, &self.config, paddle, command)
    }
}

/// Input to the [`TickDriver`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Wall time passed since the previous message
    Elapsed(Duration),
    /// Run one tick immediately
    Tick,
    Command { paddle: PaddleId, command: Command },
    /// Stop ticking for good
    Cancel,
}

/// Fixed-period tick scheduler owning a [`Simulation`]
#[derive(Debug, Clone)]
pub struct TickDriver {
    sim: Simulation,
    period: Duration,
    accumulator: Duration,
    cancelled: bool,
}

impl TickDriver {
    pub fn new(sim: Simulation) -> Self {
        let period = sim.config().tick_period();
        Self {
            sim,
            period,
            accumulator: Duration::ZERO,
            cancelled: false,
        }
    }

    /// Build a driver from an unvalidated config
    pub fn from_config(config: ArenaConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(Simulation::new(config)?))
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn snapshot(&self) -> Snapshot {
        self.sim.snapshot()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Wall time left before the next tick is due
    pub fn time_until_next_tick(&self) -> Duration {
        self.period.saturating_sub(self.accumulator)
    }

    /// Process one message to completion
    pub fn handle(&mut self, message: Message) -> Vec<GameEvent> {
        if self.cancelled {
            return Vec::new();
        }
        match message {
            Message::Elapsed(elapsed) => self.advance(elapsed),
            Message::Tick => self.sim.step(),
            Message::Command { paddle, command } => {
                if let Err(e) = self.sim.command(paddle, command) {
                    log::warn!("Rejected {:?} for paddle {}: {}", command, paddle.0, e);
                }
                Vec::new()
            }
            Message::Cancel => {
                self.cancel();
                Vec::new()
            }
        }
    }

    /// Run every whole tick covered by `elapsed`, up to [`MAX_SUBSTEPS`]
    pub fn advance(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        if self.cancelled {
            return Vec::new();
        }
        // Bounded so long gaps cannot overflow the accumulator
        let elapsed = elapsed.min(self.period.saturating_mul(MAX_SUBSTEPS + 1));
        self.accumulator = self.accumulator.saturating_add(elapsed);

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= self.period && substeps < MAX_SUBSTEPS {
            events.extend(self.sim.step());
            self.accumulator -= self.period;
            substeps += 1;
        }

        if self.accumulator >= self.period {
            log::debug!(
                "Dropping {:?} of tick backlog after {} substeps",
                self.accumulator - self.period,
                MAX_SUBSTEPS
            );
            self.accumulator = self.period;
        }

        events
    }

    /// Stop scheduling; later messages are ignored
    pub fn cancel(&mut self) {
        if !self.cancelled {
            self.cancelled = true;
            self.accumulator = Duration::ZERO;
            log::info!("Tick driver cancelled at tick {}", self.sim.state().time_ticks);
        }
    }
}
