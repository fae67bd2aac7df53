//! Mirror Pong headless runner
//!
//! Runs the physics core in real time without a renderer:
//!
//! ```text
//! mirror-pong [CONFIG.json] [SECONDS]
//! ```
//!
//! The paddle follows a fixed up/down pattern, goals are tallied per side and
//! the final snapshot is printed as JSON. Set `RUST_LOG=debug` to see hits.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::HashMap;
    use std::time::{Duration, Instant};

    use mirror_pong::ArenaConfig;
    use mirror_pong::sim::{Command, GameEvent, Message, PaddleId, Side, TickDriver};

    /// Ticks between scripted paddle commands
    const COMMAND_INTERVAL: u64 = 5;
    /// Commands in one direction before turning around
    const SWEEP_LENGTH: u64 = 20;

    /// External goal tally; the core only reports events
    #[derive(Default)]
    struct Scorekeeper {
        goals: HashMap<Side, u32>,
    }

    impl Scorekeeper {
        fn record(&mut self, events: &[GameEvent]) {
            for event in events {
                if let GameEvent::GoalScored { side } = event {
                    let count = self.goals.entry(*side).or_default();
                    *count += 1;
                    log::info!("Goal on the {} side ({} so far)", side.as_str(), count);
                }
            }
        }

        fn get(&self, side: Side) -> u32 {
            self.goals.get(&side).copied().unwrap_or(0)
        }
    }

    fn scripted_command(tick: u64) -> Option<Command> {
        if tick % COMMAND_INTERVAL != 0 {
            return None;
        }
        let sweep = (tick / COMMAND_INTERVAL) / SWEEP_LENGTH;
        Some(if sweep % 2 == 0 {
            Command::MoveDown
        } else {
            Command::MoveUp
        })
    }

    /// Scripted commands for every tick in `(after, through]`
    fn scripted_commands(after: u64, through: u64) -> impl Iterator<Item = Command> {
        (after + 1..=through).filter_map(scripted_command)
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let mut args = std::env::args().skip(1);
        let config = match args.next() {
            Some(path) => ArenaConfig::load(path)?,
            None => ArenaConfig::default(),
        };
        let seconds: f64 = match args.next() {
            Some(s) => s.parse()?,
            None => 10.0,
        };
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(format!("invalid run length: {seconds}").into());
        }

        let paddle_count = config.paddles.len();
        let mut driver = TickDriver::from_config(config)?;
        let mut scores = Scorekeeper::default();

        let run_for = Duration::from_secs_f64(seconds);
        let started = Instant::now();
        let mut last = started;
        let mut last_scripted = 0;

        while started.elapsed() < run_for {
            std::thread::sleep(driver.time_until_next_tick());
            let now = Instant::now();
            let events = driver.handle(Message::Elapsed(now - last));
            last = now;
            scores.record(&events);

            let tick = driver.simulation().state().time_ticks;
            for command in scripted_commands(last_scripted, tick) {
                for id in 0..paddle_count {
                    driver.handle(Message::Command {
                        paddle: PaddleId(id),
                        command,
                    });
                }
            }
            last_scripted = tick;
        }

        driver.handle(Message::Cancel);

        let snapshot = driver.snapshot();
        log::info!(
            "Finished after {} ticks: left {} / right {}",
            snapshot.tick,
            scores.get(Side::Left),
            scores.get(Side::Right)
        );
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_multi_tick_batch_keeps_script() {
            // One batch of 8 ticks from tick 3 crosses ticks 5 and 10
            let batched: Vec<_> = scripted_commands(3, 11).collect();
            let single: Vec<_> = (4..=11).filter_map(scripted_command).collect();
            assert_eq!(batched, single);
            assert_eq!(batched.len(), 2);
        }

        #[test]
        fn test_sweep_turns_around() {
            let last = COMMAND_INTERVAL * SWEEP_LENGTH;
            assert_eq!(scripted_command(last - COMMAND_INTERVAL), Some(Command::MoveDown));
            assert_eq!(scripted_command(last), Some(Command::MoveUp));
            assert_eq!(scripted_command(last + 1), None);
            assert_eq!(scripted_commands(0, 0).count(), 0);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Mirror Pong (headless) starting...");

    if let Err(e) = native::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The core is driven by the host page on wasm32
}
