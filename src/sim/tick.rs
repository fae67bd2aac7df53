//! Fixed timestep simulation tick
//!
//! One tick: integrate the ball, resolve paddle or wall contact, then check
//! for a goal. Velocity corrections take effect on the next tick's move.

use serde::{Deserialize, Serialize};

use super::collision::{WallHits, is_separating, mirror_velocity, reflect_off_walls};
use super::goal::{Side, goal_scored};
use super::state::{GameState, PaddleId};
use crate::config::ArenaConfig;

/// Notifications produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball was reflected off a paddle
    PaddleHit { paddle: PaddleId },
    /// Ball velocity was corrected at one or more walls
    WallHit(WallHits),
    /// Ball is inside a goal opening
    GoalScored { side: Side },
}

/// First paddle (by id) whose circle overlaps the ball
pub fn overlapping_paddle(state: &GameState, config: &ArenaConfig) -> Option<PaddleId> {
    state
        .paddles
        .iter()
        .find(|p| config.overlaps(p.pos, state.ball.pos))
        .map(|p| p.id)
}

/// Advance the simulation by one tick
pub fn tick(state: &mut GameState, config: &ArenaConfig) -> Vec<GameEvent> {
    let mut events = Vec::new();

    state.time_ticks += 1;
    state.ball.integrate();

    if let Some(id) = overlapping_paddle(state, config) {
        // Paddle contact takes precedence over the walls for this tick
        let paddle = state.paddles[id.0];
        let ball = &mut state.ball;
        if !is_separating(paddle.pos, ball.pos, ball.vel) {
            ball.vel = mirror_velocity(
                paddle.pos,
                config.paddle_diameter,
                ball.pos,
                config.ball_diameter,
                ball.vel,
            );
            log::debug!(
                "Tick {}: paddle {} hit, velocity now ({:.3}, {:.3})",
                state.time_ticks,
                id.0,
                ball.vel.x,
                ball.vel.y
            );
            events.push(GameEvent::PaddleHit { paddle: id });
        }
    } else {
        let ball = &mut state.ball;
        let (vel, hits) = reflect_off_walls(ball.pos, config.ball_diameter, ball.vel, &config.bounds);
        ball.vel = vel;
        if hits.any() {
            log::trace!("Tick {}: wall hit {:?}", state.time_ticks, hits);
            events.push(GameEvent::WallHit(hits));
        }
    }

    if let Some(side) = goal_scored(config, state.ball.pos) {
        log::debug!("Tick {}: goal on the {} side", state.time_ticks, side.as_str());
        events.push(GameEvent::GoalScored { side });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaddleConfig;
    use glam::DVec2;
    use proptest::prelude::*;

    fn state_with_ball(config: &ArenaConfig, pos: DVec2, vel: DVec2) -> GameState {
        let mut state = GameState::new(config);
        state.ball.pos = pos;
        state.ball.vel = vel;
        state
    }

    fn config_with_paddle(pos: DVec2) -> ArenaConfig {
        ArenaConfig {
            paddles: vec![PaddleConfig {
                position: pos,
                vertical_only: false,
            }],
            goal: None,
            ..ArenaConfig::default()
        }
    }

    #[test]
    fn test_tick_integration() {
        let config = ArenaConfig::default();
        let mut state = state_with_ball(&config, DVec2::new(500.0, 500.0), DVec2::new(0.0, 15.0));

        let events = tick(&mut state, &config);
        assert!(events.is_empty());
        assert_eq!(state.ball.pos, DVec2::new(500.0, 515.0));
        assert_eq!(state.ball.vel, DVec2::new(0.0, 15.0));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_right_wall_reflection() {
        let config = ArenaConfig::default();
        let x = config.bounds.max_x - config.ball_diameter;
        let mut state = state_with_ball(&config, DVec2::new(x, 200.0), DVec2::new(3.0, 0.0));

        let events = tick(&mut state, &config);
        assert!(state.ball.vel.x < 0.0);
        assert_eq!(state.ball.vel.x.abs(), 3.0);
        assert!(matches!(events[0], GameEvent::WallHit(h) if h.right));
    }

    #[test]
    fn test_left_wall_reflection() {
        let config = ArenaConfig::default();
        let mut state = state_with_ball(&config, DVec2::new(0.0, 200.0), DVec2::new(-3.0, 0.0));
        tick(&mut state, &config);
        assert_eq!(state.ball.vel.x, 3.0);
    }

    #[test]
    fn test_top_wall_reflection() {
        let config = ArenaConfig::default();
        let mut state = state_with_ball(&config, DVec2::new(500.0, 0.0), DVec2::new(0.0, -3.0));
        tick(&mut state, &config);
        assert_eq!(state.ball.vel.y, 3.0);
    }

    #[test]
    fn test_bottom_wall_reflection() {
        let config = ArenaConfig::default();
        let y = config.bounds.max_y - config.ball_diameter;
        let mut state = state_with_ball(&config, DVec2::new(500.0, y), DVec2::new(0.0, 3.0));
        tick(&mut state, &config);
        assert_eq!(state.ball.vel.y, -3.0);
    }

    #[test]
    fn test_correction_applies_next_tick() {
        let config = ArenaConfig::default();
        let y = config.bounds.max_y - config.ball_diameter;
        let mut state = state_with_ball(&config, DVec2::new(500.0, y), DVec2::new(0.0, 3.0));

        tick(&mut state, &config);
        // Moved past the wall before the velocity flipped
        assert_eq!(state.ball.pos.y, y + 3.0);
        tick(&mut state, &config);
        assert_eq!(state.ball.pos.y, y);
    }

    #[test]
    fn test_paddle_takes_precedence_over_wall() {
        let config = config_with_paddle(DVec2::new(1136.0, 376.0));
        // After the move the ball touches the right wall and overlaps the
        // paddle while separating from it
        let mut state = state_with_ball(&config, DVec2::new(1149.0, 384.0), DVec2::new(3.0, 0.0));

        let events = tick(&mut state, &config);
        assert_eq!(state.ball.pos.x + config.ball_diameter, 1200.0);
        assert_eq!(state.ball.vel, DVec2::new(3.0, 0.0));
        assert!(events.is_empty());
    }

    #[test]
    fn test_sustained_overlap_reflects_once() {
        let config = config_with_paddle(DVec2::new(600.0, 400.0));
        let mut state = state_with_ball(&config, DVec2::new(570.0, 408.0), DVec2::new(10.0, 0.0));

        let events = tick(&mut state, &config);
        assert_eq!(events, vec![GameEvent::PaddleHit { paddle: PaddleId(0) }]);
        assert_eq!(state.ball.vel, DVec2::new(-10.0, 0.0));

        // Still overlapping for two more ticks, but moving away
        for _ in 0..2 {
            let events = tick(&mut state, &config);
            assert!(events.is_empty());
            assert_eq!(state.ball.vel, DVec2::new(-10.0, 0.0));
        }
        assert_eq!(state.ball.pos.x, 560.0);
        assert_eq!(overlapping_paddle(&state, &config), Some(PaddleId(0)));

        tick(&mut state, &config);
        assert_eq!(overlapping_paddle(&state, &config), None);
    }

    #[test]
    fn test_lowest_paddle_id_wins() {
        let config = ArenaConfig {
            paddles: vec![
                PaddleConfig {
                    position: DVec2::new(600.0, 400.0),
                    vertical_only: false,
                },
                PaddleConfig {
                    position: DVec2::new(600.0, 400.0),
                    vertical_only: false,
                },
            ],
            goal: None,
            ..ArenaConfig::default()
        };
        let mut state = state_with_ball(&config, DVec2::new(570.0, 408.0), DVec2::new(10.0, 0.0));
        let events = tick(&mut state, &config);
        assert_eq!(events, vec![GameEvent::PaddleHit { paddle: PaddleId(0) }]);
    }

    #[test]
    fn test_paddle_hit_matches_guarded_reflection() {
        let paddle = DVec2::new(600.0, 400.0);
        let config = config_with_paddle(paddle);
        let mut state = state_with_ball(&config, DVec2::new(560.0, 370.0), DVec2::new(6.0, 4.0));

        let events = tick(&mut state, &config);
        assert_eq!(events, vec![GameEvent::PaddleHit { paddle: PaddleId(0) }]);

        let expected = crate::sim::collision::reflect_off_paddle(
            paddle,
            config.paddle_diameter,
            DVec2::new(566.0, 374.0),
            config.ball_diameter,
            DVec2::new(6.0, 4.0),
        );
        assert_ne!(expected, DVec2::new(6.0, 4.0));
        assert_eq!(state.ball.vel, expected);
    }

    #[test]
    fn test_goal_event_does_not_reset_ball() {
        let config = ArenaConfig::default();
        let mut state = state_with_ball(&config, DVec2::new(2.0, 376.0), DVec2::new(-3.0, 0.0));

        let events = tick(&mut state, &config);
        assert!(events.contains(&GameEvent::GoalScored { side: Side::Left }));
        assert!(events.iter().any(|e| matches!(e, GameEvent::WallHit(h) if h.left)));
        assert_eq!(state.ball.pos, DVec2::new(-1.0, 376.0));
        assert_eq!(state.ball.vel, DVec2::new(3.0, 0.0));
    }

    #[test]
    fn test_tunneling_is_accepted() {
        // Fast ball jumps straight past a paddle without touching it
        let config = config_with_paddle(DVec2::new(600.0, 400.0));
        let mut state = state_with_ball(&config, DVec2::new(500.0, 408.0), DVec2::new(200.0, 0.0));
        let events = tick(&mut state, &config);
        assert!(events.is_empty());
        assert_eq!(state.ball.vel, DVec2::new(200.0, 0.0));
    }

    proptest! {
        #[test]
        fn prop_tick_is_deterministic(
            x in 0.0f64..1150.0,
            y in 0.0f64..750.0,
            vx in -40.0f64..40.0,
            vy in -40.0f64..40.0,
        ) {
            let config = ArenaConfig::default();
            let mut a = state_with_ball(&config, DVec2::new(x, y), DVec2::new(vx, vy));
            let mut b = a.clone();
            for _ in 0..200 {
                let ea = tick(&mut a, &config);
                let eb = tick(&mut b, &config);
                prop_assert_eq!(ea, eb);
            }
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_wall_bounce_preserves_speed(
            x in 100.0f64..1000.0,
            y in 200.0f64..600.0,
            vx in -20.0f64..20.0,
            vy in -20.0f64..20.0,
        ) {
            let config = config_with_paddle(DVec2::new(-500.0, -500.0));
            let mut state = state_with_ball(&config, DVec2::new(x, y), DVec2::new(vx, vy));
            for _ in 0..500 {
                tick(&mut state, &config);
                prop_assert_eq!(state.ball.vel.x.abs(), vx.abs());
                prop_assert_eq!(state.ball.vel.y.abs(), vy.abs());
            }
        }
    }
}
