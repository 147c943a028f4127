//! Oracle control: an idealised baseline
//!
//! Instead of moving the paddle with inputs, the oracle places it directly
//! under the ball every tick and relies on the tolerant catch rule to handle
//! balls fast enough to skip past the paddle in one tick.

use super::{Controller, enforce_tick_cap, episode_over};
use crate::env::Environment;
use crate::error::Result;
use crate::sim::{Actions, CollisionPolicy, GamePhase, InputSymbol};

/// Paddle left edge is kept this far left of the ball's left edge
pub const ORACLE_PADDLE_OFFSET: f32 = 35.0;

#[derive(Debug, Default, Clone, Copy)]
pub struct OracleController;

impl Controller for OracleController {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn collision_policy(&self) -> CollisionPolicy {
        CollisionPolicy::Tolerant
    }

    fn play_episode(&mut self, env: &mut Environment, max_ticks: u64) -> Result<()> {
        let mut ticks = 0;
        while !episode_over(env) {
            if enforce_tick_cap(env, ticks, max_ticks)? {
                break;
            }
            let ball_x = env.state().ball.pos.x;
            env.place_paddle(ball_x - ORACLE_PADDLE_OFFSET);

            let actions = if env.state().phase == GamePhase::BallInPaddle {
                InputSymbol::Launch.into()
            } else {
                Actions::NONE
            };
            env.step(&actions)?;
            ticks += 1;
        }
        Ok(())
    }
}
