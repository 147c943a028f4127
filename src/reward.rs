//! Reward model
//!
//! A pure function of two consecutive snapshots plus the events of the tick
//! between them. The events are taken by value from the engine, so each
//! brick hit pays its bonus exactly once.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::sim::{GameEvent, GamePhase, GameState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardModel {
    pub win_reward: f32,
    pub hit_bonus: f32,
    pub loss_scale: f32,
}

impl Default for RewardModel {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl RewardModel {
    pub fn new(config: &Config) -> Self {
        Self {
            win_reward: config.win_reward,
            hit_bonus: config.hit_bonus,
            loss_scale: config.loss_scale,
        }
    }

    /// Reward for the transition `prev -> cur`.
    ///
    /// - no `prev` (first call of an episode) or a `Reset` tick: 0
    /// - entering `Won`: `win_reward`
    /// - entering `GameOver` (including the win grace tick expiring): minus
    ///   the paddle/ball horizontal distance times `loss_scale`
    /// - otherwise: score gained, plus `hit_bonus` if a brick was destroyed
    pub fn reward(&self, prev: Option<&GameState>, cur: &GameState, events: &[GameEvent]) -> Result<f32> {
        let Some(prev) = prev else {
            return Ok(0.0);
        };
        if events.contains(&GameEvent::Reset) {
            return Ok(0.0);
        }

        let reward = if prev.phase != GamePhase::Won && cur.phase == GamePhase::Won {
            self.win_reward
        } else if prev.phase != GamePhase::GameOver && cur.phase == GamePhase::GameOver {
            -self.loss_penalty(cur)
        } else {
            let gained = (cur.score as f64 - prev.score as f64) as f32;
            let hit = events.iter().any(|e| matches!(e, GameEvent::BrickDestroyed { .. }));
            if hit { gained + self.hit_bonus } else { gained }
        };

        if reward.is_nan() {
            return Err(Error::NumericInvalid {
                what: format!("reward for {:?} -> {:?}", prev.phase, cur.phase),
            });
        }
        Ok(reward)
    }

    /// Distance-scaled penalty; dying closer to the ball costs less
    fn loss_penalty(&self, cur: &GameState) -> f32 {
        let offset = cur.paddle.left - cur.ball.pos.x + cur.paddle.width / 2.0 - cur.ball.diameter / 2.0;
        offset.abs() * self.loss_scale
    }
}
