//! Environment protocol
//!
//! What every controller talks to: `reset`, `observe` and `step`. Each step
//! snapshots the state, applies one engine tick, snapshots again and scores
//! the transition. Snapshots are owned copies and never change afterwards.

use crate::config::Config;
use crate::error::Result;
use crate::reward::RewardModel;
use crate::sim::{Actions, CollisionPolicy, Engine, GameEvent, GameState};

/// Outcome of one `step`
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub reward: f32,
    pub observation: GameState,
    /// What happened during the tick
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone)]
pub struct Environment {
    engine: Engine,
    reward: RewardModel,
}

impl Environment {
    /// Build an environment; the launch-angle generator is seeded once here
    pub fn new(config: Config, policy: CollisionPolicy, seed: u64) -> Result<Self> {
        config.validate()?;
        let reward = RewardModel::new(&config);
        log::info!("Environment created (seed {seed}, {policy:?} paddle collisions)");
        Ok(Self {
            engine: Engine::new(config, policy, seed),
            reward,
        })
    }

    /// Start a new episode and return its first observation
    pub fn reset(&mut self) -> GameState {
        self.engine.reset();
        self.observe()
    }

    /// Copy of the current state
    pub fn observe(&self) -> GameState {
        self.engine.state().clone()
    }

    /// Borrowed view of the current state, for callers that only read a field
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// Advance one tick.
    ///
    /// Any action set is accepted in any phase. The only error is a NaN
    /// reward, which a validated config cannot produce.
    pub fn step(&mut self, actions: &Actions) -> Result<StepResult> {
        let prev = self.observe();
        let events = self.engine.apply_action(actions);
        let observation = self.observe();
        let reward = self.reward.reward(Some(&prev), &observation, &events)?;
        Ok(StepResult {
            reward,
            observation,
            events,
        })
    }

    /// Put the paddle at `left` (clamped) outside of normal movement input.
    ///
    /// Reserved for privileged drivers such as the oracle.
    pub fn place_paddle(&mut self, left: f32) {
        self.engine.set_paddle_left(left);
    }

    pub fn seed(&self) -> u64 {
        self.engine.state().seed
    }

    pub fn config(&self) -> &Config {
        self.engine.config()
    }

    pub fn collision_policy(&self) -> CollisionPolicy {
        self.engine.policy()
    }

    pub fn reward_model(&self) -> &RewardModel {
        &self.reward
    }
}
