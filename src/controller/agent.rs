//! Agent-driven control
//!
//! The learning algorithm is opaque: the controller only ever calls the four
//! `Agent` methods. An agent that returns an action from
//! `incorporate_feedback` is on-policy and that action is played next;
//! returning `None` means "ask `take_action` again".

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Controller, enforce_tick_cap, episode_over};
use crate::env::Environment;
use crate::error::Result;
use crate::sim::{Actions, GamePhase, GameState, InputSymbol};

pub trait Agent {
    fn take_action(&mut self, state: &GameState) -> Actions;

    fn incorporate_feedback(
        &mut self,
        state: &GameState,
        action: Actions,
        reward: f32,
        next_state: &GameState,
    ) -> Option<Actions>;

    fn read_model(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn write_model(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

/// Runs an `Agent` episode by episode
pub struct AgentController<A: Agent> {
    agent: A,
    write_path: Option<PathBuf>,
}

impl<A: Agent> AgentController<A> {
    /// Wrap `agent`, loading its model from `read_path` first if given
    pub fn new(mut agent: A, read_path: Option<&Path>, write_path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = read_path {
            agent.read_model(path)?;
            log::info!("Agent model read from {}", path.display());
        }
        Ok(Self { agent, write_path })
    }

    pub fn agent(&self) -> &A {
        &self.agent
    }

    pub fn into_agent(self) -> A {
        self.agent
    }
}

impl<A: Agent> Controller for AgentController<A> {
    fn name(&self) -> &'static str {
        "agent"
    }

    fn play_episode(&mut self, env: &mut Environment, max_ticks: u64) -> Result<()> {
        let mut state = env.observe();
        let mut next_action: Option<Actions> = None;
        let mut ticks = 0;

        while !episode_over(env) {
            if enforce_tick_cap(env, ticks, max_ticks)? {
                break;
            }
            let action = match next_action.take() {
                Some(action) => action,
                None => self.agent.take_action(&state),
            };
            let step = env.step(&action)?;
            next_action = self
                .agent
                .incorporate_feedback(&state, action, step.reward, &step.observation);
            state = step.observation;
            ticks += 1;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(path) = &self.write_path {
            self.agent.write_model(path)?;
            log::info!("Agent model written to {}", path.display());
        }
        Ok(())
    }
}

/// Scripted baseline: launch when seated, steer the paddle under the ball,
/// boost when far behind. Off-policy; it never proposes the next action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingAgent {
    /// Horizontal distance (paddle centre to ball centre) treated as aligned
    pub dead_zone: f32,
    /// Distance beyond which a boost is requested
    pub boost_distance: f32,
    /// Reward accumulated through feedback; not part of the model
    #[serde(skip)]
    pub total_reward: f32,
}

impl Default for TrackingAgent {
    fn default() -> Self {
        Self {
            dead_zone: 4.0,
            boost_distance: 150.0,
            total_reward: 0.0,
        }
    }
}

impl Agent for TrackingAgent {
    fn take_action(&mut self, state: &GameState) -> Actions {
        match state.phase {
            GamePhase::BallInPaddle => return InputSymbol::Launch.into(),
            GamePhase::Won | GamePhase::GameOver => return Actions::NONE,
            GamePhase::Playing => {}
        }

        let gap = state.ball.center().x - state.paddle.center_x();
        if gap.abs() <= self.dead_zone {
            return Actions::NONE;
        }

        let direction = if gap < 0.0 { InputSymbol::MoveLeft } else { InputSymbol::MoveRight };
        let mut actions = Actions::from(direction);
        if gap.abs() > self.boost_distance {
            actions.insert(InputSymbol::ActivateBoost);
        }
        actions
    }

    fn incorporate_feedback(
        &mut self,
        _state: &GameState,
        _action: Actions,
        reward: f32,
        _next_state: &GameState,
    ) -> Option<Actions> {
        self.total_reward += reward;
        None
    }

    fn read_model(&mut self, path: &Path) -> Result<()> {
        let json = std::fs::read_to_string(path)?;
        let loaded: TrackingAgent = serde_json::from_str(&json)?;
        self.dead_zone = loaded.dead_zone;
        self.boost_distance = loaded.boost_distance;
        Ok(())
    }

    fn write_model(&self, path: &Path) -> Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
