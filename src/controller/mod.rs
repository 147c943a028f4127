//! Controllers: everything that drives an `Environment`
//!
//! A controller plays one episode at a time; `run` strings episodes together,
//! resets between them and hands per-episode records to a `Reporter`. The
//! three drivers differ only in where their actions come from:
//! - `HumanController`: a live input device
//! - `AgentController`: an `Agent` fed with (state, action, reward, next state)
//! - `OracleController`: privileged paddle placement with tolerant catching

pub mod agent;
pub mod human;
pub mod oracle;
pub mod report;

pub use agent::{Agent, AgentController, TrackingAgent};
pub use human::{HumanController, InputDevice, ScriptedInput};
pub use oracle::{ORACLE_PADDLE_OFFSET, OracleController};
pub use report::{CsvReporter, LogReporter, Reporter};

use serde::{Deserialize, Serialize};

use crate::env::Environment;
use crate::error::Result;
use crate::sim::{CollisionPolicy, GamePhase, InputSymbol};

/// Default safety cap on steps per episode
pub const DEFAULT_MAX_TICKS: u64 = 100_000;

pub trait Controller {
    fn name(&self) -> &'static str;

    /// Paddle catch rule the environment should be built with
    fn collision_policy(&self) -> CollisionPolicy {
        CollisionPolicy::Strict
    }

    /// Step `env` until the episode reaches `GameOver`.
    ///
    /// After `max_ticks` steps the controller quits the episode.
    fn play_episode(&mut self, env: &mut Environment, max_ticks: u64) -> Result<()>;

    /// Called once after the last episode
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Episode loop settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOptions {
    pub episodes: u32,
    pub max_ticks_per_episode: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            episodes: 1,
            max_ticks_per_episode: DEFAULT_MAX_TICKS,
        }
    }
}

/// What a reporter receives after each episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub episode: u32,
    /// Score summed over this and all earlier episodes
    pub cumulative_score: u64,
    pub score: u64,
    /// Ticks spent in play
    pub ticks: u64,
    pub bricks_remaining: usize,
}

/// Totals over a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub games: u32,
    pub cumulative_score: u64,
    pub cumulative_ticks: u64,
}

impl RunSummary {
    pub fn mean_score(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.cumulative_score as f64 / self.games as f64
        }
    }

    pub fn mean_ticks(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.cumulative_ticks as f64 / self.games as f64
        }
    }
}

/// Play `options.episodes` episodes with `controller`, reporting each one.
///
/// The environment is reset before the first episode and through a `Reset`
/// step after each one; the run ends with a `Quit` step.
pub fn run(
    controller: &mut dyn Controller,
    env: &mut Environment,
    options: &RunOptions,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary> {
    if env.collision_policy() != controller.collision_policy() {
        log::warn!(
            "{} expects {:?} paddle collisions but the environment uses {:?}",
            controller.name(),
            controller.collision_policy(),
            env.collision_policy()
        );
    }

    let mut summary = RunSummary::default();
    env.reset();

    for episode in 0..options.episodes {
        log::info!("{} episode {episode} starting", controller.name());
        controller.play_episode(env, options.max_ticks_per_episode)?;

        let state = env.state();
        summary.games += 1;
        summary.cumulative_score += state.score;
        summary.cumulative_ticks += state.elapsed_ticks;

        let record = EpisodeRecord {
            episode,
            cumulative_score: summary.cumulative_score,
            score: state.score,
            ticks: state.elapsed_ticks,
            bricks_remaining: state.bricks_remaining(),
        };
        log::info!("Episode {episode} complete: score {}, ticks {}", record.score, record.ticks);
        reporter.episode(&record)?;

        env.step(&InputSymbol::Reset.into())?;
    }

    controller.finish()?;
    env.step(&InputSymbol::Quit.into())?;
    reporter.summary(&summary)?;
    Ok(summary)
}

/// True once the episode is over
pub(crate) fn episode_over(env: &Environment) -> bool {
    env.state().phase == GamePhase::GameOver
}

/// Quit the episode if it has run for `max_ticks` steps. Returns true if it did.
pub(crate) fn enforce_tick_cap(env: &mut Environment, ticks: u64, max_ticks: u64) -> Result<bool> {
    if ticks < max_ticks {
        return Ok(false);
    }
    log::warn!("Episode hit the {max_ticks}-tick cap, quitting");
    env.step(&InputSymbol::Quit.into())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::Actions;

    /// Never launches; only the tick cap ends its episodes
    struct Idle;

    impl Controller for Idle {
        fn name(&self) -> &'static str {
            "idle"
        }

        fn play_episode(&mut self, env: &mut Environment, max_ticks: u64) -> Result<()> {
            let mut ticks = 0;
            while !episode_over(env) {
                if enforce_tick_cap(env, ticks, max_ticks)? {
                    break;
                }
                env.step(&Actions::NONE)?;
                ticks += 1;
            }
            Ok(())
        }
    }

    #[test]
    fn test_tick_cap_ends_episode() {
        let mut env = Environment::new(Config::default(), CollisionPolicy::Strict, 3).unwrap();
        let options = RunOptions {
            episodes: 3,
            max_ticks_per_episode: 20,
        };
        let mut records: Vec<EpisodeRecord> = Vec::new();
        let summary = run(&mut Idle, &mut env, &options, &mut records).unwrap();

        assert_eq!(summary.games, 3);
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.score == 0 && r.ticks == 0 && r.bricks_remaining == 54));
        assert_eq!(records[2].episode, 2);
        assert_eq!(env.state().phase, GamePhase::GameOver);
    }

    #[test]
    fn test_summary_means() {
        let summary = RunSummary {
            games: 4,
            cumulative_score: 10,
            cumulative_ticks: 402,
        };
        assert_eq!(summary.mean_score(), 2.5);
        assert_eq!(summary.mean_ticks(), 100.5);
        assert_eq!(RunSummary::default().mean_score(), 0.0);
    }
}
