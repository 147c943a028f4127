//! Direct per-tick control from an input device

use super::{Controller, enforce_tick_cap, episode_over};
use crate::env::Environment;
use crate::error::Result;
use crate::sim::{Actions, InputSymbol};

/// Source of live input, polled once per tick
pub trait InputDevice {
    /// Currently asserted inputs, or `None` once the device has closed
    fn poll(&mut self) -> Option<Actions>;
}

/// Replays a fixed sequence of action sets, then reports closed
#[derive(Debug, Clone)]
pub struct ScriptedInput<I> {
    frames: I,
}

impl<I: Iterator<Item = Actions>> ScriptedInput<I> {
    pub fn new(frames: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            frames: frames.into_iter(),
        }
    }
}

impl<I: Iterator<Item = Actions>> InputDevice for ScriptedInput<I> {
    fn poll(&mut self) -> Option<Actions> {
        self.frames.next()
    }
}

/// Passes device input straight through; a closed device quits
pub struct HumanController<D: InputDevice> {
    device: D,
}

impl<D: InputDevice> HumanController<D> {
    pub fn new(device: D) -> Self {
        Self { device }
    }
}

impl<D: InputDevice> Controller for HumanController<D> {
    fn name(&self) -> &'static str {
        "human"
    }

    fn play_episode(&mut self, env: &mut Environment, max_ticks: u64) -> Result<()> {
        let mut ticks = 0;
        while !episode_over(env) {
            if enforce_tick_cap(env, ticks, max_ticks)? {
                break;
            }
            let actions = match self.device.poll() {
                Some(actions) => actions,
                None => {
                    log::info!("Input device closed");
                    InputSymbol::Quit.into()
                }
            };
            env.step(&actions)?;
            ticks += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::consts::PADDLE_START_X;
    use crate::sim::{CollisionPolicy, GamePhase};

    #[test]
    fn test_inputs_pass_through_until_device_closes() {
        let mut env = Environment::new(Config::default(), CollisionPolicy::Strict, 8).unwrap();
        let frames = vec![Actions::from(InputSymbol::MoveLeft); 5];
        let mut human = HumanController::new(ScriptedInput::new(frames));

        human.play_episode(&mut env, 1_000).unwrap();
        assert_eq!(env.state().phase, GamePhase::GameOver);
        // Quit recentres the paddle
        assert_eq!(env.state().paddle.left, PADDLE_START_X);
    }

    #[test]
    fn test_noisy_tokens_drive_paddle() {
        let mut env = Environment::new(Config::default(), CollisionPolicy::Strict, 8).unwrap();
        let frames = [["right", "???"], ["right", "jump"], ["right", ""]].map(|tokens| Actions::parse_lossy(tokens));
        let mut device = ScriptedInput::new(frames);

        while let Some(actions) = device.poll() {
            env.step(&actions).unwrap();
        }
        assert_eq!(env.state().paddle.left, PADDLE_START_X + 21.0);
        assert_eq!(env.state().phase, GamePhase::BallInPaddle);
    }
}
