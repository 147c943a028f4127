//! Game tuning
//!
//! Every gameplay and reward number that is not playfield geometry. Loaded
//! from JSON; missing fields fall back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tunable simulation and reward parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Episode ===
    /// Lives at the start of an episode
    pub initial_lives: u8,
    /// Boosts available per episode
    pub initial_boosts: u8,

    // === Paddle ===
    /// Pixels moved per tick for a left/right input
    pub paddle_speed: f32,
    /// Extra pixels per tick while a boost is running
    pub boost_speed_bonus: f32,
    /// Ticks a single boost lasts
    pub boost_duration: u32,

    // === Ball ===
    /// Velocity magnitude given on launch
    pub launch_speed: f32,
    /// Launch angle is drawn uniformly from ±this many degrees off vertical
    pub max_launch_angle_deg: f32,
    /// Speed multiplier gain per destroyed brick
    pub speed_increment: f32,
    /// Speed multiplier ceiling
    pub max_speed: f32,
    /// Divisor applied to the paddle-centre offset when adding english
    pub english_divisor: f32,

    // === Scoring ===
    /// Points per destroyed brick (the first brick of an episode scores nothing)
    pub brick_points: u64,
    /// Points added when the last brick falls
    pub win_bonus: u64,

    // === Reward shaping ===
    /// Reward for the tick that enters `Won`
    pub win_reward: f32,
    /// Extra reward on any tick that destroys a brick
    pub hit_bonus: f32,
    /// Scale of the distance penalty on the tick that enters `GameOver`
    pub loss_scale: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_lives: 1,
            initial_boosts: 3,

            paddle_speed: 7.0,
            boost_speed_bonus: 5.0,
            boost_duration: 25,

            launch_speed: 5.0,
            max_launch_angle_deg: 45.0,
            speed_increment: 0.05,
            max_speed: 2.0,
            english_divisor: 7.0,

            brick_points: 3,
            win_bonus: 1000,

            win_reward: 1000.0,
            hit_bonus: 5.0,
            loss_scale: 0.05,
        }
    }
}

impl Config {
    /// Parse a config from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make the physics or the reward non-finite
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("paddle_speed", self.paddle_speed),
            ("launch_speed", self.launch_speed),
            ("max_speed", self.max_speed),
            ("english_divisor", self.english_divisor),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!("{name} must be finite and positive, got {value}")));
            }
        }

        let non_negative = [
            ("boost_speed_bonus", self.boost_speed_bonus),
            ("max_launch_angle_deg", self.max_launch_angle_deg),
            ("speed_increment", self.speed_increment),
            ("win_reward", self.win_reward),
            ("hit_bonus", self.hit_bonus),
            ("loss_scale", self.loss_scale),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!("{name} must be finite and non-negative, got {value}")));
            }
        }

        if self.max_launch_angle_deg >= 90.0 {
            return Err(Error::InvalidConfig(format!(
                "max_launch_angle_deg must be below 90, got {}",
                self.max_launch_angle_deg
            )));
        }
        if self.max_speed < 1.0 {
            return Err(Error::InvalidConfig(format!("max_speed must be at least 1.0, got {}", self.max_speed)));
        }
        if self.initial_lives == 0 {
            return Err(Error::InvalidConfig("initial_lives must be at least 1".into()));
        }
        Ok(())
    }
}
