//! Breakout Env - a deterministic Breakout simulation driven one tick at a time
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `reward`: Scalar reward computed from consecutive snapshots
//! - `env`: The step/reset/observe protocol controllers talk to
//! - `controller`: Human, agent-driven and oracle drivers plus reporting
//! - `vector`: Small vector and sparse-feature helpers for agents
//! - `config`: Data-driven tuning

pub mod config;
pub mod controller;
pub mod env;
pub mod error;
pub mod reward;
pub mod sim;
pub mod vector;

pub use config::Config;
pub use env::{Environment, StepResult};
pub use error::{Error, Result};
pub use reward::RewardModel;
pub use sim::{Actions, CollisionPolicy, GameEvent, GamePhase, GameState, InputSymbol};

/// Playfield constants (pixels, y grows downward)
pub mod consts {
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Brick grid: 6 rows of 9, laid out left to right, top to bottom
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COLS: usize = 9;
    pub const BRICK_COUNT: usize = BRICK_ROWS * BRICK_COLS;
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 12.0;
    pub const BRICK_ORIGIN_X: f32 = 10.0;
    pub const BRICK_ORIGIN_Y: f32 = 60.0;
    pub const BRICK_GAP_X: f32 = 10.0;
    pub const BRICK_GAP_Y: f32 = 5.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 60.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    pub const PADDLE_Y: f32 = SCREEN_HEIGHT - PADDLE_HEIGHT - 10.0;
    pub const PADDLE_START_X: f32 = 300.0;
    pub const MAX_PADDLE_X: f32 = SCREEN_WIDTH - PADDLE_WIDTH;

    /// Ball defaults
    pub const BALL_DIAMETER: f32 = 16.0;
    pub const BALL_RADIUS: f32 = BALL_DIAMETER / 2.0;
    pub const MAX_BALL_X: f32 = SCREEN_WIDTH - BALL_DIAMETER;
    /// Velocity the ball carries before its first launch
    pub const BALL_START_VEL: (f32, f32) = (5.0, 5.0);
}
