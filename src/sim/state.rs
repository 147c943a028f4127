//! Game state and core simulation types
//!
//! Everything a controller can observe lives in `GameState`. Cloning it is a
//! full deep copy, which is what the environment hands out as a snapshot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::Config;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball seated on the paddle, waiting for launch input
    BallInPaddle,
    /// Active gameplay
    Playing,
    /// Episode ended (out of lives, quit, or the win grace tick expired)
    GameOver,
    /// Last brick destroyed
    Won,
}

impl GamePhase {
    /// Phases only a `Reset` can leave
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// Something that happened during a single tick.
///
/// Returned by value from every tick so the reward model can consume each
/// event exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BoostActivated,
    /// Ball left the paddle at this angle off vertical (degrees, + is right)
    Launched { angle_deg: f32 },
    BrickDestroyed { id: u32, points: u64 },
    /// Ball bounced off the paddle, gaining `english` x-velocity
    PaddleHit { english: f32 },
    LifeLost { remaining: u8 },
    Won,
    GameOver,
    Reset,
}

/// The ball. Position is the top-left corner of its bounding square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in playfield units per tick; positive y moves the ball up
    pub vel: Vec2,
    pub diameter: f32,
}

impl Ball {
    pub fn new(paddle: &Paddle) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::new(BALL_START_VEL.0, BALL_START_VEL.1),
            diameter: BALL_DIAMETER,
        };
        ball.seat_on(paddle);
        ball
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.diameter, self.diameter)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.diameter / 2.0)
    }

    /// Rest the ball on top of the paddle, left edge at the paddle's midpoint
    pub fn seat_on(&mut self, paddle: &Paddle) {
        self.pos.x = paddle.left + paddle.width / 2.0;
        self.pos.y = paddle.top - self.diameter;
    }
}

/// The player's paddle. Only `left` ever changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            left: PADDLE_START_X,
            top: PADDLE_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    /// Move the paddle, clamped to `[0, MAX_PADDLE_X]`
    pub fn set_left(&mut self, x: f32) {
        self.left = x.clamp(0.0, MAX_PADDLE_X);
    }
}

/// A brick. Immutable once placed; removed when hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Position in the initial grid (row-major), stable for the episode
    pub id: u32,
    pub rect: Rect,
}

/// Fresh 6x9 brick grid in row-major order
pub fn brick_grid() -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_COUNT);
    for row in 0..BRICK_ROWS {
        let y = BRICK_ORIGIN_Y + row as f32 * (BRICK_HEIGHT + BRICK_GAP_Y);
        for col in 0..BRICK_COLS {
            let x = BRICK_ORIGIN_X + col as f32 * (BRICK_WIDTH + BRICK_GAP_X);
            bricks.push(Brick {
                id: (row * BRICK_COLS + col) as u32,
                rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
            });
        }
    }
    bricks
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seed of the generator driving launch angles
    pub seed: u64,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Remaining bricks in initial grid order
    pub bricks: Vec<Brick>,
    pub score: u64,
    pub lives: u8,
    pub boosts_remaining: u8,
    /// Ticks of boost left; paddle moves faster while positive
    pub boost_time: u32,
    /// Ticks spent in `Playing` this episode
    pub elapsed_ticks: u64,
    /// Ball speed scale in `[1, max_speed]`
    pub speed_multiplier: f32,
}

impl GameState {
    /// Fresh episode state
    pub fn new(config: &Config, seed: u64) -> Self {
        let paddle = Paddle::default();
        Self {
            seed,
            phase: GamePhase::BallInPaddle,
            ball: Ball::new(&paddle),
            paddle,
            bricks: brick_grid(),
            score: 0,
            lives: config.initial_lives,
            boosts_remaining: config.initial_boosts,
            boost_time: 0,
            elapsed_ticks: 0,
            speed_multiplier: 1.0,
        }
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.len()
    }

    /// Number of bricks destroyed so far this episode
    pub fn bricks_destroyed(&self) -> usize {
        BRICK_COUNT - self.bricks.len()
    }

    pub fn is_boosting(&self) -> bool {
        self.boost_time > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick_grid_layout() {
        let bricks = brick_grid();
        assert_eq!(bricks.len(), 54);
        assert_eq!(bricks[0].rect, Rect::new(10.0, 60.0, 60.0, 12.0));
        assert_eq!(bricks[1].rect.x, 80.0);
        assert_eq!(bricks[9].rect.y, 77.0);
        // Last column ends exactly at the right screen edge minus the margin
        assert_eq!(bricks[8].rect.right(), 630.0);
        assert!(bricks.iter().enumerate().all(|(i, b)| b.id as usize == i));
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(&Config::default(), 7);
        assert_eq!(state.phase, GamePhase::BallInPaddle);
        assert_eq!(state.lives, 1);
        assert_eq!(state.boosts_remaining, 3);
        assert_eq!(state.speed_multiplier, 1.0);
        assert_eq!(state.bricks_destroyed(), 0);
        assert_eq!(state.ball.pos, Vec2::new(330.0, PADDLE_Y - BALL_DIAMETER));
    }

    #[test]
    fn test_paddle_clamps() {
        let mut paddle = Paddle::default();
        paddle.set_left(-40.0);
        assert_eq!(paddle.left, 0.0);
        paddle.set_left(10_000.0);
        assert_eq!(paddle.left, MAX_PADDLE_X);
    }

    #[test]
    fn test_snapshot_is_deep_copy() {
        let mut state = GameState::new(&Config::default(), 1);
        let snapshot = state.clone();
        state.bricks.remove(0);
        state.paddle.set_left(0.0);
        assert_eq!(snapshot.bricks.len(), 54);
        assert_eq!(snapshot.paddle.left, PADDLE_START_X);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(GamePhase::GameOver.is_terminal());
        assert!(GamePhase::Won.is_terminal());
        assert!(!GamePhase::Playing.is_terminal());
        assert!(!GamePhase::BallInPaddle.is_terminal());
    }
}
