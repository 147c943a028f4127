//! Discrete simulation tick
//!
//! The engine owns the authoritative `GameState` and advances it one tick per
//! `apply_action` call, in a fixed order: inputs, physics (only while
//! playing), boost decay, then phase side effects.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{CollisionPolicy, brick_reflect_axis, reflect, reflect_walls};
use super::input::{Actions, InputSymbol};
use super::state::{GameEvent, GamePhase, GameState};
use crate::config::Config;
use crate::consts::*;

/// The simulation engine
#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
    config: Config,
    policy: CollisionPolicy,
    /// Seeded once; never reseeded across episodes
    rng: Pcg32,
    /// Set on the grace tick after a win; the next tick ends the episode
    won_latched: bool,
}

impl Engine {
    pub fn new(config: Config, policy: CollisionPolicy, seed: u64) -> Self {
        Self {
            state: GameState::new(&config, seed),
            config,
            policy,
            rng: Pcg32::seed_from_u64(seed),
            won_latched: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    /// Start a fresh episode: new bricks, counters and phase
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.config, self.state.seed);
        self.won_latched = false;
        log::debug!("Episode reset");
    }

    /// Place the paddle directly, bypassing movement input (clamped)
    pub fn set_paddle_left(&mut self, x: f32) {
        self.state.paddle.set_left(x);
    }

    /// Advance exactly one tick and report what happened
    pub fn apply_action(&mut self, actions: &Actions) -> Vec<GameEvent> {
        let mut events = Vec::new();

        self.take_input(actions, &mut events);
        let phase_before = self.state.phase;

        if self.state.phase == GamePhase::Playing {
            self.state.elapsed_ticks += 1;
            self.move_ball();
            self.handle_collisions(&mut events);
        }

        self.state.boost_time = self.state.boost_time.saturating_sub(1);

        match self.state.phase {
            GamePhase::BallInPaddle => {
                let paddle = self.state.paddle;
                self.state.ball.seat_on(&paddle);
            }
            // Won holds for one grace tick after the winning tick, then ends
            GamePhase::Won if phase_before == GamePhase::Won => {
                if self.won_latched {
                    self.won_latched = false;
                    self.state.phase = GamePhase::GameOver;
                    events.push(GameEvent::GameOver);
                } else {
                    self.won_latched = true;
                }
            }
            _ => {}
        }

        events
    }

    fn take_input(&mut self, actions: &Actions, events: &mut Vec<GameEvent>) {
        let boost = if self.state.is_boosting() { self.config.boost_speed_bonus } else { 0.0 };
        let step = self.config.paddle_speed + boost;

        if actions.contains(InputSymbol::MoveLeft) {
            let left = self.state.paddle.left - step;
            self.state.paddle.set_left(left);
        }

        if actions.contains(InputSymbol::MoveRight) {
            let left = self.state.paddle.left + step;
            self.state.paddle.set_left(left);
        }

        if actions.contains(InputSymbol::ActivateBoost) && self.state.boosts_remaining > 0 && self.state.boost_time == 0
        {
            self.state.boosts_remaining -= 1;
            self.state.boost_time += self.config.boost_duration;
            events.push(GameEvent::BoostActivated);
        }

        if actions.contains(InputSymbol::Launch) && self.state.phase == GamePhase::BallInPaddle {
            self.launch(events);
        }

        if actions.contains(InputSymbol::Quit) {
            if self.state.phase != GamePhase::GameOver {
                events.push(GameEvent::GameOver);
            }
            self.state.phase = GamePhase::GameOver;
            self.state.paddle.set_left(PADDLE_START_X);
        } else if actions.contains(InputSymbol::Reset) && self.state.phase.is_terminal() {
            self.reset();
            events.push(GameEvent::Reset);
        }
    }

    fn launch(&mut self, events: &mut Vec<GameEvent>) {
        let max = self.config.max_launch_angle_deg;
        let angle_deg = self.rng.random_range(-max..=max);
        let theta = angle_deg.to_radians();
        let speed = self.config.launch_speed;

        self.state.ball.vel.x = speed * theta.sin();
        self.state.ball.vel.y = speed * theta.cos();
        self.state.speed_multiplier = 1.0;
        self.state.phase = GamePhase::Playing;

        log::debug!("Launched at {angle_deg:.1} degrees");
        events.push(GameEvent::Launched { angle_deg });
    }

    fn move_ball(&mut self) {
        let m = self.state.speed_multiplier;
        let ball = &mut self.state.ball;
        ball.pos.x += ball.vel.x * m;
        // Positive y-velocity is "up", screen y grows down
        ball.pos.y -= ball.vel.y * m;
        reflect_walls(ball);
    }

    fn handle_collisions(&mut self, events: &mut Vec<GameEvent>) {
        let m = self.state.speed_multiplier;
        let ball_rect = self.state.ball.rect();

        // At most one brick per tick, first in grid order
        if let Some(index) = self.state.bricks.iter().position(|b| b.rect.intersects(&ball_rect)) {
            // The first brick of an episode is free
            let points = if self.state.bricks_destroyed() > 0 { self.config.brick_points } else { 0 };
            let brick = self.state.bricks.remove(index);
            self.state.score += points;

            let pre_tick_x = self.state.ball.pos.x - self.state.ball.vel.x * m;
            let axis = brick_reflect_axis(&brick.rect, pre_tick_x, self.state.ball.diameter);
            self.state.ball.vel = reflect(self.state.ball.vel, axis);

            self.state.speed_multiplier = (m + self.config.speed_increment).min(self.config.max_speed);

            log::debug!(
                "Brick {} destroyed (+{points}), {} left, speed x{:.2}",
                brick.id,
                self.state.bricks.len(),
                self.state.speed_multiplier
            );
            events.push(GameEvent::BrickDestroyed { id: brick.id, points });
        }

        if self.state.bricks.is_empty() {
            self.state.score += self.config.win_bonus;
            self.state.phase = GamePhase::Won;
            log::info!("All bricks cleared, score {}", self.state.score);
            events.push(GameEvent::Won);
            return;
        }

        let paddle = self.state.paddle;
        let ball_rect = self.state.ball.rect();

        if self.policy.paddle_catches(&ball_rect, &paddle.rect()) {
            let english = (ball_rect.center_x() - paddle.center_x()) / self.config.english_divisor;
            let ball = &mut self.state.ball;
            ball.pos.y = paddle.top - ball.diameter;
            ball.vel.x += english;
            ball.vel.y = -ball.vel.y;
            log::debug!("Paddle hit, english {english:.2}");
            events.push(GameEvent::PaddleHit { english });
        } else if ball_rect.top() > paddle.top {
            self.state.lives = self.state.lives.saturating_sub(1);
            events.push(GameEvent::LifeLost { remaining: self.state.lives });

            if self.state.lives > 0 {
                self.state.phase = GamePhase::BallInPaddle;
                self.state.ball.seat_on(&paddle);
                log::debug!("Ball lost, {} lives left", self.state.lives);
            } else {
                self.state.phase = GamePhase::GameOver;
                log::info!("Game over, score {}", self.state.score);
                events.push(GameEvent::GameOver);
            }
        }
    }
}
