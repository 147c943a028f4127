//! Collision detection and response
//!
//! Walls, bricks and the paddle are all axis-aligned, so every response is a
//! sign flip of one velocity component. The only pluggable piece is how
//! generously the paddle catches the ball.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Ball;
use crate::consts::MAX_BALL_X;

/// Which velocity component a hit flips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectAxis {
    X,
    Y,
}

/// Flip one component of `vel`
#[inline]
pub fn reflect(vel: Vec2, axis: ReflectAxis) -> Vec2 {
    match axis {
        ReflectAxis::X => Vec2::new(-vel.x, vel.y),
        ReflectAxis::Y => Vec2::new(vel.x, -vel.y),
    }
}

/// Ball/paddle catch rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionPolicy {
    /// Rectangles must overlap
    #[default]
    Strict,
    /// Also catches a ball within two paddle widths horizontally and one ball
    /// diameter vertically of the paddle centre, so a fast ball cannot tunnel
    /// through the paddle in one tick
    Tolerant,
}

impl CollisionPolicy {
    pub fn paddle_catches(self, ball: &Rect, paddle: &Rect) -> bool {
        if ball.intersects(paddle) {
            return true;
        }
        match self {
            CollisionPolicy::Strict => false,
            CollisionPolicy::Tolerant => {
                (paddle.center_x() - ball.center_x()).abs() < paddle.w * 2.0
                    && (paddle.center_y() - ball.center_y()).abs() < ball.h
            }
        }
    }
}

/// Decide how a brick hit reflects the ball.
///
/// `pre_tick_x` is the ball's left edge before this tick's move. If the ball
/// started entirely to one side of the brick's horizontal span it came in
/// through a side (flip x); otherwise through the top or bottom (flip y).
pub fn brick_reflect_axis(brick: &Rect, pre_tick_x: f32, ball_diameter: f32) -> ReflectAxis {
    if brick.left() > pre_tick_x + ball_diameter || brick.right() < pre_tick_x {
        ReflectAxis::X
    } else {
        ReflectAxis::Y
    }
}

/// Clamp the ball inside the left, right and top walls, flipping the matching
/// velocity component. The bottom is open. Returns true if anything bounced.
pub fn reflect_walls(ball: &mut Ball) -> bool {
    let mut bounced = false;

    if ball.pos.x <= 0.0 {
        ball.pos.x = 0.0;
        ball.vel = reflect(ball.vel, ReflectAxis::X);
        bounced = true;
    } else if ball.pos.x >= MAX_BALL_X {
        ball.pos.x = MAX_BALL_X;
        ball.vel = reflect(ball.vel, ReflectAxis::X);
        bounced = true;
    }

    if ball.pos.y < 0.0 {
        ball.pos.y = 0.0;
        ball.vel = reflect(ball.vel, ReflectAxis::Y);
        bounced = true;
    }

    bounced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Paddle;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Ball {
        let mut ball = Ball::new(&Paddle::default());
        ball.pos = Vec2::new(x, y);
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_reflect() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(reflect(v, ReflectAxis::X), Vec2::new(-3.0, -4.0));
        assert_eq!(reflect(v, ReflectAxis::Y), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut ball = ball_at(-3.0, 200.0, Vec2::new(-5.0, 2.0));
        assert!(reflect_walls(&mut ball));
        assert_eq!(ball.pos.x, 0.0);
        assert_eq!(ball.vel, Vec2::new(5.0, 2.0));
    }

    #[test]
    fn test_right_wall_bounce() {
        let mut ball = ball_at(MAX_BALL_X + 2.5, 200.0, Vec2::new(4.0, 1.0));
        assert!(reflect_walls(&mut ball));
        assert_eq!(ball.pos.x, MAX_BALL_X);
        assert_eq!(ball.vel.x, -4.0);
    }

    #[test]
    fn test_top_wall_bounce_and_open_bottom() {
        let mut ball = ball_at(100.0, -1.0, Vec2::new(1.0, 5.0));
        assert!(reflect_walls(&mut ball));
        assert_eq!(ball.pos.y, 0.0);
        assert_eq!(ball.vel.y, -5.0);

        let mut falling = ball_at(100.0, SCREEN_HEIGHT + 50.0, Vec2::new(1.0, -5.0));
        assert!(!reflect_walls(&mut falling));
        assert_eq!(falling.vel, Vec2::new(1.0, -5.0));
    }

    #[test]
    fn test_brick_axis_side_hit() {
        let brick = Rect::new(100.0, 60.0, BRICK_WIDTH, BRICK_HEIGHT);
        // Ball started fully left of the brick
        assert_eq!(brick_reflect_axis(&brick, 80.0, BALL_DIAMETER), ReflectAxis::X);
        // Ball started fully right of the brick
        assert_eq!(brick_reflect_axis(&brick, 161.0, BALL_DIAMETER), ReflectAxis::X);
    }

    #[test]
    fn test_brick_axis_top_hit() {
        let brick = Rect::new(100.0, 60.0, BRICK_WIDTH, BRICK_HEIGHT);
        assert_eq!(brick_reflect_axis(&brick, 120.0, BALL_DIAMETER), ReflectAxis::Y);
        // Overlapping the brick's left edge counts as top/bottom
        assert_eq!(brick_reflect_axis(&brick, 90.0, BALL_DIAMETER), ReflectAxis::Y);
        // Exactly touching spans are not "entirely outside"
        assert_eq!(brick_reflect_axis(&brick, 84.0, BALL_DIAMETER), ReflectAxis::Y);
        assert_eq!(brick_reflect_axis(&brick, 160.0, BALL_DIAMETER), ReflectAxis::Y);
    }

    #[test]
    fn test_strict_policy_needs_overlap() {
        let paddle = Paddle::default().rect();
        let near = Rect::new(paddle.x + 70.0, paddle.y - 4.0, BALL_DIAMETER, BALL_DIAMETER);
        assert!(!CollisionPolicy::Strict.paddle_catches(&near, &paddle));
        assert!(CollisionPolicy::Tolerant.paddle_catches(&near, &paddle));

        let overlapping = Rect::new(paddle.x + 10.0, paddle.y - 4.0, BALL_DIAMETER, BALL_DIAMETER);
        assert!(CollisionPolicy::Strict.paddle_catches(&overlapping, &paddle));
    }

    #[test]
    fn test_tolerant_policy_limits() {
        let paddle = Paddle::default().rect();
        let far_side = Rect::new(paddle.center_x() + 2.0 * PADDLE_WIDTH, paddle.y, BALL_DIAMETER, BALL_DIAMETER);
        assert!(!CollisionPolicy::Tolerant.paddle_catches(&far_side, &paddle));

        let far_below = Rect::new(paddle.x, paddle.y + 30.0, BALL_DIAMETER, BALL_DIAMETER);
        assert!(!CollisionPolicy::Tolerant.paddle_catches(&far_below, &paddle));
    }

    proptest! {
        #[test]
        fn prop_wall_bounce_preserves_speed(
            x in -20.0f32..660.0,
            y in -20.0f32..470.0,
            vx in -15.0f32..15.0,
            vy in -15.0f32..15.0,
        ) {
            let mut ball = ball_at(x, y, Vec2::new(vx, vy));
            reflect_walls(&mut ball);
            prop_assert_eq!(ball.vel.x.abs(), vx.abs());
            prop_assert_eq!(ball.vel.y.abs(), vy.abs());
            prop_assert!(ball.pos.x >= 0.0 && ball.pos.x <= MAX_BALL_X);
            prop_assert!(ball.pos.y >= 0.0);
        }
    }
}
