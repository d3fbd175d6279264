//! Ball/paddle collision response
//!
//! Where the ball strikes the paddle face decides the outgoing deflection
//! angle, and every hit ramps the ball's speed up. The ramp has no upper
//! bound; it is the game's difficulty escalator.

use super::state::{Ball, Paddle};
use crate::consts::{MAX_DEFLECTION, PADDLE_BOOST};

/// Normalized vertical contact position relative to the paddle center
///
/// Roughly [-1, 1]; exceeds the range when contact happens past the
/// paddle's vertical extent, and is left unclamped.
#[inline]
pub fn hit_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    (ball.pos.y - paddle.pos.y) / paddle.half_size.y
}

/// Resolve a detected ball/paddle overlap
///
/// Maps the hit offset linearly to a deflection angle in [-45, 45] degrees,
/// ramps the speed, reverses horizontal travel, and seats the ball flush
/// against the paddle's outer face so the same contact cannot re-trigger on
/// the next step.
pub fn resolve_ball_paddle(ball: &mut Ball, paddle: &Paddle) {
    let angle = hit_offset(ball, paddle) * MAX_DEFLECTION;

    ball.speed *= PADDLE_BOOST;

    // Horizontal travel always reverses, whatever the angle sign
    let flip = if ball.vel.x > 0.0 { -1.0 } else { 1.0 };
    ball.vel.x = ball.speed * angle.cos() * flip;
    ball.vel.y = ball.speed * angle.sin();

    if ball.pos.x < paddle.pos.x {
        ball.pos.x = paddle.pos.x - paddle.half_size.x - ball.half_size.x;
    } else {
        ball.pos.x = paddle.pos.x + paddle.half_size.x + ball.half_size.x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BALL_BASE_SPEED, PADDLE_BOOST};
    use crate::sim::state::Side;
    use glam::Vec2;
    use proptest::prelude::*;

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::new();
        ball.pos = pos;
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_center_hit_reflects_flat() {
        let paddle = Paddle::new(Side::Left);
        let mut ball = ball_at(
            Vec2::new(paddle.pos.x + 0.02, paddle.pos.y),
            Vec2::new(-BALL_BASE_SPEED, 0.0),
        );

        resolve_ball_paddle(&mut ball, &paddle);

        assert_eq!(ball.vel.y, 0.0);
        assert!(ball.vel.x > 0.0, "horizontal direction must reverse");
        assert!((ball.speed - BALL_BASE_SPEED * PADDLE_BOOST).abs() < 1e-6);
    }

    #[test]
    fn test_offset_hit_deflects() {
        let paddle = Paddle::new(Side::Left);
        // Strike the upper half of the face
        let mut ball = ball_at(
            Vec2::new(paddle.pos.x + 0.02, paddle.pos.y + paddle.half_size.y / 2.0),
            Vec2::new(-BALL_BASE_SPEED, 0.0),
        );

        resolve_ball_paddle(&mut ball, &paddle);

        assert!(ball.vel.y > 0.0, "upper-face hit deflects upward");
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_hit_offset_is_unclamped() {
        let paddle = Paddle::new(Side::Right);
        let mut ball = Ball::new();
        ball.pos = Vec2::new(paddle.pos.x, paddle.pos.y + paddle.half_size.y * 1.5);
        assert!((hit_offset(&ball, &paddle) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_flush_reposition_both_sides() {
        let left = Paddle::new(Side::Left);
        let right = Paddle::new(Side::Right);

        // Ball approaching the left paddle from the field side
        let mut ball = ball_at(Vec2::new(left.pos.x + 0.005, 0.0), Vec2::new(-0.3, 0.0));
        resolve_ball_paddle(&mut ball, &left);
        assert!(
            (ball.pos.x - (left.pos.x + left.half_size.x + ball.half_size.x)).abs() < 1e-6
        );

        // Ball approaching the right paddle from the field side
        let mut ball = ball_at(Vec2::new(right.pos.x - 0.005, 0.0), Vec2::new(0.3, 0.0));
        resolve_ball_paddle(&mut ball, &right);
        assert!(
            (ball.pos.x - (right.pos.x - right.half_size.x - ball.half_size.x)).abs() < 1e-6
        );
    }

    #[test]
    fn test_speed_ramp_is_unbounded() {
        // Open question in the source game: there is no speed cap. Document
        // the runaway growth rather than inventing one.
        let paddle = Paddle::new(Side::Left);
        let mut ball = ball_at(Vec2::new(paddle.pos.x + 0.02, 0.0), Vec2::new(-0.3, 0.0));

        for _ in 0..100 {
            resolve_ball_paddle(&mut ball, &paddle);
        }
        assert!(ball.speed > BALL_BASE_SPEED * 1000.0);
    }

    proptest! {
        #[test]
        fn prop_velocity_magnitude_equals_speed(
            offset in -1.5f32..1.5,
            incoming_x in prop::sample::select(vec![-0.3f32, 0.3f32]),
        ) {
            let paddle = Paddle::new(Side::Left);
            let mut ball = Ball::new();
            ball.pos = Vec2::new(
                paddle.pos.x + 0.02,
                paddle.pos.y + offset * paddle.half_size.y,
            );
            ball.vel = Vec2::new(incoming_x, 0.1);
            let pre_speed = ball.speed;

            resolve_ball_paddle(&mut ball, &paddle);

            prop_assert!((ball.vel.length() - ball.speed).abs() < 1e-5);
            prop_assert!((ball.speed - pre_speed * PADDLE_BOOST).abs() < 1e-6);
            // Horizontal direction reversed
            prop_assert!(ball.vel.x * incoming_x < 0.0);
        }
    }
}
