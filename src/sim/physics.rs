//! Per-tick motion: ball integration, input impulses, walls, platform drift
//! and the camera-follow scroll.

use super::geometry::Bounds;
use super::state::{Ball, Platform};
use super::tick::TickInput;
use crate::config::SessionConfig;

/// Apply held move keys to the ball's horizontal velocity
pub fn apply_input(ball: &mut Ball, input: &TickInput, config: &SessionConfig) {
    if input.right {
        ball.vel.x += config.push_impulse;
    }
    if input.left {
        ball.vel.x -= config.push_impulse;
    }
    if let Some(cap) = config.max_ball_vx {
        ball.vel.x = ball.vel.x.clamp(-cap, cap);
    }
}

/// Semi-implicit Euler step: gravity into velocity, then velocity into position
pub fn integrate(ball: &mut Ball) {
    ball.vel.y += ball.acc.y;
    ball.pos += ball.vel;
}

/// Reflect the ball off the side and bottom walls of the viewport.
/// There is no ceiling; the scroll keeps the ball in view going up.
pub fn contain(ball: &mut Ball, width: f32, height: f32) {
    if ball.left() < 0.0 && ball.vel.x < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = -ball.vel.x;
    } else if ball.right() > width && ball.vel.x > 0.0 {
        ball.pos.x = width - ball.radius;
        ball.vel.x = -ball.vel.x;
    }

    if ball.bottom() > height && ball.vel.y > 0.0 {
        ball.pos.y = height - ball.radius;
        ball.vel.y = -ball.vel.y;
    }
}

/// Slide every platform by its own velocity, wrapping around the sides once
/// it has fully left the viewport
pub fn move_platforms(platforms: &mut [Platform], width: f32) {
    for platform in platforms.iter_mut() {
        platform.rect.x += platform.v_x();
        let span = width + platform.rect.width;
        if platform.left() > width {
            platform.rect.x -= span;
        } else if platform.right() < 0.0 {
            platform.rect.x += span;
        }
    }
}

/// Camera follow. While the ball rises through the upper half of the
/// viewport, push the whole world down by half the ball's climb.
/// Returns the applied shift.
pub fn auto_scroll(ball: &mut Ball, platforms: &mut [Platform], height: f32) -> f32 {
    if ball.pos.y > height / 2.0 || ball.vel.y >= 0.0 {
        return 0.0;
    }

    let shift = -ball.vel.y / 2.0;
    ball.pos.y += shift;
    for platform in platforms.iter_mut() {
        platform.rect.y += shift;
    }
    shift
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Quirk;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), Vec2::new(0.0, 0.25), 5.0)
    }

    fn platform_at(x: f32, y: f32, v_x: f32) -> Platform {
        Platform::new(x, y, 150.0, v_x, Quirk::None).unwrap()
    }

    #[test]
    fn test_integrate_applies_gravity_first() {
        let mut ball = ball_at(100.0, 100.0, 1.0, 2.0);
        integrate(&mut ball);
        assert_eq!(ball.vel, Vec2::new(1.0, 2.25));
        assert_eq!(ball.pos, Vec2::new(101.0, 102.25));
    }

    #[test]
    fn test_ball_falls_from_rest() {
        let mut ball = ball_at(100.0, 100.0, 0.0, 0.0);
        for _ in 0..4 {
            integrate(&mut ball);
        }
        // 0.25 + 0.5 + 0.75 + 1.0
        assert_eq!(ball.pos.y, 102.5);
        assert_eq!(ball.vel.y, 1.0);
    }

    #[test]
    fn test_input_impulses() {
        let config = SessionConfig::default();
        let mut ball = ball_at(100.0, 100.0, 0.0, 0.0);

        let right = TickInput {
            right: true,
            ..Default::default()
        };
        apply_input(&mut ball, &right, &config);
        apply_input(&mut ball, &right, &config);
        assert_eq!(ball.vel.x, 2.0 * config.push_impulse);

        let both = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        apply_input(&mut ball, &both, &config);
        assert_eq!(ball.vel.x, 2.0 * config.push_impulse);
    }

    #[test]
    fn test_input_clamp() {
        let mut config = SessionConfig::default();
        config.max_ball_vx = Some(1.0);
        let mut ball = ball_at(100.0, 100.0, 0.0, 0.0);
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..10 {
            apply_input(&mut ball, &left, &config);
        }
        assert_eq!(ball.vel.x, -1.0);
    }

    #[test]
    fn test_walls_reflect() {
        let mut ball = ball_at(2.0, 500.0, -3.0, 0.0);
        contain(&mut ball, 500.0, 1000.0);
        assert_eq!(ball.pos.x, 5.0);
        assert_eq!(ball.vel.x, 3.0);

        let mut ball = ball_at(499.0, 500.0, 3.0, 0.0);
        contain(&mut ball, 500.0, 1000.0);
        assert_eq!(ball.pos.x, 495.0);
        assert_eq!(ball.vel.x, -3.0);

        let mut ball = ball_at(250.0, 998.0, 0.0, 7.0);
        contain(&mut ball, 500.0, 1000.0);
        assert_eq!(ball.pos.y, 995.0);
        assert_eq!(ball.vel.y, -7.0);
    }

    #[test]
    fn test_no_ceiling() {
        let mut ball = ball_at(250.0, -50.0, 0.0, -7.0);
        contain(&mut ball, 500.0, 1000.0);
        assert_eq!(ball.pos.y, -50.0);
        assert_eq!(ball.vel.y, -7.0);
    }

    #[test]
    fn test_platforms_drift_and_wrap() {
        let mut platforms = vec![
            platform_at(100.0, 300.0, 1.5),
            platform_at(499.5, 300.0, 1.0),
            platform_at(-149.5, 300.0, -1.0),
        ];
        move_platforms(&mut platforms, 500.0);
        assert_eq!(platforms[0].rect.x, 101.5);
        assert_eq!(platforms[1].rect.x, -149.5);
        assert_eq!(platforms[2].rect.x, 499.5);
        assert_eq!(platforms[1].v_x(), 1.0);
    }

    #[test]
    fn test_auto_scroll_follows_rising_ball() {
        let mut ball = ball_at(250.0, 400.0, 0.0, -8.0);
        let mut platforms = vec![platform_at(100.0, 300.0, 0.0), platform_at(100.0, 100.0, 0.0)];
        let shift = auto_scroll(&mut ball, &mut platforms, 1000.0);
        assert_eq!(shift, 4.0);
        assert_eq!(ball.pos.y, 404.0);
        assert_eq!(platforms[0].rect.y, 304.0);
        assert_eq!(platforms[1].rect.y, 104.0);
    }

    #[test]
    fn test_auto_scroll_idle_cases() {
        let mut platforms = vec![platform_at(100.0, 300.0, 0.0)];

        // Falling
        let mut ball = ball_at(250.0, 400.0, 0.0, 3.0);
        assert_eq!(auto_scroll(&mut ball, &mut platforms, 1000.0), 0.0);

        // Rising but in the lower half
        let mut ball = ball_at(250.0, 700.0, 0.0, -3.0);
        assert_eq!(auto_scroll(&mut ball, &mut platforms, 1000.0), 0.0);
        assert_eq!(platforms[0].rect.y, 300.0);

        // Exactly at the midpoint counts
        let mut ball = ball_at(250.0, 500.0, 0.0, -3.0);
        assert_eq!(auto_scroll(&mut ball, &mut platforms, 1000.0), 1.5);
    }
}
