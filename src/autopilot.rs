//! Demo player
//!
//! Builds the next [`TickInput`] from a read-only snapshot, so a session can
//! run with no human at the keys.

use crate::sim::{Bounds, GamePhase, Platform, Quirk, Snapshot, TickInput};

/// Don't bother steering when this close to the target
const DEAD_ZONE: f32 = 10.0;
/// Top horizontal speed the autopilot builds up
const CRUISE_SPEED: f32 = 4.0;

/// How much the autopilot wants to land on a quirk (higher is better)
fn appeal(quirk: Quirk) -> i32 {
    match quirk {
        Quirk::Point => 3,
        Quirk::Jump => 2,
        Quirk::Life => 2,
        Quirk::None => 1,
        Quirk::Break => 0,
        Quirk::Death => -1,
    }
}

/// Platform the ball should aim for: the most appealing one below it,
/// nearest first on ties
fn pick_target<'a>(snapshot: &Snapshot<'a>) -> Option<&'a Platform> {
    let ball = snapshot.ball;
    snapshot
        .platforms
        .iter()
        .filter(|p| p.top() >= ball.bottom() && appeal(p.quirk()) >= 0)
        .max_by(|a, b| {
            appeal(a.quirk())
                .cmp(&appeal(b.quirk()))
                .then_with(|| b.top().total_cmp(&a.top()))
        })
}

/// Next input for the session
pub fn drive(snapshot: &Snapshot<'_>) -> TickInput {
    let mut input = TickInput::default();

    match snapshot.phase {
        GamePhase::Start | GamePhase::Pause | GamePhase::End => {
            input.mouse_left = true;
        }
        GamePhase::Playing => {
            let ball = snapshot.ball;
            if let Some(target) = pick_target(snapshot) {
                let center = (target.left() + target.right()) / 2.0;
                // Lead the platform's own drift
                let offset = center + target.v_x() * 10.0 - ball.pos.x;
                if offset > DEAD_ZONE && ball.vel.x < CRUISE_SPEED {
                    input.right = true;
                } else if offset < -DEAD_ZONE && ball.vel.x > -CRUISE_SPEED {
                    input.left = true;
                }
            } else if ball.vel.x > 0.5 {
                // Nothing worth chasing: bleed off sideways speed
                input.left = true;
            } else if ball.vel.x < -0.5 {
                input.right = true;
            }
            input.mouse_pos = ball.pos;
        }
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::sim::{Ball, GameState};
    use glam::Vec2;

    fn state_with(ball_x: f32, platforms: Vec<Platform>) -> GameState {
        let mut state = GameState::new(SessionConfig::default()).unwrap();
        state.phase = GamePhase::Playing;
        state.ball = Ball::new(Vec2::new(ball_x, 400.0), Vec2::ZERO, Vec2::new(0.0, 0.25), 5.0);
        state.platforms = platforms;
        state
    }

    #[test]
    fn test_clicks_through_menus() {
        let mut state = GameState::new(SessionConfig::default()).unwrap();
        assert!(drive(&state.snapshot()).mouse_left);
        state.phase = GamePhase::End;
        assert!(drive(&state.snapshot()).mouse_left);
    }

    #[test]
    fn test_steers_toward_platform() {
        let state = state_with(
            100.0,
            vec![Platform::new(300.0, 600.0, 150.0, 0.0, Quirk::None).unwrap()],
        );
        let input = drive(&state.snapshot());
        assert!(input.right && !input.left);

        let state = state_with(
            450.0,
            vec![Platform::new(50.0, 600.0, 150.0, 0.0, Quirk::None).unwrap()],
        );
        let input = drive(&state.snapshot());
        assert!(input.left && !input.right);
    }

    #[test]
    fn test_prefers_points_and_avoids_death() {
        let state = state_with(
            250.0,
            vec![
                Platform::new(0.0, 500.0, 100.0, 0.0, Quirk::Death).unwrap(),
                Platform::new(350.0, 700.0, 100.0, 0.0, Quirk::Point).unwrap(),
            ],
        );
        let target = pick_target(&state.snapshot()).unwrap();
        assert_eq!(target.quirk(), Quirk::Point);
    }

    #[test]
    fn test_ignores_platforms_above() {
        let state = state_with(
            250.0,
            vec![Platform::new(0.0, 100.0, 100.0, 0.0, Quirk::Point).unwrap()],
        );
        assert!(pick_target(&state.snapshot()).is_none());
        let input = drive(&state.snapshot());
        assert!(!input.left && !input.right);
    }
}
