//! Ball/platform contact and quirk effects
//!
//! A landing consumes the platform. Only one landing is resolved per tick:
//! the scan picks the first match by collection order, and the platform is
//! removed by index once the scan is over.

use super::geometry::Bounds;
use super::state::{Ball, GameEvent, GamePhase, GameState, Platform, Quirk};
use crate::consts::POINT_REWARD;

/// Whether a downward-moving ball reaches the platform's top this tick.
///
/// The ball's bottom edge swept from `bottom - v_y` to `bottom` must cover
/// the platform top, and the ball's center must lie strictly inside the
/// platform's horizontal span.
pub fn ball_lands_on(ball: &Ball, platform: &Platform) -> bool {
    let v_y = ball.vel.y;
    if v_y <= 0.0 {
        return false;
    }

    let top = platform.top();
    let bottom = ball.bottom();
    bottom >= top && top >= bottom - v_y && platform.spans_x(ball.pos.x)
}

/// Index of the first platform the ball lands on
pub fn find_landing(ball: &Ball, platforms: &[Platform]) -> Option<usize> {
    platforms.iter().position(|p| ball_lands_on(ball, p))
}

/// Detect a landing and remove the platform from the field
pub fn take_landing(state: &mut GameState) -> Option<Platform> {
    find_landing(&state.ball, &state.platforms).map(|index| state.platforms.remove(index))
}

/// Apply a quirk's effect to the session
pub fn apply_quirk(state: &mut GameState, quirk: Quirk) {
    match quirk {
        Quirk::None => {}
        Quirk::Jump => state.ball.vel.y = -2.0 * state.ball.vel.y,
        Quirk::Break => {
            state.platforms.pop();
        }
        Quirk::Life => state.ball.vel.y = -state.ball.vel.y,
        Quirk::Point => state.score += POINT_REWARD,
        Quirk::Death => state.set_phase(GamePhase::End),
    }
}

/// Full landing step: detect once, consume, dispatch. Returns the quirk of
/// the platform landed on.
pub fn resolve_landing(state: &mut GameState) -> Option<Quirk> {
    let platform = take_landing(state)?;
    let quirk = platform.quirk();

    apply_quirk(state, quirk);
    log::debug!(
        "Landed on {} platform at y={}, score {}",
        quirk,
        platform.rect.y,
        state.score
    );
    state.events.push(GameEvent::Landed {
        quirk,
        score: state.score,
    });
    Some(quirk)
}
