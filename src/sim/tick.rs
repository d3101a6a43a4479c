//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session by one frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::resolve_landing;
use super::physics::{apply_input, auto_scroll, contain, integrate, move_platforms};
use super::spawn::{manage_platforms, maybe_quirked_platform};
use super::state::{GamePhase, GameState};

/// Polled input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Move key states (held)
    pub left: bool,
    pub right: bool,
    /// Pause key
    pub pause: bool,
    /// Mouse buttons (pressed this frame)
    pub mouse_left: bool,
    pub mouse_right: bool,
    /// Cursor position in viewport pixels
    pub mouse_pos: Vec2,
}

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    match state.phase {
        GamePhase::Start => {
            if input.mouse_right {
                return TickOutcome::Quit;
            }
            if input.mouse_left {
                state.set_phase(GamePhase::Playing);
            }
        }

        GamePhase::Playing => {
            step(state, input);
            if input.pause && state.phase == GamePhase::Playing {
                state.set_phase(GamePhase::Pause);
            }
        }

        GamePhase::Pause => {
            if input.mouse_right {
                return TickOutcome::Quit;
            }
            if input.mouse_left {
                state.set_phase(GamePhase::Playing);
            }
        }

        GamePhase::End => {
            if input.mouse_left {
                state.restart();
            }
        }
    }

    TickOutcome::Continue
}

/// One PLAYING frame: motion, scroll, landing, then refill the field
fn step(state: &mut GameState, input: &TickInput) {
    let (width, height) = state.config.viewport();
    state.time_ticks += 1;

    apply_input(&mut state.ball, input, &state.config);
    integrate(&mut state.ball);
    contain(&mut state.ball, width, height);
    move_platforms(&mut state.platforms, width);
    auto_scroll(&mut state.ball, &mut state.platforms, height);

    resolve_landing(state);
    if state.phase != GamePhase::Playing {
        return;
    }

    maybe_quirked_platform(state);
    manage_platforms(state);
}
