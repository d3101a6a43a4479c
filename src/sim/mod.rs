//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (platform creation order)
//! - No rendering or input-device dependencies

pub mod collision;
pub mod geometry;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{apply_quirk, ball_lands_on, find_landing, resolve_landing, take_landing};
pub use geometry::{Bounds, Rect};
pub use spawn::{manage_platforms, new_platform, new_quirked_platform, Spawner};
pub use state::{Ball, GameEvent, GamePhase, GameState, Platform, Quirk, Snapshot};
pub use tick::{TickInput, TickOutcome, tick};
