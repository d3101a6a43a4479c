//! Bouncer - a ball climbing an endless column of platforms
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, quirks, generation)
//! - `config`: Session bootstrap parameters and tuning
//! - `autopilot`: Input source that plays the game from a snapshot
//! - `error`: Configuration errors

pub mod autopilot;
pub mod config;
pub mod error;
pub mod sim;

pub use config::SessionConfig;
pub use error::{ConfigError, Result};

/// Game configuration constants
pub mod consts {
    /// Reference frame rate (ticks per second)
    pub const DEFAULT_FPS: u32 = 60;
    /// Reference viewport
    pub const DEFAULT_WIDTH: u32 = 500;
    pub const DEFAULT_HEIGHT: u32 = 1000;

    /// Downward acceleration, pixels per tick²
    pub const GRAVITY: f32 = 0.25;
    /// Horizontal velocity added per tick while a move key is held
    pub const PUSH_IMPULSE: f32 = 0.5;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    /// Ball spawns this far above the viewport bottom
    pub const BALL_SPAWN_OFFSET: f32 = 600.0;

    /// Platform geometry
    pub const PLATFORM_WIDTH: f32 = 150.0;
    pub const PLATFORM_HEIGHT: f32 = 4.0;
    /// Vertical distance between consecutive platforms
    pub const PLATFORM_GAP: f32 = 200.0;
    /// Horizontal margin for platform spawn positions
    pub const SPAWN_MARGIN: u32 = 50;

    /// Generate while the collection holds this many platforms or fewer
    pub const MIN_PLATFORMS: usize = 5;
    /// Generate while the topmost platform sits at or below this y
    pub const LOW_WATER_Y: f32 = 750.0;

    /// Score awarded by a POINT platform
    pub const POINT_REWARD: u64 = 1500;
}
