//! Game state and core simulation types
//!
//! Everything a session mutates lives in [`GameState`]. The render layer only
//! ever sees a [`Snapshot`] borrowed from it.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use super::geometry::{Bounds, Rect};
use super::spawn::Spawner;
use crate::config::SessionConfig;
use crate::consts::*;
use crate::error::{ConfigError, Result};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to click in
    Start,
    /// Active gameplay
    Playing,
    /// Run ended (DEATH platform)
    End,
    /// Game is paused
    Pause,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Only `acc.y` is integrated; horizontal motion comes from input impulses
    pub acc: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, acc: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            acc,
            radius: radius.max(0.0),
        }
    }

    /// Fresh ball for a new session: centered, at rest, falling under gravity
    pub fn spawn(config: &SessionConfig) -> Self {
        let (width, height) = config.viewport();
        Self::new(
            Vec2::new(width / 2.0, height - BALL_SPAWN_OFFSET),
            Vec2::ZERO,
            Vec2::new(0.0, config.gravity),
            config.ball_radius,
        )
    }
}

impl Bounds for Ball {
    #[inline]
    fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// Special effect carried by a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quirk {
    None,
    Jump,
    Break,
    Life,
    Point,
    Death,
}

impl Quirk {
    pub const ALL: [Quirk; 6] = [
        Quirk::None,
        Quirk::Jump,
        Quirk::Break,
        Quirk::Life,
        Quirk::Point,
        Quirk::Death,
    ];

    /// Every quirk that actually does something
    pub const SPECIAL: [Quirk; 5] = [
        Quirk::Jump,
        Quirk::Break,
        Quirk::Life,
        Quirk::Point,
        Quirk::Death,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Quirk::None => "none",
            Quirk::Jump => "jump",
            Quirk::Break => "break",
            Quirk::Life => "life",
            Quirk::Point => "point",
            Quirk::Death => "death",
        }
    }

    /// Palette index the renderer draws this platform with
    pub fn display_tag(&self) -> u8 {
        match self {
            Quirk::None => 7, // white
            Quirk::Jump => 5, // dark blue
            Quirk::Break => 9, // orange
            Quirk::Life => 3, // green
            Quirk::Point => 10, // yellow
            Quirk::Death => 8, // red
        }
    }
}

impl fmt::Display for Quirk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quirk {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Quirk::None),
            "jump" => Ok(Quirk::Jump),
            "break" => Ok(Quirk::Break),
            "life" => Ok(Quirk::Life),
            "point" => Ok(Quirk::Point),
            "death" => Ok(Quirk::Death),
            _ => Err(ConfigError::UnknownQuirk(s.to_string())),
        }
    }
}

/// A platform: a thin rectangle drifting sideways, tagged with a quirk
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub rect: Rect,
    v_x: f32,
    quirk: Quirk,
}

impl Platform {
    /// Build a platform. Velocity and quirk are fixed for its whole life.
    pub fn new(x: f32, y: f32, width: f32, v_x: f32, quirk: Quirk) -> Result<Self> {
        if !v_x.is_finite() {
            return Err(ConfigError::InvalidVelocity(v_x));
        }
        if !width.is_finite() || width < 0.0 {
            return Err(ConfigError::InvalidWidth(width));
        }
        Ok(Self::spawned(x, y, width, v_x, quirk))
    }

    /// Internal constructor for values produced by the simulation itself
    pub(crate) fn spawned(x: f32, y: f32, width: f32, v_x: f32, quirk: Quirk) -> Self {
        debug_assert!(v_x.is_finite() && width >= 0.0);
        Self {
            rect: Rect::new(x, y, width, PLATFORM_HEIGHT),
            v_x,
            quirk,
        }
    }

    #[inline]
    pub fn v_x(&self) -> f32 {
        self.v_x
    }

    #[inline]
    pub fn quirk(&self) -> Quirk {
        self.quirk
    }
}

/// Serialized with the palette tag so renderers need no quirk table
impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_struct("Platform", 4)?;
        out.serialize_field("rect", &self.rect)?;
        out.serialize_field("v_x", &self.v_x)?;
        out.serialize_field("quirk", &self.quirk)?;
        out.serialize_field("display_tag", &self.quirk.display_tag())?;
        out.end()
    }
}

impl Bounds for Platform {
    #[inline]
    fn top(&self) -> f32 {
        self.rect.top()
    }

    #[inline]
    fn bottom(&self) -> f32 {
        self.rect.bottom()
    }

    #[inline]
    fn left(&self) -> f32 {
        self.rect.left()
    }

    #[inline]
    fn right(&self) -> f32 {
        self.rect.right()
    }
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    Landed { quirk: Quirk, score: u64 },
    Restarted,
}

/// Read-only view handed to the render layer
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub ball: &'a Ball,
    pub platforms: &'a [Platform],
    pub score: u64,
    pub phase: GamePhase,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Validated session parameters
    pub config: SessionConfig,
    /// Current phase
    pub phase: GamePhase,
    pub ball: Ball,
    /// Ordered by creation: the last entry is the topmost platform
    pub platforms: Vec<Platform>,
    /// Score
    pub score: u64,
    /// Simulation tick counter (PLAYING ticks only)
    pub time_ticks: u64,
    /// Events since the host last drained them
    pub events: Vec<GameEvent>,
    pub(crate) spawner: Spawner,
}

impl GameState {
    /// Create a new session. Rejects invalid configuration up front.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let spawner = Spawner::from_config(&config)?;
        log::info!(
            "New session {}x{} @ {} fps, seed {}",
            config.width,
            config.height,
            config.fps,
            config.seed
        );

        Ok(Self {
            ball: Ball::spawn(&config),
            platforms: initial_platforms(&config),
            config,
            phase: GamePhase::Start,
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
            spawner,
        })
    }

    /// Put the session back to its opening layout. The RNG keeps running so
    /// consecutive runs differ.
    pub fn restart(&mut self) {
        self.ball = Ball::spawn(&self.config);
        self.platforms = initial_platforms(&self.config);
        self.score = 0;
        self.time_ticks = 0;
        self.set_phase(GamePhase::Start);
        self.events.push(GameEvent::Restarted);
        log::info!("Session restarted");
    }

    /// Change phase, recording the transition
    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.events.push(GameEvent::PhaseChanged {
                from: self.phase,
                to: phase,
            });
            self.phase = phase;
        }
    }

    /// The most recently created platform, if any
    pub fn topmost(&self) -> Option<&Platform> {
        self.platforms.last()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            ball: &self.ball,
            platforms: &self.platforms,
            score: self.score,
            phase: self.phase,
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Two resting platforms under the spawn point
fn initial_platforms(config: &SessionConfig) -> Vec<Platform> {
    let (width, height) = config.viewport();
    let x = width / 2.0;
    vec![
        Platform::spawned(x, height - PLATFORM_GAP, PLATFORM_WIDTH, 0.0, Quirk::None),
        Platform::spawned(x, height - 2.0 * PLATFORM_GAP, PLATFORM_WIDTH, 0.0, Quirk::None),
    ]
}
