//! Session configuration
//!
//! The three bootstrap parameters (frame rate and viewport size) plus the
//! tuning knobs of the simulation. Loaded from JSON or built in code, and
//! always validated before a session is created.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, Result};
use crate::sim::Quirk;

/// One entry of the weighted quirk table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuirkWeight {
    /// Quirk name as written in the config file
    pub quirk: String,
    pub weight: f32,
}

impl QuirkWeight {
    pub fn new(quirk: Quirk, weight: f32) -> Self {
        Self {
            quirk: quirk.as_str().to_string(),
            weight,
        }
    }
}

/// Session parameters, fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Ticks per second
    pub fps: u32,
    /// Viewport size in pixels
    pub width: u32,
    pub height: u32,

    // === Physics ===
    /// Downward acceleration (pixels/tick²)
    pub gravity: f32,
    /// Horizontal velocity change per tick of held input
    pub push_impulse: f32,
    /// Optional cap on |v_x| of the ball. `None` leaves drift unbounded.
    pub max_ball_vx: Option<f32>,
    pub ball_radius: f32,

    // === Generation ===
    /// RNG seed for platform placement
    pub seed: u64,
    /// Per-tick probability of adding an extra quirked platform (0 disables).
    /// Each hit stacks one more platform 200 px above the current top, no
    /// matter how far the ball has climbed, so with a nonzero chance the
    /// collection keeps growing over a long run (roughly one platform per
    /// `1 / quirk_chance` playing ticks).
    pub quirk_chance: f32,
    /// Weighted quirk table for regular generation. Empty means NONE only.
    pub quirk_weights: Vec<QuirkWeight>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,

            gravity: GRAVITY,
            push_impulse: PUSH_IMPULSE,
            max_ball_vx: None,
            ball_radius: BALL_RADIUS,

            seed: 0,
            quirk_chance: 0.0,
            quirk_weights: Vec::new(),
        }
    }
}

impl SessionConfig {
    /// Config from the three launch parameters, default tuning
    pub fn new(fps: u32, width: u32, height: u32) -> Self {
        Self {
            fps,
            width,
            height,
            ..Self::default()
        }
    }

    /// Config with the quirk mix switched on
    pub fn with_quirks(mut self) -> Self {
        self.quirk_weights = vec![
            QuirkWeight::new(Quirk::None, 0.75),
            QuirkWeight::new(Quirk::Break, 0.2),
            QuirkWeight::new(Quirk::Death, 0.05),
        ];
        self.quirk_chance = 0.01;
        self
    }

    /// Viewport as floats
    #[inline]
    pub fn viewport(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    /// Duration of one tick in seconds
    pub fn frame_time(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// Load config from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Check every parameter. Called before any session is built.
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }

        let min_width = 2 * SPAWN_MARGIN;
        let min_height = BALL_SPAWN_OFFSET as u32;
        if self.width < min_width || self.height < min_height {
            return Err(ConfigError::InvalidViewport {
                width: self.width,
                height: self.height,
                min: min_width,
                min_height,
            });
        }

        check_range("gravity", self.gravity, 0.0, f32::MAX)?;
        check_range("push_impulse", self.push_impulse, 0.0, f32::MAX)?;
        check_range("ball_radius", self.ball_radius, 0.0, f32::MAX)?;
        check_range("quirk_chance", self.quirk_chance, 0.0, 1.0)?;
        if let Some(cap) = self.max_ball_vx {
            check_range("max_ball_vx", cap, 0.0, f32::MAX)?;
        }

        self.quirk_table()?;
        Ok(())
    }

    /// Parsed weighted quirk table, `None` when generation is NONE-only
    pub fn quirk_table(&self) -> Result<Option<Vec<(Quirk, f32)>>> {
        if self.quirk_weights.is_empty() {
            return Ok(None);
        }

        let mut table = Vec::with_capacity(self.quirk_weights.len());
        for entry in &self.quirk_weights {
            let quirk: Quirk = entry.quirk.parse()?;
            if !entry.weight.is_finite() || entry.weight < 0.0 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{} has weight {}",
                    quirk, entry.weight
                )));
            }
            table.push((quirk, entry.weight));
        }

        if table.iter().all(|(_, w)| *w == 0.0) {
            return Err(ConfigError::InvalidWeights("all weights are zero".into()));
        }
        Ok(Some(table))
    }
}

fn check_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}
