//! Procedural platform generation
//!
//! Keeps a standing buffer of platforms above the ball. New platforms are
//! stacked a fixed gap above the current topmost one, at a random x, with a
//! horizontal speed drawn from a range that depends on the quirk.

use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{GameState, Platform, Quirk};
use crate::config::SessionConfig;
use crate::consts::*;
use crate::error::{ConfigError, Result};

/// Weighted quirk choice for regular generation
#[derive(Debug, Clone)]
struct QuirkTable {
    quirks: Vec<Quirk>,
    index: WeightedIndex<f32>,
}

/// Session-owned generator state
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    table: Option<QuirkTable>,
    quirk_chance: f32,
}

impl Spawner {
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        let table = match config.quirk_table()? {
            Some(entries) => {
                let (quirks, weights): (Vec<Quirk>, Vec<f32>) = entries.into_iter().unzip();
                let index = WeightedIndex::new(&weights)
                    .map_err(|e| ConfigError::InvalidWeights(e.to_string()))?;
                Some(QuirkTable { quirks, index })
            }
            None => None,
        };

        Ok(Self {
            rng: Pcg32::seed_from_u64(config.seed),
            table,
            quirk_chance: config.quirk_chance,
        })
    }

    /// Quirk for the next regular platform
    fn next_quirk(&mut self) -> Quirk {
        match &self.table {
            Some(table) => table.quirks[table.index.sample(&mut self.rng)],
            None => Quirk::None,
        }
    }

    /// Uniform pick among the non-NONE quirks
    fn next_special_quirk(&mut self) -> Quirk {
        *Quirk::SPECIAL
            .choose(&mut self.rng)
            .unwrap_or(&Quirk::Jump)
    }

    /// Roll for the extra quirked platform
    fn roll_quirked(&mut self) -> bool {
        self.quirk_chance > 0.0 && self.rng.random::<f32>() < self.quirk_chance
    }

    /// Horizontal speed for a platform of the given quirk
    pub fn velocity_for(&mut self, quirk: Quirk) -> f32 {
        match quirk {
            Quirk::None | Quirk::Break | Quirk::Death => self.rng.random_range(-1.0..=1.0),
            Quirk::Jump | Quirk::Life => self.either_side(1.0, 2.0),
            Quirk::Point => self.either_side(2.0, 3.0),
        }
    }

    /// Uniform in [-hi, -lo] or [lo, hi], each side equally likely
    fn either_side(&mut self, lo: f32, hi: f32) -> f32 {
        let speed = self.rng.random_range(lo..=hi);
        if self.rng.random_bool(0.5) { speed } else { -speed }
    }

    /// Build the next platform above `anchor_y`
    pub fn generate(&mut self, quirk: Quirk, anchor_y: f32, viewport_width: u32) -> Platform {
        let v_x = self.velocity_for(quirk);
        let max_x = viewport_width.saturating_sub(SPAWN_MARGIN).max(SPAWN_MARGIN);
        let x = self.rng.random_range(SPAWN_MARGIN..=max_x) as f32;
        Platform::spawned(x, anchor_y - PLATFORM_GAP, PLATFORM_WIDTH, v_x, quirk)
    }
}

/// Platforms are stacked on the topmost one; an empty field restarts from
/// the viewport floor.
fn anchor_y(state: &GameState) -> f32 {
    state
        .topmost()
        .map(|p| p.rect.y)
        .unwrap_or(state.config.height as f32)
}

/// Append one regular platform
pub fn new_platform(state: &mut GameState) {
    let quirk = state.spawner.next_quirk();
    push_platform(state, quirk);
}

/// Append one platform with a random non-NONE quirk
pub fn new_quirked_platform(state: &mut GameState) {
    let quirk = state.spawner.next_special_quirk();
    push_platform(state, quirk);
}

fn push_platform(state: &mut GameState, quirk: Quirk) {
    let anchor = anchor_y(state);
    let platform = state.spawner.generate(quirk, anchor, state.config.width);
    log::debug!(
        "Spawned {} platform at ({}, {}) v_x={:.2}",
        quirk,
        platform.rect.x,
        platform.rect.y,
        platform.v_x()
    );
    state.platforms.push(platform);
}

/// Whether the field needs another platform
pub fn needs_platform(platforms: &[Platform]) -> bool {
    platforms.len() <= MIN_PLATFORMS
        || platforms.last().is_some_and(|top| top.rect.y >= LOW_WATER_Y)
}

/// Top up the field: at most one regular platform per call
pub fn manage_platforms(state: &mut GameState) {
    if needs_platform(&state.platforms) {
        new_platform(state);
    }
}

/// The optional extra quirked platform, rolled once per tick
pub fn maybe_quirked_platform(state: &mut GameState) {
    if state.spawner.roll_quirked() {
        new_quirked_platform(state);
    }
}
