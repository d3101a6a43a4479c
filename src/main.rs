//! Bouncer entry point
//!
//! Boots a session from the launch parameters and runs it headless with the
//! autopilot at the keys. Prints the final snapshot as JSON.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use bouncer::SessionConfig;
use bouncer::autopilot;
use bouncer::sim::{GameEvent, GameState, TickOutcome, tick};

#[derive(Parser)]
#[command(name = "bouncer")]
#[command(about = "Bounce a ball up an endless column of platforms")]
#[command(version)]
struct Cli {
    /// Frame rate (ticks per second)
    #[arg(long)]
    fps: Option<u32>,

    /// Viewport width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Viewport height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// RNG seed for platform generation
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long, default_value = "3600")]
    ticks: u64,

    /// JSON tuning file; command-line values override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable the weighted quirk mix
    #[arg(long)]
    quirks: bool,

    /// Sleep one frame per tick instead of running flat out
    #[arg(long)]
    realtime: bool,
}

impl Cli {
    fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SessionConfig::default(),
        };
        if self.quirks {
            config = config.with_quirks();
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}

fn count_restarts(events: &[GameEvent]) -> u32 {
    events
        .iter()
        .filter(|event| matches!(event, GameEvent::Restarted))
        .count() as u32
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = cli.session_config()?;
    let frame = Duration::from_secs_f32(config.frame_time());
    let mut state = GameState::new(config).context("invalid session configuration")?;
    log::info!("Bouncer (headless) starting, {} ticks", cli.ticks);

    let mut runs = 0u32;
    let mut best = 0u64;
    for _ in 0..cli.ticks {
        let input = autopilot::drive(&state.snapshot());
        let outcome = tick(&mut state, &input);

        // Landings and phase changes are already logged by the simulation
        runs += count_restarts(&state.drain_events());
        best = best.max(state.score);

        if outcome == TickOutcome::Quit {
            log::info!("Quit requested");
            break;
        }
        if cli.realtime {
            std::thread::sleep(frame);
        }
    }

    log::info!("Finished after {} restarts, best score {}", runs, best);
    let json = serde_json::to_string_pretty(&state.snapshot())?;
    println!("{json}");
    Ok(())
}
