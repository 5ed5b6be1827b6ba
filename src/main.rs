//! Gazeboard - Gaze-Driven VR Gallery Carousel
//!
//! Headless runner: builds the gallery and drives it with a simulated head
//! that nods up and down.

use clap::Parser;
use glam::Quat;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gazeboard::{animation::Easing, config::Config, Gallery};

/// Gazeboard - gaze-driven VR gallery carousel simulator
#[derive(Parser, Debug)]
#[command(name = "gazeboard", version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate (overrides config, 0 = until Ctrl+C)
    #[arg(short, long)]
    frames: Option<u64>,

    /// Frame rate (overrides config)
    #[arg(long)]
    fps: Option<u32>,

    /// Run frames back to back instead of at wall-clock pace
    #[arg(long)]
    no_realtime: bool,

    /// Easing curve: linear, quad_in_out, cubic_in, cubic_out (overrides config)
    #[arg(short, long)]
    easing: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    info!("Starting {} v{}", gazeboard::NAME, gazeboard::VERSION);

    let mut config = if let Some(ref path) = args.config {
        Config::from_file(path)?
    } else {
        Config::load()?
    };

    apply_overrides(&mut config, &args);
    config.validate()?;

    info!("Boards: {}", config.carousel.board_count());
    info!("Gaze threshold: {}", config.gaze.threshold);
    info!(
        "Animation: {:.2}s, {} easing",
        config.animation.duration_secs,
        config.animation.easing.as_str()
    );
    info!(
        "Simulation: {} fps, {} frames, realtime {}",
        config.simulation.fps, config.simulation.frames, config.simulation.realtime
    );

    let gallery = Gallery::build(&config)?;

    let runtime = build_runtime()?;
    let turns = runtime.block_on(run_frames(gallery, &config))?;

    info!("Gazeboard stopped after {} carousel turns", turns);
    Ok(())
}

/// Apply CLI overrides on top of the loaded configuration.
fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(frames) = args.frames {
        config.simulation.frames = frames;
    }
    if let Some(fps) = args.fps {
        config.simulation.fps = fps;
    }
    if args.no_realtime {
        config.simulation.realtime = false;
    }
    if let Some(ref easing) = args.easing {
        config.animation.easing = Easing::from_str(easing);
    }
}

/// Single-threaded runtime: the frame callback owns all state.
///
/// `enable_all` turns on whichever drivers the platform has, so the Ctrl+C
/// listener works on unix and Windows alike.
fn build_runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Head pitch in radians at time `t` seconds.
fn simulated_pitch(config: &Config, t: f32) -> f32 {
    let sim = &config.simulation;
    let phase = std::f32::consts::TAU * t / sim.period_secs;
    (sim.amplitude_deg * phase.sin()).to_radians()
}

/// Drive the gallery frame by frame until the frame budget runs out or
/// Ctrl+C arrives. Returns the number of carousel turns.
async fn run_frames(mut gallery: Gallery, config: &Config) -> anyhow::Result<u64> {
    let sim = &config.simulation;
    let dt = 1.0 / sim.fps as f32;
    let mut interval = tokio::time::interval(Duration::from_secs_f32(dt));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut turns = 0u64;
    loop {
        if sim.frames > 0 && gallery.frame() >= sim.frames {
            break;
        }

        if sim.realtime {
            tokio::select! {
                _ = interval.tick() => {}
                _ = &mut shutdown => {
                    info!("Shutdown signal received");
                    break;
                }
            }
        } else {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!("Shutdown signal received");
                    break;
                }
                _ = tokio::task::yield_now() => {}
            }
        }

        let t = gallery.frame() as f32 * dt;
        gallery.set_head_orientation(Quat::from_rotation_x(simulated_pitch(config, t)));

        let outcome = gallery.on_step(dt);
        if outcome.rotation.is_some() {
            turns += 1;
        }
    }

    let selected = gallery.controller().carousel().selected_board();
    info!(
        "Final selection: board {} ({}), mode {}",
        gallery.controller().selected_index(),
        selected.content.asset(),
        gallery.controller().mode()
    );

    Ok(turns)
}
