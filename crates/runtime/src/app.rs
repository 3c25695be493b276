//! # Simulation Loop
//!
//! Owns the clock. The physics crate only ever sees the elapsed time it is
//! handed, so the same loop runs with a fixed step for reproducible runs or
//! with a measured step when `--realtime` is set.

use anyhow::{bail, Context, Result};
use physics::{PairStrategy, ParticleSim, SceneConfig};
use std::time::{Duration, Instant};

use crate::garden::NodeGarden;
use crate::{Args, Scene};

impl Scene {
    fn preset(self) -> SceneConfig {
        match self {
            Scene::Collide => SceneConfig::collision_test(),
            Scene::Garden => SceneConfig::node_garden(),
        }
    }

    /// Collide advances one unit per frame; the garden runs in seconds at 30 FPS.
    fn default_dt(self) -> f32 {
        match self {
            Scene::Collide => 1.0,
            Scene::Garden => 1.0 / 30.0,
        }
    }
}

/// Per-step numbers reported in the log
pub(crate) struct StepReport {
    pub(crate) checks: usize,
    pub(crate) hits: usize,
    pub(crate) detection: Duration,
}

/// Run the configured scene for `args.steps` steps.
///
/// # Errors
///
/// Returns an error when the scene config cannot be loaded or the options
/// are inconsistent.
#[allow(clippy::cast_precision_loss)]
pub fn run(args: &Args) -> Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        bail!("--fps must be positive, got {}", args.fps);
    }

    let config = match &args.config {
        Some(path) => SceneConfig::from_path(path)
            .with_context(|| format!("loading scene config {}", path.display()))?,
        None => args.scene.preset(),
    };

    let mut rng = args.seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    let mut sim = ParticleSim::from_config(&config, &mut rng)?;
    sim.strategy = if args.trivial {
        PairStrategy::BruteForce
    } else {
        PairStrategy::Grid
    };
    let garden = NodeGarden::new(config.cell_size);

    let fixed_dt = args.fixed_dt.unwrap_or_else(|| args.scene.default_dt());
    let frame_duration = Duration::from_secs_f32(1.0 / args.fps);

    tracing::info!(
        "Starting {:?} scene: {} particles, {}x{} view, cell size {}, {:?} strategy, {} steps",
        args.scene,
        sim.particles.len(),
        config.width,
        config.height,
        config.cell_size,
        sim.strategy,
        args.steps
    );

    let mut last_frame = Instant::now();
    let mut total_checks = 0_usize;
    let mut total_detection = Duration::ZERO;

    for i in 0..args.steps {
        let frame_start = Instant::now();
        let dt = if args.realtime {
            let dt = frame_start.duration_since(last_frame).as_secs_f32();
            last_frame = frame_start;
            dt
        } else {
            fixed_dt
        };

        if args.add_every > 0 && i > 0 && i % args.add_every == 0 {
            sim.spawn(&config.particles, args.add_count, &mut rng);
        }

        let report = match args.scene {
            Scene::Collide => collide_step(&mut sim, dt),
            Scene::Garden => garden.step(&mut sim, dt, &mut rng),
        };
        total_checks += report.checks;
        total_detection += report.detection;

        if args.log_every > 0 && (i + 1) % args.log_every == 0 {
            tracing::info!(
                "Step {} | Number of particles: {} | Number of checks: {} | {}: {} | Detection time: {:?}",
                i + 1,
                sim.particles.len(),
                report.checks,
                match args.scene {
                    Scene::Collide => "Contacts",
                    Scene::Garden => "Links",
                },
                report.hits,
                report.detection
            );
        }

        if args.realtime {
            let frame_time = frame_start.elapsed();
            if frame_time < frame_duration {
                std::thread::sleep(frame_duration - frame_time);
            }
        }
    }

    if args.steps > 0 {
        tracing::info!(
            "Finished {} steps: {} particles, {:.1} checks/step, {:?} mean detection time",
            args.steps,
            sim.particles.len(),
            total_checks as f64 / args.steps as f64,
            total_detection / u32::try_from(args.steps).unwrap_or(u32::MAX)
        );
    }

    Ok(())
}

fn collide_step(sim: &mut ParticleSim, dt: f32) -> StepReport {
    sim.advance(dt);

    let started = Instant::now();
    let detection = sim.detect();
    let elapsed = started.elapsed();

    StepReport {
        checks: detection.checks,
        hits: detection.contacts.len(),
        detection: elapsed,
    }
}
