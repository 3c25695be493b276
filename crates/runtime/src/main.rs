#![deny(clippy::all, clippy::pedantic)]
//! # Broad Phase Runtime
//!
//! Headless driver for the particle broad phase. Each step advances the
//! particles, rebuilds the candidate pairs and hands them to the selected
//! scene, logging check counts and detection time as it goes.

mod app;
mod garden;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// What the loop does with the candidate pairs
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Scene {
    /// Count disc overlaps among the candidates
    Collide,
    /// Pull nearby points together with random springs
    Garden,
}

#[derive(Parser, Debug)]
#[command(name = "runtime_main", about = "Drive the particle broad phase headless")]
pub struct Args {
    #[arg(long, value_enum, default_value_t = Scene::Collide)]
    pub scene: Scene,

    /// JSON scene file; replaces the scene's built-in preset
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = 600)]
    pub steps: usize,

    /// Check every pair instead of using the grid
    #[arg(long)]
    pub trivial: bool,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Time step in seconds; defaults to the scene's own
    #[arg(long)]
    pub fixed_dt: Option<f32>,

    /// Measure the time step from the wall clock and pace frames to `--fps`
    #[arg(long)]
    pub realtime: bool,

    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    #[arg(long, default_value_t = 60)]
    pub log_every: usize,

    /// Add `--add-count` particles every this many steps (0 disables)
    #[arg(long, default_value_t = 0)]
    pub add_every: usize,

    #[arg(long, default_value_t = 100)]
    pub add_count: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    app::run(&Args::parse())
}
