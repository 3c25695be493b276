#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
//! # Particle Broad Phase
//!
//! Proximity detection for many moving discs without testing every pair.
//!
//! Each step, the particles are bucketed into a uniform grid of square
//! cells and only particles sharing a cell, or sitting in neighbouring
//! cells, are reported as candidate pairs. With a cell size at least as
//! large as the biggest disc diameter, every overlapping pair is among the
//! candidates, and no pair is reported twice.
//!
//! ## Key Components
//!
//! -   **Particles:** [`Particle`] is a disc with a velocity that advances
//!     itself and either bounces off or wraps around the view edges
//!     ([`Boundary`]).
//! -   **Broad Phase:** [`UniformGrid`] turns a slice of anything
//!     [`Locatable`] into index pairs. [`brute_force_pairs`] is the all-pairs
//!     baseline it is checked against.
//! -   **Simulation:** [`ParticleSim`] strings the two together and runs the
//!     exact [`discs_overlap`] test over the candidates. It reports contacts;
//!     it does not resolve them.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{Particle, UniformGrid};
//!
//! let mut grid = UniformGrid::new(100.0, 100.0, 50.0)?;
//! let particles = [
//!     Particle::new(10.0, 10.0, 4.0),
//!     Particle::new(40.0, 40.0, 4.0),
//!     Particle::new(140.0, 10.0, 4.0),
//! ];
//! let pairs = grid.query(&particles);
//! assert!(pairs.contains(&(0, 1)));
//! # Ok::<(), physics::PhysicsError>(())
//! ```

mod builder;
pub mod collision;
pub mod config;
pub mod error;
pub mod particle;
pub mod simulation;
mod spatial_grid_ext;
pub mod types;

pub use collision::{
    brute_force_pair_count, brute_force_pairs, discs_overlap, pairs_across_cells,
    pairs_within_cell, separation, CandidatePair, DebugCanvas, Locatable, UniformGrid,
    FORWARD_NEIGHBOURS, MAX_CELLS,
};
pub use config::{ParticleSpawn, SceneConfig};
pub use error::PhysicsError;
pub use particle::{Boundary, Particle};
pub use simulation::{Detection, PairStrategy, ParticleSim};
pub use spatial_grid_ext::GridStats;
pub use types::Vec2;
