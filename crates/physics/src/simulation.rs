//! # Particle Simulation Core
//!
//! [`ParticleSim`] owns the particles and the broad-phase grid and runs the
//! per-step order the driving loop expects: advance every particle, rebuild
//! the broad phase from the new positions, then narrow the candidates down
//! to actual overlaps. It never separates or deflects overlapping particles;
//! what a contact means is up to the caller.

use crate::collision::{brute_force_pairs, discs_overlap, CandidatePair, UniformGrid};
use crate::config::SceneConfig;
use crate::error::PhysicsError;
use crate::particle::{Boundary, Particle};

/// Where candidate pairs come from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PairStrategy {
    /// Same-cell and adjacent-cell pairs from the uniform grid.
    #[default]
    Grid,
    /// Every pair; the baseline the grid is measured against.
    BruteForce,
}

/// Result of one detection pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Detection {
    /// Candidate pairs handed to the narrow phase
    pub checks: usize,
    /// Candidates whose discs overlap
    pub contacts: Vec<CandidatePair>,
}

impl Detection {
    /// Per-particle flag: does the particle take part in any contact.
    #[must_use]
    pub fn colliding_mask(&self, particle_count: usize) -> Vec<bool> {
        let mut mask = vec![false; particle_count];
        for &(a, b) in &self.contacts {
            mask[a] = true;
            mask[b] = true;
        }
        mask
    }
}

/// Main particle simulation container
pub struct ParticleSim {
    pub particles: Vec<Particle>,
    pub boundary: Boundary,
    pub strategy: PairStrategy,
    grid: UniformGrid,
    all_pairs: Vec<CandidatePair>,
}

impl ParticleSim {
    /// Create an empty simulation over a `width` x `height` view.
    ///
    /// # Errors
    ///
    /// Fails when the grid cannot be built from these dimensions.
    pub fn new(width: f32, height: f32, cell_size: f32) -> Result<Self, PhysicsError> {
        Ok(Self {
            particles: Vec::new(),
            boundary: Boundary::default(),
            strategy: PairStrategy::default(),
            grid: UniformGrid::new(width, height, cell_size)?,
            all_pairs: Vec::new(),
        })
    }

    /// Build the scene described by `config`, spawning its particles from `rng`.
    ///
    /// # Errors
    ///
    /// Returns the validation error of `config`.
    pub fn from_config(
        config: &SceneConfig,
        rng: &mut fastrand::Rng,
    ) -> Result<Self, PhysicsError> {
        config.validate()?;
        let mut sim = Self::new(config.width, config.height, config.cell_size)?;
        sim.boundary = config.boundary;
        sim.spawn(&config.particles, config.particles.count, rng);
        Ok(sim)
    }

    #[must_use]
    pub fn view_width(&self) -> f32 {
        self.grid.width()
    }

    #[must_use]
    pub fn view_height(&self) -> f32 {
        self.grid.height()
    }

    #[must_use]
    pub fn grid(&self) -> &UniformGrid {
        &self.grid
    }

    /// Move every particle by one step of `dt`.
    pub fn advance(&mut self, dt: f32) {
        let (width, height) = (self.view_width(), self.view_height());
        for particle in &mut self.particles {
            particle.advance(dt, width, height, self.boundary);
        }
    }

    /// Candidate pairs for the current positions, rebuilt from scratch.
    pub fn candidate_pairs(&mut self) -> &[CandidatePair] {
        broad_phase(self.strategy, &mut self.grid, &mut self.all_pairs, &self.particles)
    }

    /// Candidate pairs together with mutable access to the particles they
    /// index, for callers that react to proximity themselves.
    pub fn candidates_mut(&mut self) -> (&[CandidatePair], &mut [Particle]) {
        let pairs = broad_phase(
            self.strategy,
            &mut self.grid,
            &mut self.all_pairs,
            &self.particles,
        );
        (pairs, &mut self.particles)
    }

    /// Run the broad phase and keep the candidates that really overlap.
    pub fn detect(&mut self) -> Detection {
        let pairs = broad_phase(
            self.strategy,
            &mut self.grid,
            &mut self.all_pairs,
            &self.particles,
        );

        let particles = &self.particles;
        let contacts = pairs
            .iter()
            .copied()
            .filter(|&(a, b)| discs_overlap(&particles[a], &particles[b]))
            .collect();

        Detection {
            checks: pairs.len(),
            contacts,
        }
    }

    /// Advance by `dt`, then detect on the new positions.
    pub fn step(&mut self, dt: f32) -> Detection {
        self.advance(dt);
        let detection = self.detect();
        tracing::trace!(
            particles = self.particles.len(),
            checks = detection.checks,
            contacts = detection.contacts.len(),
            "simulation step"
        );
        detection
    }

    /// The particle buffer as raw bytes, for handing to a drawing surface.
    #[must_use]
    pub fn particle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.particles)
    }
}

fn broad_phase<'a>(
    strategy: PairStrategy,
    grid: &'a mut UniformGrid,
    all_pairs: &'a mut Vec<CandidatePair>,
    particles: &[Particle],
) -> &'a [CandidatePair] {
    match strategy {
        PairStrategy::Grid => grid.query(particles),
        PairStrategy::BruteForce => {
            all_pairs.clear();
            all_pairs.extend(brute_force_pairs(particles.len()));
            all_pairs.as_slice()
        }
    }
}
