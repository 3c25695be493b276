//! # Particle Spawning
//!
//! Scatters particles over the view with random radius and velocity, the way
//! the demo scenes populate themselves. Randomness always comes from a
//! caller-owned [`fastrand::Rng`] so runs can be reproduced from a seed.

use crate::config::ParticleSpawn;
use crate::particle::Particle;
use crate::simulation::ParticleSim;

fn random_in(rng: &mut fastrand::Rng, [min, max]: [f32; 2]) -> f32 {
    min + rng.f32() * (max - min)
}

impl ParticleSpawn {
    /// Draw one particle inside `[margin, width) x [margin, height)`.
    pub fn sample(&self, rng: &mut fastrand::Rng, width: f32, height: f32) -> Particle {
        let x = random_in(rng, [self.margin, width]);
        let y = random_in(rng, [self.margin, height]);
        let radius = random_in(rng, self.radius);
        let vx = random_in(rng, self.speed);
        let vy = random_in(rng, self.speed);
        Particle::new(x, y, radius).with_velocity(vx, vy)
    }
}

/// Builder methods for populating the simulation
impl ParticleSim {
    /// Add a particle, returning its index
    pub fn add_particle(&mut self, particle: Particle) -> usize {
        self.particles.push(particle);
        self.particles.len() - 1
    }

    /// Add `count` random particles drawn from `spawn`
    pub fn spawn(&mut self, spawn: &ParticleSpawn, count: usize, rng: &mut fastrand::Rng) {
        let (width, height) = (self.view_width(), self.view_height());
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(spawn.sample(rng, width, height));
        }
        tracing::debug!(added = count, total = self.particles.len(), "spawned particles");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_configured_ranges() {
        let spawn = ParticleSpawn {
            count: 0,
            radius: [5.0, 10.0],
            speed: [-0.25, 0.25],
            margin: 10.0,
        };
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..500 {
            let p = spawn.sample(&mut rng, 1024.0, 768.0);
            assert!((10.0..=1024.0).contains(&p.pos.x));
            assert!((10.0..=768.0).contains(&p.pos.y));
            assert!((5.0..=10.0).contains(&p.radius()));
            assert!((-0.25..=0.25).contains(&p.vel.x));
            assert!((-0.25..=0.25).contains(&p.vel.y));
        }
    }

    #[test]
    fn same_seed_same_particles() {
        let spawn = ParticleSpawn::default();
        let a = spawn.sample(&mut fastrand::Rng::with_seed(3), 100.0, 100.0);
        let b = spawn.sample(&mut fastrand::Rng::with_seed(3), 100.0, 100.0);
        assert_eq!(a, b);
    }
}
