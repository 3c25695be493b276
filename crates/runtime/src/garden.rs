//! # Node Garden
//!
//! Points closer than `min_distance` are linked and pulled toward each
//! other by a randomly stiff spring; the closer they get, the faster they
//! accelerate. The grid only has to look one cell around each point because
//! the cell size equals `min_distance`.

use physics::{Particle, ParticleSim};
use std::time::Instant;

use crate::app::StepReport;

const SPRING_RANGE: [f32; 2] = [0.3, 1.0];
const MAX_SPEED: f32 = 1000.0;
/// Links fainter than this are not counted as visible.
const LINK_ALPHA_THRESHOLD: f32 = 0.2;

pub struct NodeGarden {
    min_distance: f32,
    max_speed: f32,
}

impl NodeGarden {
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance,
            max_speed: MAX_SPEED,
        }
    }

    pub(crate) fn step(
        &self,
        sim: &mut ParticleSim,
        dt: f32,
        rng: &mut fastrand::Rng,
    ) -> StepReport {
        sim.advance(dt);

        let started = Instant::now();
        let (pairs, particles) = sim.candidates_mut();
        let detection = started.elapsed();

        let mut links = 0;
        for &(a, b) in pairs {
            let (p0, p1) = pair_mut(particles, a, b);
            if self.attract(p0, p1, dt, rng) {
                links += 1;
            }
        }

        for particle in particles.iter_mut() {
            clamp_speed(particle, self.max_speed);
        }

        StepReport {
            checks: pairs.len(),
            hits: links,
            detection,
        }
    }

    /// Spring the pair together if close enough; `true` when the link would
    /// be visible.
    fn attract(
        &self,
        p0: &mut Particle,
        p1: &mut Particle,
        dt: f32,
        rng: &mut fastrand::Rng,
    ) -> bool {
        let delta = p1.pos - p0.pos;
        let distance = delta.length();
        if distance >= self.min_distance {
            return false;
        }

        let spring = SPRING_RANGE[0] + rng.f32() * (SPRING_RANGE[1] - SPRING_RANGE[0]);
        let accel = delta * (spring * dt * dt);
        p0.vel += accel;
        p1.vel -= accel;

        1.0 - distance / self.min_distance > LINK_ALPHA_THRESHOLD
    }
}

fn pair_mut(particles: &mut [Particle], a: usize, b: usize) -> (&mut Particle, &mut Particle) {
    debug_assert_ne!(a, b);
    if a < b {
        let (head, tail) = particles.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = particles.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}

fn clamp_speed(particle: &mut Particle, max_speed: f32) {
    let speed = particle.vel.length();
    if speed > max_speed {
        particle.vel = particle.vel / speed * max_speed;
    }
}
