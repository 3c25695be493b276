//! # Particles
//!
//! A particle is a moving disc: position, velocity and a radius that never
//! changes after construction. Particles know nothing about the broad phase;
//! the grid only reads them through [`crate::collision::Locatable`].

use crate::collision::Locatable;
use crate::types::Vec2;
use serde::Deserialize;

/// What happens when a particle reaches the edge of the view.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Clamp inside the edge and reflect the velocity component.
    #[default]
    Bounce,
    /// Teleport to the opposite edge, velocity untouched.
    Wrap,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
}

impl Particle {
    /// Create a resting particle at `(x, y)`.
    #[must_use]
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius,
        }
    }

    #[must_use]
    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.vel = Vec2::new(vx, vy);
        self
    }

    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Apply the boundary policy to the position carried over from the last
    /// step, then integrate this step's velocity.
    pub fn advance(&mut self, dt: f32, view_width: f32, view_height: f32, boundary: Boundary) {
        match boundary {
            Boundary::Bounce => {
                bounce_axis(&mut self.pos.x, &mut self.vel.x, self.radius, view_width);
                bounce_axis(&mut self.pos.y, &mut self.vel.y, self.radius, view_height);
            }
            Boundary::Wrap => {
                wrap_axis(&mut self.pos.x, view_width);
                wrap_axis(&mut self.pos.y, view_height);
            }
        }

        self.pos += self.vel * dt;
    }
}

impl Locatable for Particle {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

fn bounce_axis(pos: &mut f32, vel: &mut f32, radius: f32, extent: f32) {
    if *pos > extent - radius {
        *pos = extent - radius;
        *vel = -*vel;
    } else if *pos < radius {
        *pos = radius;
        *vel = -*vel;
    }
}

fn wrap_axis(pos: &mut f32, extent: f32) {
    if *pos > extent {
        *pos = 0.0;
    } else if *pos < 0.0 {
        *pos = extent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounce_reflects_at_upper_edge() {
        let mut x = 99.0;
        let mut vx = 3.0;
        bounce_axis(&mut x, &mut vx, 2.0, 100.0);
        assert_eq!(x, 98.0);
        assert_eq!(vx, -3.0);
    }

    #[test]
    fn bounce_leaves_interior_alone() {
        let mut x = 50.0;
        let mut vx = 3.0;
        bounce_axis(&mut x, &mut vx, 2.0, 100.0);
        assert_eq!((x, vx), (50.0, 3.0));
    }

    #[test]
    fn wrap_moves_to_opposite_edge() {
        let mut x = -0.5;
        wrap_axis(&mut x, 100.0);
        assert_eq!(x, 100.0);

        let mut x = 100.5;
        wrap_axis(&mut x, 100.0);
        assert_eq!(x, 0.0);
    }
}
