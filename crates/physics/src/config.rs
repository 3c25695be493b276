//! # Scene Configuration
//!
//! Scenes are described in JSON. Every field has a default, so an empty
//! object `{}` is the collision-test scene:
//!
//! ```json
//! {
//!   "width": 1280.0,
//!   "height": 720.0,
//!   "cell_size": 200.0,
//!   "boundary": "wrap",
//!   "particles": { "count": 250, "radius": [2.0, 2.0], "speed": [-50.0, 50.0] }
//! }
//! ```

use crate::error::PhysicsError;
use crate::particle::Boundary;
use serde::Deserialize;
use std::path::Path;

/// How a scene populates itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticleSpawn {
    pub count: usize,
    /// `[min, max]` radius
    pub radius: [f32; 2],
    /// `[min, max]` for each velocity component
    pub speed: [f32; 2],
    /// Smallest spawn coordinate on both axes
    pub margin: f32,
}

impl Default for ParticleSpawn {
    fn default() -> Self {
        Self {
            count: 1000,
            radius: [5.0, 10.0],
            speed: [-0.25, 0.25],
            margin: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub width: f32,
    pub height: f32,
    pub cell_size: f32,
    pub boundary: Boundary,
    pub particles: ParticleSpawn,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::collision_test()
    }
}

impl SceneConfig {
    /// Many small discs bouncing around a 1024x768 view; cells of 20 fit the
    /// largest diameter.
    #[must_use]
    pub fn collision_test() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
            cell_size: 20.0,
            boundary: Boundary::Bounce,
            particles: ParticleSpawn::default(),
        }
    }

    /// Fewer, faster points linked when within one cell size of each other.
    #[must_use]
    pub fn node_garden() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            cell_size: 200.0,
            boundary: Boundary::Bounce,
            particles: ParticleSpawn {
                count: 250,
                radius: [2.0, 2.0],
                speed: [-50.0, 50.0],
                margin: 0.0,
            },
        }
    }

    /// Parse and validate a JSON scene.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::Config`] for malformed JSON, unknown fields or
    /// values rejected by [`SceneConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, PhysicsError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON scene from disk.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::Io`] when the file cannot be read, otherwise
    /// the same errors as [`SceneConfig::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PhysicsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check the values a grid and the spawner need.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::Config`] describing the first bad field.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;

        if !positive(self.width) || !positive(self.height) {
            return Err(PhysicsError::Config(format!(
                "view size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !positive(self.cell_size) {
            return Err(PhysicsError::Config(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }

        let spawn = &self.particles;
        if !positive(spawn.radius[0]) || spawn.radius[0] > spawn.radius[1] {
            return Err(PhysicsError::Config(format!(
                "radius range must be positive and ordered, got {:?}",
                spawn.radius
            )));
        }
        if spawn.speed[0] > spawn.speed[1] {
            return Err(PhysicsError::Config(format!(
                "speed range must be ordered, got {:?}",
                spawn.speed
            )));
        }
        if spawn.margin < 0.0 || spawn.margin >= self.width.min(self.height) {
            return Err(PhysicsError::Config(format!(
                "margin must lie inside the view, got {}",
                spawn.margin
            )));
        }

        Ok(())
    }
}
