//! Scene descriptions
//!
//! A scene is the ring radius plus the starting moons. Scenes come from JSON
//! (native: a file path argument) or from a seed (web: `?seed=N&moons=M`).
//! The ring centre is not part of the scene; the driver places the ring in
//! the middle of whatever it draws on.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{CarrierRing, Moon};

/// Reasons a scene can be rejected
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scene JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("ring radius must be positive and finite, got {0}")]
    InvalidRingRadius(f32),
    #[error("moon {index} radius must be positive and finite, got {radius}")]
    InvalidMoonRadius { index: usize, radius: f32 },
    #[error("moon {index} has a non-finite position or velocity")]
    NonFiniteMoon { index: usize },
}

/// Ring radius, starting moons and driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub ring_radius: f32,
    pub moons: Vec<Moon>,
    #[serde(default)]
    pub settings: Settings,
}

impl Default for SceneConfig {
    /// Two moons on opposite sides, counter-rotating
    fn default() -> Self {
        Self {
            ring_radius: DEFAULT_RING_RADIUS,
            moons: vec![
                Moon::new(0.1, 20.0, FRAC_PI_2),
                Moon::new(-0.3, 30.0, 3.0 * FRAC_PI_2),
            ],
            settings: Settings::default(),
        }
    }
}

impl SceneConfig {
    /// Deterministic random scene for a seed
    pub fn random(seed: u64, moon_count: usize, ring_radius: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let max_radius = RANDOM_MOON_MAX_RADIUS.min(ring_radius).max(1.0);
        let min_radius = RANDOM_MOON_MIN_RADIUS.min(max_radius * 0.5);

        let moons = (0..moon_count)
            .map(|_| {
                Moon::new(
                    rng.random_range(-RANDOM_MOON_MAX_SPEED..RANDOM_MOON_MAX_SPEED),
                    rng.random_range(min_radius..max_radius),
                    rng.random_range(0.0..TAU),
                )
            })
            .collect();

        Self {
            ring_radius,
            moons,
            settings: Settings::default(),
        }
    }

    /// Parse and validate a scene from JSON text
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let scene: SceneConfig = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Read, parse and validate a scene file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let scene = Self::from_json(&json)?;
        log::info!(
            "Loaded scene from {} ({} moons)",
            path.display(),
            scene.moons.len()
        );
        Ok(scene)
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject scenes the ring cannot draw
    ///
    /// Moons larger than the ring are allowed; their occlusion is clamped.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !(self.ring_radius.is_finite() && self.ring_radius > 0.0) {
            return Err(SceneError::InvalidRingRadius(self.ring_radius));
        }

        for (index, moon) in self.moons.iter().enumerate() {
            if !(moon.radius.is_finite() && moon.radius > 0.0) {
                return Err(SceneError::InvalidMoonRadius {
                    index,
                    radius: moon.radius,
                });
            }
            if !(moon.position.is_finite() && moon.angular_velocity.is_finite()) {
                return Err(SceneError::NonFiniteMoon { index });
            }
        }

        Ok(())
    }

    /// Build the ring centred on `(center_x, center_y)`
    pub fn build(&self, center_x: f32, center_y: f32) -> CarrierRing {
        CarrierRing::new(center_x, center_y, self.ring_radius, self.moons.clone())
    }
}
