//! Carrier Ring - moons orbiting a shared circular path
//!
//! Core modules:
//! - `sim`: Orbit state, occlusion analysis and the per-frame update-and-render pass
//! - `renderer`: Draw surface abstraction, command recording and tessellation
//! - `platform`: Browser/native platform abstraction (theme, frame timing, canvas)
//! - `scene`: Scene descriptions (JSON, seeded random scenes)
//! - `settings`: Runtime preferences

pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use renderer::{Color, DrawSurface};
pub use scene::{SceneConfig, SceneError};
pub use settings::Settings;
pub use sim::{CarrierRing, Moon, update_and_render};

use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Configuration constants
pub mod consts {
    /// Largest elapsed time handed to a single tick (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Default carrier ring radius (pixels)
    pub const DEFAULT_RING_RADIUS: f32 = 200.0;

    /// Stroke width used by drivers for the ring and moon outlines
    pub const DEFAULT_LINE_WIDTH: f32 = 1.0;

    /// Bounds for randomly generated moons
    pub const RANDOM_MOON_MIN_RADIUS: f32 = 8.0;
    pub const RANDOM_MOON_MAX_RADIUS: f32 = 32.0;
    pub const RANDOM_MOON_MAX_SPEED: f32 = 0.5;

    /// Moon count for seeded scenes when none is requested
    pub const DEFAULT_MOON_COUNT: usize = 5;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Shortest angular distance between two angles, in [0, π]
#[inline]
pub fn angular_distance(a: f32, b: f32) -> f32 {
    // fmod is exact, so differences already inside one turn are untouched
    let d = (a - b).abs() % TAU;
    if d > PI { TAU - d } else { d }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_angle() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < 1e-5);
        assert!((wrap_angle(TAU + 0.25) - 0.25).abs() < 1e-5);
        assert_eq!(wrap_angle(TAU), 0.0);
        let tiny = wrap_angle(-f32::EPSILON * 0.01);
        assert!((0.0..TAU).contains(&tiny));
    }

    #[test]
    fn test_angular_distance_wraps() {
        assert!((angular_distance(0.1, TAU - 0.1) - 0.2).abs() < 1e-5);
        assert!((angular_distance(0.0, PI) - PI).abs() < 1e-6);
        assert!((angular_distance(1.0, 1.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_angular_distance_beyond_one_turn() {
        // 10.0 rad sits at 10 - 2π on the ring, just over π from 0.5
        let d = angular_distance(0.5, 10.0);
        assert!((0.0..=PI).contains(&d));
        assert!((d - (2.0 * TAU - 9.5)).abs() < 1e-5);

        let wrapped = angular_distance(wrap_angle(-20.0), wrap_angle(20.0));
        assert!((angular_distance(-20.0, 20.0) - wrapped).abs() < 1e-4);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(10.0, PI / 2.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 10.0).abs() < 1e-5);
    }
}
