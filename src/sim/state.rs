//! Orbit state: moons and the carrier ring that owns them

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{polar_to_cartesian, wrap_angle};

/// A small circle orbiting the carrier ring at constant angular velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moon {
    /// Radians per second (signed; negative orbits the other way)
    pub angular_velocity: f32,
    /// Disc radius in pixels
    pub radius: f32,
    /// Angle on the ring (radians, normally in [0, 2π))
    pub position: f32,
}

impl Moon {
    pub fn new(angular_velocity: f32, radius: f32, position: f32) -> Self {
        Self {
            angular_velocity,
            radius,
            position,
        }
    }

    /// Advance the moon along the ring by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        if dt == 0.0 {
            return;
        }
        self.position = wrap_angle(self.position + self.angular_velocity * dt);
    }

    /// Half the angular span this moon hides on a ring of `ring_radius`
    ///
    /// The ratio is clamped so an oversized moon hides half the ring instead
    /// of producing NaN.
    #[inline]
    pub fn half_width(&self, ring_radius: f32) -> f32 {
        (self.radius / ring_radius).clamp(-1.0, 1.0).asin()
    }
}

/// The fixed circular path the moons travel along
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierRing {
    pub center: Vec2,
    pub radius: f32,
    /// Draw order only; overlaps are merged symmetrically
    pub moons: Vec<Moon>,
}

impl CarrierRing {
    /// Positions are wrapped into [0, 2π) on the way in
    pub fn new(center_x: f32, center_y: f32, radius: f32, mut moons: Vec<Moon>) -> Self {
        for (i, moon) in moons.iter_mut().enumerate() {
            moon.position = wrap_angle(moon.position);
            if moon.radius > radius {
                log::warn!(
                    "Moon {} radius {} exceeds ring radius {}; occlusion will be clamped",
                    i,
                    moon.radius,
                    radius
                );
            }
        }

        Self {
            center: Vec2::new(center_x, center_y),
            radius,
            moons,
        }
    }

    /// Cartesian centre of a moon sitting on this ring
    #[inline]
    pub fn moon_center(&self, moon: &Moon) -> Vec2 {
        self.center + polar_to_cartesian(self.radius, moon.position)
    }

    /// Integrate every moon's position by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        for moon in &mut self.moons {
            moon.advance(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_advance_wraps_forward() {
        let mut moon = Moon::new(1.0, 10.0, TAU - 0.1);
        moon.advance(0.3);
        assert!((moon.position - 0.2).abs() < 1e-4);
    }

    #[test]
    fn test_advance_wraps_backward() {
        let mut moon = Moon::new(-0.3, 30.0, 0.01);
        moon.advance(0.05);
        assert!(moon.position > PI && moon.position < TAU);
        assert!((moon.position - (TAU - 0.005)).abs() < 1e-4);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        // Even positions outside [0, 2π) are left alone
        let mut moon = Moon::new(0.7, 10.0, 7.5);
        moon.advance(0.0);
        assert_eq!(moon.position, 7.5);
    }

    #[test]
    fn test_half_width() {
        let moon = Moon::new(0.0, 100.0, 0.0);
        assert!((moon.half_width(200.0) - (0.5f32).asin()).abs() < 1e-6);
    }

    #[test]
    fn test_half_width_clamps_oversized_moon() {
        let moon = Moon::new(0.0, 250.0, 0.0);
        let alpha = moon.half_width(200.0);
        assert!(!alpha.is_nan());
        assert!((alpha - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_moon_center() {
        let ring = CarrierRing::new(300.0, 200.0, 100.0, vec![Moon::new(0.0, 5.0, FRAC_PI_2)]);
        let c = ring.moon_center(&ring.moons[0]);
        assert!((c.x - 300.0).abs() < 1e-3);
        assert!((c.y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_new_wraps_positions() {
        let ring = CarrierRing::new(
            0.0,
            0.0,
            200.0,
            vec![Moon::new(0.0, 20.0, 10.0), Moon::new(0.0, 20.0, -1.0)],
        );
        assert!((ring.moons[0].position - (10.0 - TAU)).abs() < 1e-5);
        assert!((ring.moons[1].position - (TAU - 1.0)).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_advance_stays_in_range(
            position in 0.0f32..TAU,
            velocity in -20.0f32..20.0,
            dt in 0.0f32..5.0,
        ) {
            let mut moon = Moon::new(velocity, 10.0, position);
            moon.advance(dt);
            prop_assert!(moon.position >= 0.0 && moon.position < TAU);
        }
    }
}
