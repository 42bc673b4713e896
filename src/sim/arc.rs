//! Visible ring arcs
//!
//! A ring arc is drawn with canvas `arc()` semantics: it sweeps from
//! `start` towards increasing angle until it reaches `end`, wrapping through
//! 2π when `end < start`. A sweep of 2π or more is a full circle.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::occlusion::AngleInterval;

/// A visible (stroked) span of the carrier ring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingArc {
    /// Start angle (radians, not normalized)
    pub start: f32,
    /// End angle (radians, not normalized)
    pub end: f32,
}

impl RingArc {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// The whole ring
    pub fn full() -> Self {
        Self::new(0.0, TAU)
    }

    /// Angle covered when sweeping clockwise from start to end, in [0, 2π]
    pub fn sweep(&self) -> f32 {
        let raw = self.end - self.start;
        if raw >= TAU {
            TAU
        } else {
            raw.rem_euclid(TAU)
        }
    }

    /// Check if an angle lies on the arc
    #[cfg(test)]
    fn contains_angle(&self, theta: f32) -> bool {
        let offset = crate::wrap_angle(theta - self.start);
        offset <= self.sweep()
    }

    /// Sample `num_points` angles evenly along the arc, endpoints included
    pub fn sample_angles(&self, num_points: usize) -> Vec<f32> {
        let span = self.sweep();
        (0..num_points)
            .map(|i| {
                let t = i as f32 / (num_points - 1).max(1) as f32;
                self.start + t * span
            })
            .collect()
    }
}

/// Turn sorted occlusion intervals into the ring arcs left visible
///
/// Each arc runs from the end of one interval to the start of the next,
/// wrapping from the last interval back to the first. With no intervals the
/// whole ring is visible.
pub fn visible_arcs(intervals: &[AngleInterval]) -> Vec<RingArc> {
    if intervals.is_empty() {
        return vec![RingArc::full()];
    }

    let n = intervals.len();
    (0..n)
        .map(|i| RingArc::new(intervals[i].end, intervals[(i + 1) % n].start))
        .collect()
}
