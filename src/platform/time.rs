//! Frame timing
//!
//! Turns animation-frame timestamps (milliseconds) into the clamped
//! per-tick `dt` the simulation expects, so a backgrounded tab does not make
//! the moons jump when it comes back.

use crate::consts::MAX_FRAME_DT;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time_ms: Option<f64>,
    max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_time_ms: None,
            max_dt,
        }
    }

    /// Seconds since the previous frame, clamped to `[0, max_dt]`
    ///
    /// The first frame yields 0.
    pub fn tick(&mut self, time_ms: f64) -> f32 {
        let dt = match self.last_time_ms {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_time_ms = Some(time_ms);
        dt.clamp(0.0, self.max_dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(12_345.0), 0.0);
    }

    #[test]
    fn test_regular_frames() {
        let mut clock = FrameClock::default();
        clock.tick(1000.0);
        let dt = clock.tick(1016.0);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_long_gap_is_clamped() {
        let mut clock = FrameClock::new(0.05);
        clock.tick(0.0);
        assert_eq!(clock.tick(60_000.0), 0.05);
    }

    #[test]
    fn test_backwards_time_is_zero() {
        let mut clock = FrameClock::default();
        clock.tick(500.0);
        assert_eq!(clock.tick(400.0), 0.0);
    }
}
