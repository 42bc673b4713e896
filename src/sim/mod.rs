//! Orbit simulation and ring rendering logic
//!
//! This module must stay free of platform dependencies:
//! - Time arrives as a plain `dt` in seconds
//! - Drawing goes through the `DrawSurface` trait
//! - Colours come from an injected provider, never from global state

pub mod arc;
pub mod occlusion;
pub mod state;
pub mod tick;

pub use arc::{RingArc, visible_arcs};
pub use occlusion::{
    AngleInterval, moons_overlap, occlusion_intervals, overlap_groups, overlapping_pairs,
    sort_intervals,
};
pub use state::{CarrierRing, Moon};
pub use tick::{render, update_and_render};
