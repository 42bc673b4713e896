//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Colour scheme detection
//! - Frame timing
//! - The canvas 2D draw surface (web only)

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod theme;
pub mod time;

pub use theme::{Theme, ThemePreference, color_provider, detect_theme};
pub use time::FrameClock;
