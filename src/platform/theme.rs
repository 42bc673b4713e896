//! Light/dark theme handling
//!
//! The ring is stroked white on dark backgrounds and black on light ones.

use serde::{Deserialize, Serialize};

use crate::renderer::Color;

/// Display colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Foreground colour for this theme
    pub fn stroke_color(&self) -> Color {
        match self {
            Theme::Light => Color::BLACK,
            Theme::Dark => Color::WHITE,
        }
    }
}

/// User preference: follow the system or force a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Auto => "auto",
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" | "system" => Some(ThemePreference::Auto),
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    /// Theme to use right now
    pub fn resolve(&self) -> Theme {
        match self {
            ThemePreference::Auto => detect_theme(),
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
        }
    }
}

/// Query the system colour scheme
#[cfg(target_arch = "wasm32")]
pub fn detect_theme() -> Theme {
    let dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);

    if dark { Theme::Dark } else { Theme::Light }
}

/// Native has no colour scheme query; assume a dark terminal
#[cfg(not(target_arch = "wasm32"))]
pub fn detect_theme() -> Theme {
    Theme::Dark
}

/// Stroke colour provider for the render pass
///
/// With `Auto` the system scheme is queried on every call, so a theme switch
/// takes effect on the next stroke.
pub fn color_provider(preference: ThemePreference) -> impl Fn() -> Color {
    move || preference.resolve().stroke_color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_colors() {
        assert_eq!(Theme::Dark.stroke_color(), Color::WHITE);
        assert_eq!(Theme::Light.stroke_color(), Color::BLACK);
    }

    #[test]
    fn test_preference_parsing() {
        assert_eq!(ThemePreference::from_str("Dark"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::from_str("system"), Some(ThemePreference::Auto));
        assert_eq!(ThemePreference::from_str("sepia"), None);
        assert_eq!(ThemePreference::Light.as_str(), "light");
    }

    #[test]
    fn test_forced_preference_ignores_system() {
        assert_eq!(color_provider(ThemePreference::Light)(), Color::BLACK);
        assert_eq!(color_provider(ThemePreference::Dark)(), Color::WHITE);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_auto_on_native_is_dark() {
        assert_eq!(ThemePreference::Auto.resolve(), Theme::Dark);
    }

    #[test]
    fn test_preference_serde() {
        let json = serde_json::to_string(&ThemePreference::Auto).unwrap();
        assert_eq!(json, "\"auto\"");
        let back: ThemePreference = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(back, ThemePreference::Light);
    }
}
