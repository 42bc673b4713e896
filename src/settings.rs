//! Runtime settings and preferences
//!
//! Nothing is persisted: settings start from defaults and can be overridden
//! by the page query string (web) or a scene file (native).

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_LINE_WIDTH, MAX_FRAME_DT};
use crate::platform::ThemePreference;

/// Renderer/driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Stroke colour scheme
    pub theme: ThemePreference,
    /// Largest `dt` handed to one tick (seconds)
    pub max_frame_dt: f32,
    /// Outline width in pixels
    pub line_width: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Auto,
            max_frame_dt: MAX_FRAME_DT,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl Settings {
    /// Apply a `key=value` override, returning false if it was not understood
    pub fn apply_override(&mut self, key: &str, value: &str) -> bool {
        match key {
            "theme" => match ThemePreference::from_str(value) {
                Some(theme) => {
                    self.theme = theme;
                    true
                }
                None => false,
            },
            "max_frame_dt" => match value.parse::<f32>() {
                Ok(dt) if dt.is_finite() && dt > 0.0 => {
                    self.max_frame_dt = dt;
                    true
                }
                _ => false,
            },
            "line_width" => match value.parse::<f32>() {
                Ok(w) if w.is_finite() && w > 0.0 => {
                    self.line_width = w;
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Load overrides from the page query string (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn from_query() -> Self {
        let mut settings = Self::default();

        let search = web_sys::window().and_then(|w| w.location().search().ok());
        let params = search.and_then(|s| web_sys::UrlSearchParams::new_with_str(&s).ok());

        if let Some(params) = params {
            for key in ["theme", "max_frame_dt", "line_width"] {
                if let Some(value) = params.get(key) {
                    if !settings.apply_override(key, &value) {
                        log::warn!("Ignoring invalid setting {}={}", key, value);
                    }
                }
            }
        }

        log::info!("Theme preference: {}", settings.theme.as_str());
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, ThemePreference::Auto);
        assert_eq!(settings.max_frame_dt, 0.05);
    }

    #[test]
    fn test_overrides() {
        let mut settings = Settings::default();
        assert!(settings.apply_override("theme", "light"));
        assert!(settings.apply_override("max_frame_dt", "0.1"));
        assert!(!settings.apply_override("line_width", "-2"));
        assert!(!settings.apply_override("volume", "11"));
        assert_eq!(settings.theme, ThemePreference::Light);
        assert_eq!(settings.max_frame_dt, 0.1);
        assert_eq!(settings.line_width, DEFAULT_LINE_WIDTH);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(settings.theme, ThemePreference::Dark);
        assert_eq!(settings.max_frame_dt, MAX_FRAME_DT);
    }
}
