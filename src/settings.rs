//! Player preferences
//!
//! Persisted in LocalStorage. Settings only change presentation; nothing here
//! feeds the simulation.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Freeze title bobbing, hue cycling, banner flashing and the invincibility blink
    pub reduced_motion: bool,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            show_fps: false,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "coin_hopper_settings";

    pub fn toggle_reduced_motion(&mut self) {
        self.reduced_motion = !self.reduced_motion;
        log::info!("Reduced motion: {}", self.reduced_motion);
    }

    pub fn toggle_fps(&mut self) {
        self.show_fps = !self.show_fps;
        log::info!("FPS counter: {}", self.show_fps);
    }

    /// Parse stored settings, falling back to defaults on bad data
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    /// Storage format, the inverse of `from_json`
    pub fn to_json(&self) -> String {
        // Two plain bools cannot fail to encode
        serde_json::to_string(self).unwrap_or_default()
    }

    #[cfg(target_arch = "wasm32")]
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// Read from LocalStorage, falling back to defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let stored = Self::local_storage()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok().flatten());
        match stored {
            Some(json) => {
                let settings = Self::from_json(&json);
                log::info!("Settings loaded: {:?}", settings);
                settings
            }
            None => {
                log::info!("No stored settings, using defaults");
                Self::default()
            }
        }
    }

    /// Write to LocalStorage. Failures (private mode, quota) only log.
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let Some(storage) = Self::local_storage() else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return;
        };
        match storage.set_item(Self::STORAGE_KEY, &self.to_json()) {
            Ok(()) => log::debug!("Settings saved"),
            Err(e) => log::warn!("Could not save settings: {:?}", e),
        }
    }

    /// Native builds have nowhere to persist to
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        log::debug!("Settings not persisted on native: {}", self.to_json());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_storage_format() {
        let mut settings = Settings::default();
        settings.toggle_fps();
        assert_eq!(Settings::from_json(&settings.to_json()), settings);
    }

    #[test]
    fn test_missing_fields_default() {
        let settings = Settings::from_json(r#"{ "reduced_motion": true }"#);
        assert!(settings.reduced_motion);
        assert!(!settings.show_fps);
    }

    #[test]
    fn test_garbage_falls_back_to_default() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
    }

    #[test]
    fn test_storage_format_field_names() {
        let settings = Settings {
            reduced_motion: true,
            show_fps: false,
        };
        let value: serde_json::Value = serde_json::from_str(&settings.to_json()).unwrap();
        assert_eq!(value["reduced_motion"], true);
        assert_eq!(value["show_fps"], false);
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_native_load_is_default() {
        assert_eq!(Settings::load(), Settings::default());
    }
}
