//! Window and session settings read from `snake_settings.json`.
//!
//! Only presentation lives here. Board size, speed and the starting
//! position are fixed in [`crate::consts`].
use macroquad::logging::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

pub const SETTINGS_PATH: &str = "snake_settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings: {0}")]
    Io(#[from] io::Error),
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    pub high_dpi: bool,
    /// Seed for apple placement. Taken from the clock when absent.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Snake".to_owned(),
            high_dpi: true,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(text)?)
    }

    /// A missing file is not an error: it yields the defaults.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn load() -> Self {
        Self::read(SETTINGS_PATH).unwrap_or_else(|err| {
            warn!("{}: {}, using defaults", SETTINGS_PATH, err);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let s = Settings::from_json(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(s.seed, Some(42));
        assert_eq!(s.window_title, "Snake");
        assert!(s.high_dpi);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Settings::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let s = Settings::read("definitely/not/here/snake_settings.json").unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn reads_file_from_disk() {
        let path = std::env::temp_dir().join("snake_torus_settings_test.json");
        fs::write(&path, r#"{ "window_title": "Torus", "high_dpi": false }"#).unwrap();
        let s = Settings::read(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(s.window_title, "Torus");
        assert!(!s.high_dpi);
        assert_eq!(s.seed, None);
    }
}
