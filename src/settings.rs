use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

/// User preferences kept between runs. Selections made in the converter are
/// not part of this.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppSettings {
    pub theme_preference: ThemePreference,
}

impl AppSettings {
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn save(&self) {
        let path = Self::get_config_path();
        if let Err(e) = self.save_to(&path) {
            warn!("Could not write settings to {}: {}", path.display(), e);
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            debug!("No settings at {}, using defaults", path.display());
            return Self::default();
        };
        serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!("Ignoring unreadable settings {}: {}", path.display(), e);
            Self::default()
        })
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("image_converter");
        path.push("app_settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("app_settings.json");
        let settings = AppSettings { theme_preference: ThemePreference::Dark };

        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn missing_or_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_settings.json");
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppSettings::load_from(&path).theme_preference, ThemePreference::System);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_settings.json");
        fs::write(&path, r#"{ "theme_preference": "Light", "show_toolbar": true }"#).unwrap();
        assert_eq!(AppSettings::load_from(&path).theme_preference, ThemePreference::Light);
    }
}
