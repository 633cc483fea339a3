//! Light/dark theme and the single persisted preference flag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle button icon: the moon offers dark mode, the sun offers light mode.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Preference {
    theme: Theme,
}

/// File-backed theme preference (`{"theme":"dark"}`).
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved theme; a missing or unreadable file means light.
    pub fn load(&self) -> Theme {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Theme::Light,
        };
        match serde_json::from_str::<Preference>(&raw) {
            Ok(pref) => pref.theme,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable theme preference");
                Theme::Light
            }
        }
    }

    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(&self.path, serde_json::to_string(&Preference { theme })?)?;
        debug!(theme = %theme, "Theme preference saved");
        Ok(())
    }

    /// Flips the saved theme and persists it; returns the new theme.
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.load().toggle();
        self.save(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_icon() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.icon(), "fa-moon");
        assert_eq!(Theme::Dark.icon(), "fa-sun");
    }

    #[test]
    fn test_missing_file_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("theme.json"));
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("prefs").join("theme.json"));

        assert_eq!(store.toggle().unwrap(), Theme::Dark);
        assert_eq!(ThemeStore::new(store.path()).load(), Theme::Dark);
        assert_eq!(store.toggle().unwrap(), Theme::Light);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, r#"{"theme":"light"}"#);
    }

    #[test]
    fn test_garbage_file_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(ThemeStore::new(&path).load(), Theme::Light);
    }
}
