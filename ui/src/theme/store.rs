use crate::theme::types::ThemePreference;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PREFERENCES_FILE: &str = "preferences.toml";
const APP_DIR: &str = "folio";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("No configuration directory available on this platform")]
    NoConfigDir,
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid preferences file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
    #[error("Failed to serialize preferences: {0}")]
    Serialize(String),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<ThemePreference>,
}

/// The single persisted key-value entry: the theme preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
}

impl PreferenceStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// `~/.config/folio/preferences.toml` on Unix, the platform config
    /// directory elsewhere.
    pub fn platform_default() -> Result<Self, PreferenceError> {
        platform_config_dir()
            .map(|dir| Self::at(dir.join(APP_DIR).join(PREFERENCES_FILE)))
            .ok_or(PreferenceError::NoConfigDir)
    }

    /// A store that remembers nothing.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The stored preference. A missing file is not an error.
    pub fn load(&self) -> Result<Option<ThemePreference>, PreferenceError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        let source = fs::read_to_string(path).map_err(|source| PreferenceError::Io {
            path: path.clone(),
            source,
        })?;
        let stored: StoredPreferences =
            toml::from_str(&source).map_err(|e| PreferenceError::Parse {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        Ok(stored.theme)
    }

    pub fn save(&self, preference: ThemePreference) -> Result<(), PreferenceError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| PreferenceError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let body = toml::to_string(&StoredPreferences {
            theme: Some(preference),
        })
        .map_err(|e| PreferenceError::Serialize(e.to_string()))?;

        fs::write(path, body).map_err(|source| PreferenceError::Io {
            path: path.clone(),
            source,
        })?;
        log::debug!("Saved theme preference '{preference}' to {}", path.display());
        Ok(())
    }
}

#[cfg(unix)]
fn platform_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config"))
}

#[cfg(not(unix))]
fn platform_config_dir() -> Option<PathBuf> {
    dirs::config_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_matches, assert_none, assert_ok, assert_some_eq};

    #[test]
    fn test_round_trip_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::at(dir.path().join("nested").join(PREFERENCES_FILE));

        assert_none!(assert_ok!(store.load()));
        assert_ok!(store.save(ThemePreference::Dark));
        assert_some_eq!(assert_ok!(store.load()), ThemePreference::Dark);

        let written = fs::read_to_string(store.path().unwrap()).unwrap();
        assert_eq!(written.trim(), "theme = \"dark\"");
    }

    #[test]
    fn test_garbage_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "theme = \"purple\"").unwrap();

        assert_matches!(PreferenceStore::at(path).load(), Err(PreferenceError::Parse { .. }));
    }

    #[test]
    fn test_disabled_store_is_inert() {
        let store = PreferenceStore::disabled();
        assert_ok!(store.save(ThemePreference::Dark));
        assert_none!(assert_ok!(store.load()));
    }
}
