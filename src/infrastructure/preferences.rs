//! TOML Preference Store
//!
//! Persists integration preferences at `~/.config/kemet/preferences.toml`.
//! Writes go through a tempfile-and-rename under an advisory file lock, and
//! each flag carries the timestamp of its last change.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::ports::preference_store::{PreferenceError, PreferenceStore};
use crate::domain::ports::FileSystem;
use crate::infrastructure::fs::LocalFs;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FlagEntry {
    value: bool,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferencesFile {
    version: u32,
    #[serde(default)]
    flags: BTreeMap<String, FlagEntry>,
}

impl Default for PreferencesFile {
    fn default() -> Self {
        Self {
            version: 1,
            flags: BTreeMap::new(),
        }
    }
}

/// Preference store backed by a TOML file.
#[derive(Debug, Clone)]
pub struct TomlPreferenceStore {
    path: PathBuf,
}

impl TomlPreferenceStore {
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default store location under the user config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|config| config.join("kemet").join("preferences.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// A missing or unparseable file reads as an empty store.
    fn load_or_default(&self) -> PreferencesFile {
        if !self.path.exists() {
            return PreferencesFile::default();
        }
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    fn save(&self, file: &PreferencesFile) -> Result<(), PreferenceError> {
        let content = toml::to_string_pretty(file).map_err(|e| PreferenceError::Access {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        LocalFs::new()
            .write(&self.path, &content)
            .map_err(|e| PreferenceError::Access {
                path: self.path.clone(),
                message: e.to_string(),
            })
    }

    fn with_lock<T>(
        &self,
        op: impl FnOnce() -> Result<T, PreferenceError>,
    ) -> Result<T, PreferenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PreferenceError::Access {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        }

        let lock = File::create(self.lock_path()).map_err(|e| PreferenceError::Access {
            path: self.lock_path(),
            message: e.to_string(),
        })?;
        lock.lock_exclusive().map_err(|e| PreferenceError::Access {
            path: self.lock_path(),
            message: e.to_string(),
        })?;

        let result = op();
        let _ = FileExt::unlock(&lock);
        result
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn get(&self, key: &str) -> bool {
        self.load_or_default()
            .flags
            .get(key)
            .map(|entry| entry.value)
            .unwrap_or(false)
    }

    fn set(&self, key: &str, value: bool) -> Result<(), PreferenceError> {
        self.with_lock(|| {
            let mut file = self.load_or_default();
            file.flags.insert(
                key.to_string(),
                FlagEntry {
                    value,
                    updated_at: Utc::now(),
                },
            );
            self.save(&file)
        })
    }
}
