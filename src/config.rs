//! Configuration for kemet-host
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Project config (./kemet.toml)
//! 3. User config (~/.config/kemet/config.toml)
//! 4. Built-in defaults (lowest priority)
//!
//! Unknown keys are collected during deserialization and surfaced as
//! warnings rather than errors, so a config written for a newer release
//! still loads.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::theme::SOURCE_ICON_FILE;
use crate::error::{KemetError, KemetResult};
use crate::infrastructure::fs::expand_home;
use crate::infrastructure::{DirScanRegistry, TomlPreferenceStore};

/// Language server process configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Command used to start the Kemet language server
    #[serde(default = "default_server_command")]
    pub server_command: String,

    /// Extra arguments passed to the server
    #[serde(default)]
    pub server_args: Vec<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            server_command: default_server_command(),
            server_args: Vec::new(),
        }
    }
}

fn default_server_command() -> String {
    "kemet-language-server".to_string()
}

/// Icon integration configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntegrationConfig {
    /// Override of the editor's extensions directory
    #[serde(default)]
    pub extensions_dir: Option<PathBuf>,

    /// Override of this crate's assets directory
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,

    /// Override of the preferences file location
    #[serde(default)]
    pub preferences_file: Option<PathBuf>,
}

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub host: HostConfig,

    #[serde(default)]
    pub integration: IntegrationConfig,
}

/// Unknown key encountered while loading a config file
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

impl Config {
    /// Load from a specific file.
    pub fn load(path: &Path) -> KemetResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load from a specific file, collecting unknown keys.
    pub fn load_with_warnings(path: &Path) -> KemetResult<(Self, Vec<ConfigWarning>)> {
        let content = std::fs::read_to_string(path)?;

        let mut unknown: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);
        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown.push(path.to_string());
        })
        .map_err(|e| KemetError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown
            .into_iter()
            .map(|dotted| {
                let key = dotted
                    .rsplit('.')
                    .next()
                    .unwrap_or(dotted.as_str())
                    .to_string();
                ConfigWarning {
                    line: find_line_number(&content, &key),
                    key,
                    file: path.to_path_buf(),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load the first config found in the hierarchy, or defaults.
    ///
    /// Unparseable files fall through to the next level rather than abort:
    /// a broken user config must not take the commands down.
    pub fn load_or_default(explicit: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        let candidates: Vec<PathBuf> = match explicit {
            Some(path) => vec![path.to_path_buf()],
            None => {
                let mut paths = vec![PathBuf::from("kemet.toml")];
                if let Some(config_dir) = dirs::config_dir() {
                    paths.push(config_dir.join("kemet").join("config.toml"));
                }
                paths
            }
        };

        for candidate in candidates {
            if candidate.exists() {
                if let Ok(loaded) = Self::load_with_warnings(&candidate) {
                    return loaded;
                }
            }
        }

        (Self::default(), Vec::new())
    }

    /// Extensions directory to scan, config override first.
    pub fn extensions_dir(&self) -> Option<PathBuf> {
        self.integration
            .extensions_dir
            .as_deref()
            .map(expand_home)
            .or_else(DirScanRegistry::default_dir)
    }

    /// Directory holding this crate's bundled assets.
    pub fn assets_dir(&self) -> PathBuf {
        if let Some(dir) = self.integration.assets_dir.as_deref() {
            return expand_home(dir);
        }

        // Installed layout: assets/ next to the executable; falls back to
        // the development layout relative to the working directory
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let candidate = dir.join("assets");
                if candidate.exists() {
                    return candidate;
                }
            }
        }
        PathBuf::from("assets")
    }

    /// Bundled source icon path.
    pub fn source_icon(&self) -> PathBuf {
        self.assets_dir().join("icons").join(SOURCE_ICON_FILE)
    }

    /// Preferences file path, config override first.
    pub fn preferences_path(&self) -> Option<PathBuf> {
        self.integration
            .preferences_file
            .as_deref()
            .map(expand_home)
            .or_else(TomlPreferenceStore::default_path)
    }
}

/// Best-effort line lookup for warning messages.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(key))
        .map(|idx| idx + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.host.server_command, "kemet-language-server");
        assert!(config.host.server_args.is_empty());
        assert!(config.integration.extensions_dir.is_none());
    }

    #[test]
    fn load_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kemet.toml");
        std::fs::write(
            &path,
            r#"
[host]
server_command = "/usr/local/bin/kemet-ls"
server_args = ["--stdio"]

[integration]
extensions_dir = "/opt/editor/extensions"
"#,
        )
        .unwrap();

        let (config, warnings) = Config::load_with_warnings(&path).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(config.host.server_command, "/usr/local/bin/kemet-ls");
        assert_eq!(config.host.server_args, vec!["--stdio".to_string()]);
        assert_eq!(
            config.extensions_dir().unwrap(),
            PathBuf::from("/opt/editor/extensions")
        );
    }

    #[test]
    fn unknown_keys_warn_with_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kemet.toml");
        std::fs::write(
            &path,
            "[host]\nserver_command = \"kemet-ls\"\nserver_comand = \"typo\"\n",
        )
        .unwrap();

        let (_, warnings) = Config::load_with_warnings(&path).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "server_comand");
        assert_eq!(warnings[0].line, Some(3));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kemet.toml");
        std::fs::write(&path, "host = \"not a table\"").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(KemetError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn load_or_default_without_files() {
        let (config, warnings) =
            Config::load_or_default(Some(Path::new("/nonexistent/kemet.toml")));
        assert_eq!(config.host.server_command, "kemet-language-server");
        assert!(warnings.is_empty());
    }

    #[test]
    fn source_icon_under_assets_dir() {
        let mut config = Config::default();
        config.integration.assets_dir = Some(PathBuf::from("/opt/kemet/assets"));
        assert_eq!(
            config.source_icon(),
            PathBuf::from("/opt/kemet/assets/icons/kemet-file.svg")
        );
    }
}
