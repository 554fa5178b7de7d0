//! Common test utilities for kemet-host integration tests.
//!
//! Provides an isolated filesystem layout (fake editor extensions directory,
//! installed theme extension, bundled asset, preferences file) and a
//! recording notifier so no test ever blocks on a prompt.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use kemet_host::application::IconIntegrator;
use kemet_host::domain::ports::{Consent, Notifier, ReloadChoice};
use kemet_host::infrastructure::{DirScanRegistry, LocalFs, TomlPreferenceStore};

pub const THEME_DIR: &str = "pkief.material-icon-theme-5.1.0";

pub const SAMPLE_MANIFEST: &str = r#"{
  "iconDefinitions": {
    "rust": { "iconPath": "../icons/rust.svg" },
    "toml": { "iconPath": "../icons/toml.svg" }
  },
  "fileExtensions": {
    "rs": "rust",
    "toml": "toml"
  },
  "languageIds": {
    "rust": "rust"
  },
  "folderNames": {
    "src": "folder-src"
  }
}"#;

/// Isolated test environment rooted in a tempdir.
pub struct TestEnv {
    _dir: TempDir,
    pub extensions_dir: PathBuf,
    pub theme_root: PathBuf,
    pub source_icon: PathBuf,
    pub prefs_path: PathBuf,
}

impl TestEnv {
    /// Theme installed with the sample manifest.
    pub fn new() -> Self {
        let env = Self::without_theme();
        std::fs::create_dir_all(env.theme_root.join("icons")).unwrap();
        std::fs::create_dir_all(env.theme_root.join("dist")).unwrap();
        env.write_manifest(SAMPLE_MANIFEST);
        env
    }

    /// Extensions directory exists but the theme is not installed.
    pub fn without_theme() -> Self {
        let dir = TempDir::new().unwrap();
        let extensions_dir = dir.path().join("extensions");
        std::fs::create_dir_all(&extensions_dir).unwrap();

        let source_icon = dir.path().join("assets/icons/kemet-file.svg");
        std::fs::create_dir_all(source_icon.parent().unwrap()).unwrap();
        std::fs::write(&source_icon, "<svg>kemet source</svg>").unwrap();

        let theme_root = extensions_dir.join(THEME_DIR);
        let prefs_path = dir.path().join("preferences.toml");

        Self {
            _dir: dir,
            extensions_dir,
            theme_root,
            source_icon,
            prefs_path,
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.theme_root.join("dist/material-icons.json")
    }

    pub fn installed_icon_path(&self) -> PathBuf {
        self.theme_root.join("icons/kemet.svg")
    }

    pub fn write_manifest(&self, text: &str) {
        std::fs::write(self.manifest_path(), text).unwrap();
    }

    pub fn read_manifest(&self) -> String {
        std::fs::read_to_string(self.manifest_path()).unwrap()
    }

    pub fn icon_installed(&self) -> bool {
        self.installed_icon_path().exists()
    }

    pub fn registry(&self) -> DirScanRegistry {
        DirScanRegistry::new(self.extensions_dir.clone())
    }

    pub fn prefs(&self) -> TomlPreferenceStore {
        TomlPreferenceStore::with_path(self.prefs_path.clone())
    }

    /// Integrator over the production ports, with a recording notifier.
    /// Clone the notifier before passing it in to keep a handle for
    /// assertions.
    pub fn integrator(
        &self,
        notifier: RecordingNotifier,
    ) -> IconIntegrator<DirScanRegistry, TomlPreferenceStore, RecordingNotifier, LocalFs> {
        IconIntegrator::new(
            self.registry(),
            self.prefs(),
            notifier,
            LocalFs::new(),
            self.source_icon.clone(),
        )
    }
}

#[derive(Default)]
struct NotifierState {
    messages: Mutex<Vec<(String, String)>>,
    consent_prompts: Mutex<usize>,
}

/// Notifier that answers prompts from a fixed script and records messages.
///
/// Cloning shares the recorded state, so tests can hand one clone to the
/// integrator and assert on the other.
#[derive(Clone)]
pub struct RecordingNotifier {
    consent: Consent,
    reload: ReloadChoice,
    state: Arc<NotifierState>,
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::answering(Consent::Declined)
    }
}

impl RecordingNotifier {
    pub fn answering(consent: Consent) -> Self {
        Self {
            consent,
            reload: ReloadChoice::Later,
            state: Arc::new(NotifierState::default()),
        }
    }

    pub fn messages_of(&self, level: &str) -> Vec<String> {
        self.state
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn consent_prompts(&self) -> usize {
        *self.state.consent_prompts.lock().unwrap()
    }

    fn record(&self, level: &str, message: &str) {
        self.state
            .messages
            .lock()
            .unwrap()
            .push((level.to_string(), message.to_string()));
    }
}

impl Notifier for RecordingNotifier {
    fn info(&self, message: &str) {
        self.record("info", message);
    }

    fn warn(&self, message: &str) {
        self.record("warning", message);
    }

    fn error(&self, message: &str) {
        self.record("error", message);
    }

    fn ask_consent(&self, _message: &str) -> Consent {
        *self.state.consent_prompts.lock().unwrap() += 1;
        self.consent
    }

    fn ask_reload(&self, _message: &str) -> ReloadChoice {
        self.reload
    }

    fn request_reload(&self) {}
}
