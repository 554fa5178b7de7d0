//! Scripted port implementations for unit tests.
//!
//! Prompts never block: consent and reload answers are fixed up front, and
//! every notification is recorded for assertions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::ports::{
    Consent, ExtensionRegistry, Notifier, PreferenceError, PreferenceStore, ReloadChoice,
};

/// Registry that answers every lookup with a fixed result.
pub struct StaticRegistry {
    root: Option<PathBuf>,
}

impl StaticRegistry {
    pub fn installed(root: &Path) -> Self {
        Self {
            root: Some(root.to_path_buf()),
        }
    }

    pub fn absent() -> Self {
        Self { root: None }
    }
}

impl ExtensionRegistry for StaticRegistry {
    fn locate(&self, _id: &str) -> Option<PathBuf> {
        self.root.clone()
    }
}

/// In-memory preference store.
#[derive(Default)]
pub struct StubPrefs {
    flags: Mutex<HashMap<String, bool>>,
}

impl PreferenceStore for StubPrefs {
    fn get(&self, key: &str) -> bool {
        self.flags
            .lock()
            .unwrap()
            .get(key)
            .copied()
            .unwrap_or(false)
    }

    fn set(&self, key: &str, value: bool) -> Result<(), PreferenceError> {
        self.flags.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}

/// Notifier that records messages and answers prompts from a script.
pub struct ScriptedNotifier {
    consent: Consent,
    reload: ReloadChoice,
    infos: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    consent_prompts: Mutex<usize>,
    reload_requests: Mutex<usize>,
}

impl Default for ScriptedNotifier {
    fn default() -> Self {
        Self::with_consent(Consent::Declined)
    }
}

impl ScriptedNotifier {
    pub fn with_consent(consent: Consent) -> Self {
        Self {
            consent,
            reload: ReloadChoice::Later,
            infos: Mutex::new(Vec::new()),
            warnings: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
            consent_prompts: Mutex::new(0),
            reload_requests: Mutex::new(0),
        }
    }

    pub fn accepting() -> Self {
        Self::with_consent(Consent::Accepted)
    }

    pub fn declining() -> Self {
        Self::with_consent(Consent::Declined)
    }

    pub fn suppressing() -> Self {
        Self::with_consent(Consent::DeclinedPermanently)
    }

    pub fn reloading_now(mut self) -> Self {
        self.reload = ReloadChoice::Now;
        self
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn consent_prompts(&self) -> usize {
        *self.consent_prompts.lock().unwrap()
    }

    pub fn reload_requests(&self) -> usize {
        *self.reload_requests.lock().unwrap()
    }
}

impl Notifier for ScriptedNotifier {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn ask_consent(&self, _message: &str) -> Consent {
        *self.consent_prompts.lock().unwrap() += 1;
        self.consent
    }

    fn ask_reload(&self, _message: &str) -> ReloadChoice {
        self.reload
    }

    fn request_reload(&self) {
        *self.reload_requests.lock().unwrap() += 1;
    }
}
