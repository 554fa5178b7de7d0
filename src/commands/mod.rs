//! Command handlers
//!
//! Each handler wires the production port implementations into the
//! application layer and renders the result for humans or as JSON events.

mod activate;
mod integrate;
mod remove;
mod status;

pub use activate::cmd_activate;
pub use integrate::cmd_integrate;
pub use remove::cmd_remove;
pub use status::cmd_status;

use std::path::Path;

use anyhow::{Context, Result};

use kemet_host::application::IconIntegrator;
use kemet_host::config::Config;
use kemet_host::infrastructure::{ConsoleNotifier, DirScanRegistry, LocalFs, TomlPreferenceStore};

/// The integrator over the production ports.
pub(crate) type HostIntegrator =
    IconIntegrator<DirScanRegistry, TomlPreferenceStore, ConsoleNotifier, LocalFs>;

/// Load configuration and surface unknown-key warnings.
pub(crate) fn load_config(explicit: Option<&Path>, json: bool) -> Config {
    let (config, warnings) = Config::load_or_default(explicit);
    if !json {
        for w in &warnings {
            if let Some(line) = w.line {
                eprintln!(
                    "⚠ Unknown config key '{}' in {}:{}",
                    w.key,
                    w.file.display(),
                    line
                );
            } else {
                eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
            }
        }
    }
    config
}

pub(crate) fn extension_registry(config: &Config) -> Result<DirScanRegistry> {
    let dir = config
        .extensions_dir()
        .context("could not determine the editor extensions directory")?;
    Ok(DirScanRegistry::new(dir))
}

pub(crate) fn preference_store(config: &Config) -> Result<TomlPreferenceStore> {
    let path = config
        .preferences_path()
        .context("could not determine the preferences file location")?;
    Ok(TomlPreferenceStore::with_path(path))
}

pub(crate) fn build_integrator(config: &Config, json: bool) -> Result<HostIntegrator> {
    Ok(IconIntegrator::new(
        extension_registry(config)?,
        preference_store(config)?,
        ConsoleNotifier::new(json),
        LocalFs::new(),
        config.source_icon(),
    ))
}
