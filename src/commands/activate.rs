//! Activate command handler
//!
//! The activation path of the host: consent-gated first-time icon
//! integration (skipped entirely when the persisted preference says so),
//! then the language server until it exits or Ctrl-C.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use kemet_host::domain::ports::PreferenceStore;
use kemet_host::domain::theme::SKIP_INTEGRATION_KEY;
use kemet_host::host::run_language_server;

use super::{build_integrator, load_config, preference_store};

pub fn cmd_activate(config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config_path, json);

    if !json {
        println!("🔌 Kemet Host");
    }

    let prefs = preference_store(&config)?;
    if prefs.get(SKIP_INTEGRATION_KEY) {
        if json {
            println!(
                "{}",
                serde_json::json!({ "event": "integrate", "outcome": "suppressed_by_preference" })
            );
        }
    } else {
        let integrator = build_integrator(&config, json)?;
        integrator.integrate(false);
    }

    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = running.clone();
    ctrlc::set_handler(move || {
        handler_flag.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "event": "server_start", "command": config.host.server_command })
        );
    } else {
        println!("Starting language server: {}", config.host.server_command);
        println!("Press Ctrl+C to stop\n");
    }

    let code = run_language_server(&config.host, running)
        .with_context(|| format!("failed to start '{}'", config.host.server_command))?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "event": "server_exit", "code": code })
        );
    }
    if code != 0 {
        anyhow::bail!("language server exited with code {}", code);
    }

    Ok(())
}
