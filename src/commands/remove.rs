//! Remove command handler
//!
//! Unconditional removal of the Kemet icons from the theme extension.

use std::path::Path;

use anyhow::Result;

use kemet_host::application::RemoveOutcome;

use super::{build_integrator, load_config};

pub fn cmd_remove(config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config_path, json);

    if !json {
        println!("🗑 Kemet Icons - removing Material Icon Theme integration");
    }

    let integrator = build_integrator(&config, json)?;
    let outcome = integrator.remove();

    match outcome {
        RemoveOutcome::Removed {
            asset_deleted,
            manifest_updated,
        } => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "event": "remove",
                        "outcome": "removed",
                        "asset_deleted": asset_deleted,
                        "manifest_updated": manifest_updated,
                    })
                );
            } else if outcome.was_noop() {
                println!("Nothing to remove; Kemet icons were not integrated.");
            } else {
                println!("Kemet icons removed.");
            }
        }
        RemoveOutcome::TargetNotInstalled => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "event": "remove", "outcome": "target_not_installed" })
                );
            }
        }
        RemoveOutcome::Failed => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "event": "remove", "outcome": "failed" })
                );
            }
        }
    }

    Ok(())
}
