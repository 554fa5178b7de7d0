//! Status command handler
//!
//! Read-only integration health report.

use std::path::Path;

use anyhow::Result;
use is_terminal::IsTerminal;

use kemet_host::application::{run_status, CheckStatus};
use kemet_host::infrastructure::LocalFs;
use kemet_host::ui::views::render_status_report;

use super::{extension_registry, load_config, preference_store};

pub fn cmd_status(config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config_path, json);

    let registry = extension_registry(&config)?;
    let prefs = preference_store(&config)?;
    let report = run_status(&registry, &prefs, &LocalFs::new(), &config.source_icon());

    if json {
        for check in &report.checks {
            let status = match check.status {
                CheckStatus::Pass => "pass",
                CheckStatus::Warning => "warning",
                CheckStatus::Error => "error",
            };
            println!(
                "{}",
                serde_json::json!({
                    "event": "check",
                    "name": check.name,
                    "status": status,
                    "message": check.message,
                })
            );
        }
        println!(
            "{}",
            serde_json::json!({
                "event": "status",
                "passes": report.passes(),
                "warnings": report.warnings(),
                "errors": report.errors(),
                "success": report.is_success(),
            })
        );
    } else {
        println!("🔍 Kemet Icons - integration status\n");
        print!(
            "{}",
            render_status_report(&report, std::io::stdout().is_terminal())
        );
    }

    Ok(())
}
