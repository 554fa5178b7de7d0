//! Integrate command handler
//!
//! Forced integration: clears the skip preference, then runs the workflow
//! without the idempotency short-circuit or the consent prompt. With
//! `--dry-run`, renders the plan instead of writing.

use std::path::Path;

use anyhow::Result;
use is_terminal::IsTerminal;

use kemet_host::application::{plan_integration, IntegrateOutcome};
use kemet_host::domain::ports::PreferenceStore;
use kemet_host::domain::theme::SKIP_INTEGRATION_KEY;
use kemet_host::infrastructure::LocalFs;
use kemet_host::ui::views::render_plan;

use super::{build_integrator, extension_registry, load_config, preference_store};

pub fn cmd_integrate(config_path: Option<&Path>, dry_run: bool, json: bool) -> Result<()> {
    let config = load_config(config_path, json);

    if dry_run {
        return cmd_integrate_dry_run(&config, json);
    }

    if !json {
        println!("🎨 Kemet Icons - Material Icon Theme integration");
    }

    // The forced command re-enables future automatic prompts
    preference_store(&config)?.set(SKIP_INTEGRATION_KEY, false)?;

    let integrator = build_integrator(&config, json)?;
    let outcome = integrator.integrate(true);

    if json {
        let (name, manifest_updated) = match outcome {
            IntegrateOutcome::TargetNotInstalled => ("target_not_installed", None),
            IntegrateOutcome::Completed { manifest_updated } => {
                ("completed", Some(manifest_updated))
            }
            IntegrateOutcome::Failed => ("failed", None),
            // Unreachable when forced; named for completeness
            IntegrateOutcome::AlreadyIntegrated => ("already_integrated", None),
            IntegrateOutcome::Declined => ("declined", None),
            IntegrateOutcome::Suppressed => ("suppressed", None),
        };
        println!(
            "{}",
            serde_json::json!({
                "event": "integrate",
                "outcome": name,
                "manifest_updated": manifest_updated,
            })
        );
    }

    Ok(())
}

fn cmd_integrate_dry_run(
    config: &kemet_host::config::Config,
    json: bool,
) -> Result<()> {
    let registry = extension_registry(config)?;
    let fs = LocalFs::new();
    let plan = plan_integration(&registry, &fs, &config.source_icon())?;

    let Some(plan) = plan else {
        if json {
            println!(
                "{}",
                serde_json::json!({ "event": "plan", "outcome": "target_not_installed" })
            );
        } else {
            eprintln!("⚠ Material Icon Theme is not installed.");
        }
        return Ok(());
    };

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "plan",
                "outcome": "planned",
                "copy": {
                    "source": plan.copy.source.display().to_string(),
                    "dest": plan.copy.dest.display().to_string(),
                    "overwrite": plan.copy.overwrite,
                },
                "manifest": plan.manifest.as_ref().map(|m| m.path.display().to_string()),
            })
        );
    } else {
        println!("🎨 Kemet Icons - dry run (nothing will be written)\n");
        print!(
            "{}",
            render_plan(&plan, std::io::stdout().is_terminal())
        );
    }

    Ok(())
}
