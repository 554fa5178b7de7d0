//! Console rendering for command output.

use similar::TextDiff;

use crate::application::plan::IntegrationPlan;
use crate::application::status::{CheckStatus, StatusReport};
use crate::ui::theme::{colors, icons, paint};

/// Render the status report as a check list with a summary line.
pub fn render_status_report(report: &StatusReport, color: bool) -> String {
    let mut out = String::new();

    for check in &report.checks {
        let icon = match check.status {
            CheckStatus::Pass => paint(icons::SUCCESS, colors::SUCCESS, color),
            CheckStatus::Warning => paint(icons::WARNING, colors::WARNING, color),
            CheckStatus::Error => paint(icons::ERROR, colors::ERROR, color),
        };
        out.push_str(&format!("  {} {} - {}\n", icon, check.name, check.message));
    }

    out.push('\n');
    out.push_str(&format!(
        "Summary: {} passed, {} warnings, {} errors\n",
        report.passes(),
        report.warnings(),
        report.errors()
    ));

    out
}

/// Render a dry-run integration plan: the asset copy and a unified diff of
/// the manifest rewrite.
pub fn render_plan(plan: &IntegrationPlan, color: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("Target: {}\n\n", plan.target_root.display()));

    let action = if plan.copy.overwrite {
        "overwrite"
    } else {
        "create"
    };
    out.push_str(&format!(
        "  {} {} ({})\n",
        paint(icons::ARROW, colors::INFO, color),
        plan.copy.dest.display(),
        action
    ));

    match &plan.manifest {
        None => {
            out.push_str(&format!(
                "  {} no manifest file; file associations will not be registered\n",
                paint(icons::PENDING, colors::DIM, color)
            ));
        }
        Some(step) if step.is_noop() => {
            out.push_str(&format!(
                "  {} {} already registered\n",
                paint(icons::SUCCESS, colors::SUCCESS, color),
                step.path.display()
            ));
        }
        Some(step) => {
            out.push_str(&format!(
                "  {} {}\n\n",
                paint(icons::ARROW, colors::INFO, color),
                step.path.display()
            ));
            let diff = TextDiff::from_lines(&step.before, &step.after);
            out.push_str(
                &diff
                    .unified_diff()
                    .context_radius(3)
                    .header("current", "planned")
                    .to_string(),
            );
        }
    }

    out
}
