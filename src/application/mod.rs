//! Application layer
//!
//! Use cases built on the domain ports: the integration workflow itself,
//! dry-run planning, and the status report.

pub mod integrate;
pub mod plan;
pub mod status;

pub use integrate::{IconIntegrator, IntegrateOutcome, RemoveOutcome};
pub use plan::{plan_integration, CopyStep, IntegrationPlan, ManifestStep};
pub use status::{run_status, CheckStatus, StatusCheck, StatusReport};
