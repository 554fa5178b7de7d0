//! kemet-host - Kemet language host and icon theme integration
//!
//! Bootstraps the Kemet language client/server pair and manages the
//! consent-gated, idempotent registration of the Kemet file icon into the
//! Material Icon Theme extension's assets and JSON manifest, including its
//! symmetric removal.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod host;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use application::{
    plan_integration, run_status, IconIntegrator, IntegrateOutcome, IntegrationPlan,
    RemoveOutcome, StatusReport,
};
pub use config::Config;
pub use domain::{IconManifest, ThemeTarget};
pub use error::{KemetError, KemetResult};
