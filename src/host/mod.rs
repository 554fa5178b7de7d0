//! Host bootstrap layer
//!
//! Process lifecycle for the language client/server pair.

pub mod bootstrap;

pub use bootstrap::run_language_server;
