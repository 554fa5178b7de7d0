//! Notifier port
//!
//! User-visible messages and the two prompts the integration needs. The
//! production implementation talks to the terminal; tests use scripted
//! implementations so no prompt ever blocks a test run.

/// Outcome of the tri-state consent prompt.
///
/// A dismissed prompt is treated as `Declined`: proceed no further, persist
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consent {
    /// Proceed with the integration
    Accepted,
    /// Skip this time; ask again on the next activation
    Declined,
    /// Skip and persist the skip preference ("Don't ask again")
    DeclinedPermanently,
}

/// Outcome of the post-action reload prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadChoice {
    /// Reload the host editor immediately
    Now,
    /// User will reload at their convenience; not an error
    Later,
}

/// Notification and prompting surface.
pub trait Notifier {
    /// Informational message
    fn info(&self, message: &str);

    /// Warning (non-fatal conditions: target absent on a forced run, ...)
    fn warn(&self, message: &str);

    /// Error (fatal-for-this-call conditions)
    fn error(&self, message: &str);

    /// Tri-state consent prompt
    fn ask_consent(&self, message: &str) -> Consent;

    /// Two-option reload prompt
    fn ask_reload(&self, message: &str) -> ReloadChoice;

    /// Request an immediate host reload (chosen "now" in `ask_reload`)
    fn request_reload(&self);
}
