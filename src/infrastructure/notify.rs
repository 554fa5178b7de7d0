//! Console Notifier
//!
//! Implements the Notifier port on the terminal: styled messages, dialoguer
//! prompts for consent and reload, newline-delimited JSON events in machine
//! mode. Prompts only run against an interactive stdin; anything else reads
//! as a decline, so headless runs never block and never mutate without
//! consent.

use is_terminal::IsTerminal;

use crate::domain::ports::notifier::{Consent, Notifier, ReloadChoice};
use crate::ui::theme::{colors, icons, paint};

/// Notifier backed by stdout/stderr and dialoguer prompts.
pub struct ConsoleNotifier {
    json: bool,
    interactive: bool,
    color: bool,
}

impl ConsoleNotifier {
    /// Detect interactivity and color support from the process streams.
    pub fn new(json: bool) -> Self {
        Self {
            json,
            interactive: !json && std::io::stdin().is_terminal(),
            color: std::io::stdout().is_terminal(),
        }
    }

    /// Fixed interactivity, for tests and non-terminal embedding.
    pub fn with_interactivity(json: bool, interactive: bool) -> Self {
        Self {
            json,
            interactive,
            color: false,
        }
    }

    fn emit(&self, level: &str, icon: &str, color: crossterm::style::Color, message: &str) {
        if self.json {
            println!(
                "{}",
                serde_json::json!({ "type": "notify", "level": level, "message": message })
            );
            return;
        }
        let line = format!("{} {}", paint(icon, color, self.color), message);
        match level {
            "info" => println!("{}", line),
            _ => eprintln!("{}", line),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn info(&self, message: &str) {
        self.emit("info", icons::SUCCESS, colors::SUCCESS, message);
    }

    fn warn(&self, message: &str) {
        self.emit("warning", icons::WARNING, colors::WARNING, message);
    }

    fn error(&self, message: &str) {
        self.emit("error", icons::ERROR, colors::ERROR, message);
    }

    fn ask_consent(&self, message: &str) -> Consent {
        if !self.interactive {
            return Consent::Declined;
        }

        let selection = dialoguer::Select::new()
            .with_prompt(message)
            .items(&["Yes", "No", "Don't ask again"])
            .default(0)
            .interact_opt();

        match selection {
            Ok(Some(0)) => Consent::Accepted,
            Ok(Some(2)) => Consent::DeclinedPermanently,
            // "No", a dismissed prompt, and a broken terminal all decline
            _ => Consent::Declined,
        }
    }

    fn ask_reload(&self, message: &str) -> ReloadChoice {
        if !self.interactive {
            self.info(message);
            return ReloadChoice::Later;
        }

        let selection = dialoguer::Select::new()
            .with_prompt(message)
            .items(&["Reload now", "Later"])
            .default(0)
            .interact_opt();

        match selection {
            Ok(Some(0)) => ReloadChoice::Now,
            _ => ReloadChoice::Later,
        }
    }

    fn request_reload(&self) {
        // The CLI cannot reload the editor's window itself
        self.info("Restart your editor now to apply the icon changes.");
    }
}
