//! Language server bootstrap
//!
//! Starts the Kemet language server as a child process on a stdio transport
//! and owns its lifecycle. Wiring only: no retry, no supervision. The caller
//! provides the shutdown flag (flipped by its Ctrl-C handler); when it goes
//! down the child is killed and reaped.

use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;
use crate::error::KemetResult;

const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Run the language server until it exits or `running` is cleared.
///
/// Returns the server's exit code (0 when shut down by the host).
pub fn run_language_server(host: &HostConfig, running: Arc<AtomicBool>) -> KemetResult<i32> {
    let mut child = Command::new(&host.server_command)
        .args(&host.server_args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?;

    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status.code().unwrap_or(0));
        }
        if !running.load(Ordering::SeqCst) {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(0);
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn returns_server_exit_code() {
        let host = HostConfig {
            server_command: "sh".to_string(),
            server_args: vec!["-c".to_string(), "exit 7".to_string()],
        };
        let running = Arc::new(AtomicBool::new(true));

        let code = run_language_server(&host, running).unwrap();
        assert_eq!(code, 7);
    }

    #[cfg(unix)]
    #[test]
    fn kills_server_on_shutdown() {
        let host = HostConfig {
            server_command: "sleep".to_string(),
            server_args: vec!["30".to_string()],
        };
        let running = Arc::new(AtomicBool::new(false));

        let code = run_language_server(&host, running).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn missing_server_command_is_an_error() {
        let host = HostConfig {
            server_command: "kemet-language-server-that-does-not-exist".to_string(),
            server_args: Vec::new(),
        };
        let running = Arc::new(AtomicBool::new(true));

        assert!(run_language_server(&host, running).is_err());
    }
}
