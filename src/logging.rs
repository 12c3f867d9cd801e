//! Tracing subscriber setup.
//!
//! The TUI owns stdout/stderr while it runs, so interactive sessions log to
//! a file (no ANSI colours) and only when one is configured. Headless export
//! runs log to stderr instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Append to this file.
    File(&'a Path),
    Stderr,
    Disabled,
}

/// Build the event filter: `RUST_LOG` when set, otherwise `level`.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).with_context(|| format!("invalid log level `{level}`")),
    }
}

/// Install the global subscriber.
///
/// Calling it again after a subscriber is installed returns an error, which
/// callers may ignore.
pub fn init_logging(target: LogTarget<'_>, level: &str) -> Result<()> {
    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(build_filter(level)?)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow!("failed to install logger: {e}")),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(build_filter(level)?)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!("failed to install logger: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_noop() {
        assert!(init_logging(LogTarget::Disabled, "info").is_ok());
    }

    #[test]
    fn test_bad_log_file_path() {
        let err = init_logging(LogTarget::File(Path::new("/nonexistent/dir/app.log")), "info")
            .unwrap_err();
        assert!(err.to_string().contains("failed to open log file"));
    }
}
