//! Layered application settings.
//!
//! Settings come from, lowest priority first: built-in defaults, a TOML file
//! (`--config <path>`, or `rations.toml` in the working directory when
//! present), then `RATIONS_*` environment variables. Command line flags are
//! applied on top by the binary.
//!
//! ```toml
//! data = "menus/fsr_2012.csv"
//! theme = "dark"
//! log_file = "rations.log"
//! log_level = "debug"
//! export_path = "rations_export.json"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Base name of the config file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "rations";

/// Prefix of environment overrides, e.g. `RATIONS_THEME=light`.
pub const ENV_PREFIX: &str = "RATIONS";

/// Colour theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Detect from the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Resolved settings for a session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Catalog file; the bundled catalog is used when unset.
    pub data: Option<PathBuf>,
    pub theme: ThemeChoice,
    /// Log destination. The TUI writes no logs without one.
    pub log_file: Option<PathBuf>,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_level: String,
    /// Where the `e` key writes the filtered view.
    pub export_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: None,
            theme: ThemeChoice::Auto,
            log_file: None,
            log_level: "info".to_string(),
            export_path: PathBuf::from("rations_export.json"),
        }
    }
}

impl Settings {
    /// Load settings from an explicit file (which must exist) or from the
    /// optional default file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("failed to read configuration")?;

        config.try_deserialize().context("invalid configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::Builder;

    /// `Settings::load` reads the process environment; tests that load
    /// must not run while another one has `RATIONS_*` variables set.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.data, None);
        assert_eq!(settings.theme, ThemeChoice::Auto);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.export_path, PathBuf::from("rations_export.json"));
    }

    #[test]
    fn test_load_from_toml_file() {
        let _guard = env_lock();
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "data = \"menus.csv\"").unwrap();
        writeln!(file, "theme = \"light\"").unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();
        file.flush().unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.data, Some(PathBuf::from("menus.csv")));
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert_eq!(settings.log_level, "debug");
        // Unset keys keep their defaults.
        assert_eq!(settings.log_file, None);
        assert_eq!(settings.export_path, PathBuf::from("rations_export.json"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let _guard = env_lock();
        assert!(Settings::load(Some(Path::new("/nonexistent/rations.toml"))).is_err());
    }

    #[test]
    fn test_invalid_theme_is_an_error() {
        let _guard = env_lock();
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "theme = \"purple\"").unwrap();
        file.flush().unwrap();

        assert!(Settings::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = env_lock();
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();
        writeln!(file, "theme = \"light\"").unwrap();
        file.flush().unwrap();

        std::env::set_var("RATIONS_LOG_LEVEL", "warn");
        std::env::set_var("RATIONS_LOG_FILE", "rations.log");
        let settings = Settings::load(Some(file.path()));
        std::env::remove_var("RATIONS_LOG_LEVEL");
        std::env::remove_var("RATIONS_LOG_FILE");

        let settings = settings.unwrap();
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.log_file, Some(PathBuf::from("rations.log")));
        assert_eq!(settings.theme, ThemeChoice::Light);
    }
}
