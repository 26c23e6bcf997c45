//! Configuration system for `Tasktrack`.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/tasktrack/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.

use std::path::{Path, PathBuf};

use tasktrack_core::Priority;

use crate::console::input::is_usable_format;

/// Default `chrono` format for due-date input and display.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// The date/time format cannot express a date or cannot read back what it prints.
    #[error("invalid datetime format {0:?}: it must name a date and parse its own output")]
    InvalidDatetimeFormat(String),
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    tasks: TasksFileConfig,
    ui: UiFileConfig,
}

/// `[tasks]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct TasksFileConfig {
    default_priority: Option<Priority>,
}

/// `[ui]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct UiFileConfig {
    datetime_format: Option<String>,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Fully resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Priority assigned when the user leaves the priority prompt blank.
    pub default_priority: Priority,
    /// `chrono` format string for due-date input.
    pub datetime_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_priority: Priority::Low,
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// If no `--config` is given, the default path
    /// (`~/.config/tasktrack/config.toml`) is tried and silently ignored if
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed,
    /// or if the resolved datetime format is unusable for due dates.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        let config = Self::resolve(cli, &file);
        if !is_usable_format(&config.datetime_format) {
            return Err(ConfigError::InvalidDatetimeFormat(config.datetime_format));
        }
        Ok(config)
    }

    /// Resolve an `AppConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default.
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            default_priority: cli
                .default_priority
                .or(file.tasks.default_priority)
                .unwrap_or(defaults.default_priority),
            datetime_format: cli
                .datetime_format
                .clone()
                .or_else(|| file.ui.datetime_format.clone())
                .unwrap_or(defaults.datetime_format),
        }
    }
}

/// CLI arguments parsed by clap.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "In-memory task tracker with a console menu")]
pub struct CliArgs {
    /// Path to config file (default: `~/.config/tasktrack/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Priority used when none is entered (low, medium, high, urgent).
    #[arg(long, env = "TASKTRACK_DEFAULT_PRIORITY")]
    pub default_priority: Option<Priority>,

    /// Due-date input and display format (chrono format string).
    #[arg(long, env = "TASKTRACK_DATETIME_FORMAT")]
    pub datetime_format: Option<String>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "TASKTRACK_LOG")]
    pub log_level: String,

    /// Path to log file (default: `$TMPDIR/tasktrack.log`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Load and parse a TOML config file.
///
/// If `explicit_path` is `Some`, the file must exist (error if not).
/// If `explicit_path` is `None`, the default path is tried and missing file
/// is treated as empty config.
fn load_config_file(explicit_path: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(ConfigFile::default());
        };
        config_dir.join("tasktrack").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
