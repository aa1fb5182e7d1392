//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ArborResult;

use super::loader::{self, ConfigWarning};

/// Default inventory source, relative to the working directory
pub const DEFAULT_SOURCE: &str = "hosts/hosts.yml";

/// Inventory source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    #[serde(default = "default_source")]
    pub source: PathBuf,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}

fn default_source() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE)
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: PrettyMode,

    #[serde(default)]
    pub verbosity: Verbosity,
}

/// JSON formatting mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrettyMode {
    /// Pretty when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl PrettyMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(PrettyMode::Auto),
            "always" | "true" | "1" => Some(PrettyMode::Always),
            "never" | "false" | "0" => Some(PrettyMode::Never),
            _ => None,
        }
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }

    /// Default log filter when no `-v` flag or `RUST_LOG` is given
    pub fn log_filter(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub inventory: InventoryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ArborResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ArborResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, project config, user config, or defaults
    pub fn resolve(explicit: Option<&Path>) -> ArborResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit)
    }

    /// Apply environment variable overrides (ARBOR_* prefix)
    pub fn with_env_overrides(self) -> (Self, Vec<ConfigWarning>) {
        loader::with_env_overrides(self)
    }
}
