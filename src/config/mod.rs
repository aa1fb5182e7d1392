//! Configuration module for Arbor
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ARBOR_*)
//! 3. Explicit `--config` file, or project config (./arbor.toml)
//! 4. User config (<config dir>/arbor/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, InventoryConfig, OutputConfig, PrettyMode, Verbosity, DEFAULT_SOURCE};
