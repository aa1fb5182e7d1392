//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - JSON rendering of inventory documents
//!
//! ## Structure
//!
//! - `cli` - Command-line interface definition
//! - `output` - Output rendering

pub mod cli;
pub mod output;

pub use cli::{Cli, InventoryQuery};
pub use output::{render_empty, render_host, render_inventory, OutputFormat};
