//! Arbor - inventory compiler
//!
//! Arbor reads a declarative description of projects, host types, environments
//! and ad-hoc groups, and compiles it into the flat group/host/vars document a
//! configuration-management orchestrator consumes as a dynamic inventory.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod parser;
pub mod presentation;

// Re-exports for convenience
pub use application::compile_inventory;
pub use config::{Config, PrettyMode, Verbosity};
pub use domain::entities::{Group, Inventory, Registry};
pub use domain::services::AGGREGATE_GROUP;
pub use domain::value_objects::{HostSpec, ParsedHost};
pub use error::{ArborError, ArborResult};
pub use models::InventoryDocument;
pub use parser::{load_document, parse_document, parse_environment};
pub use presentation::output::{render_empty, render_host, render_inventory, OutputFormat};
