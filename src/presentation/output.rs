//! Output Rendering
//!
//! Renders inventory documents as JSON. Stdout carries nothing but these documents.

use is_terminal::IsTerminal;
use serde::Serialize;

use crate::config::PrettyMode;
use crate::domain::entities::Inventory;
use crate::error::ArborResult;

/// JSON layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Single line, for the orchestrator
    #[default]
    Compact,
    /// Indented, for humans
    Pretty,
}

impl OutputFormat {
    /// Resolve the configured mode; `Auto` is pretty only on a terminal
    pub fn from_mode(mode: PrettyMode) -> Self {
        match mode {
            PrettyMode::Always => OutputFormat::Pretty,
            PrettyMode::Never => OutputFormat::Compact,
            PrettyMode::Auto if std::io::stdout().is_terminal() => OutputFormat::Pretty,
            PrettyMode::Auto => OutputFormat::Compact,
        }
    }
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> ArborResult<String> {
    let rendered = match format {
        OutputFormat::Compact => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(rendered)
}

/// The full listing: every group plus `_meta.hostvars`
pub fn render_inventory(inventory: &Inventory, format: OutputFormat) -> ArborResult<String> {
    render(inventory, format)
}

/// Per-host query answer. Always empty: hostvars are delivered in `_meta`.
pub fn render_host(_host: &str, format: OutputFormat) -> ArborResult<String> {
    render(&serde_json::Map::new(), format)
}

/// Answer when neither listing nor host query was requested
pub fn render_empty(format: OutputFormat) -> ArborResult<String> {
    render(&Inventory::empty(), format)
}
