//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Follows the dynamic-inventory script protocol: `--list` or `--host <name>`
//! - Stdout carries only the JSON document; diagnostics and logs go to stderr

use std::path::PathBuf;

use clap::Parser;

/// Arbor - compile a declarative host tree into a dynamic inventory
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the full inventory (all groups plus _meta.hostvars)
    #[arg(long, conflicts_with = "host")]
    pub list: bool,

    /// Print vars for a single host (always empty; vars are in _meta)
    #[arg(long, value_name = "HOSTNAME")]
    pub host: Option<String>,

    /// Inventory source file (default: hosts/hosts.yml)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Configuration file (default: ./arbor.toml, then the user config)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long, conflicts_with = "compact")]
    pub pretty: bool,

    /// Print the JSON output on a single line
    #[arg(long)]
    pub compact: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What the caller asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryQuery {
    List,
    Host(String),
    Empty,
}

impl Cli {
    pub fn query(&self) -> InventoryQuery {
        if self.list {
            InventoryQuery::List
        } else if let Some(host) = &self.host {
            InventoryQuery::Host(host.clone())
        } else {
            InventoryQuery::Empty
        }
    }
}
