//! Arbor CLI - dynamic inventory compiler
//!
//! Usage: arbor [--list | --host <HOSTNAME>] [--source <FILE>]
//!
//! `--list` prints every group plus `_meta.hostvars`; `--host` prints `{}`.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arbor::config::{Config, ConfigWarning, PrettyMode};
use arbor::presentation::{
    render_empty, render_host, render_inventory, Cli, InventoryQuery, OutputFormat,
};
use arbor::{compile_inventory, load_document};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(document) => {
            println!("{}", document);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Produce the document to print; nothing reaches stdout unless this succeeds
fn run(cli: Cli) -> Result<String> {
    let (config, warnings) = Config::resolve(cli.config.as_deref())?;
    init_tracing(cli.verbose, &config);
    report_config_warnings(&warnings);

    let pretty = if cli.pretty {
        PrettyMode::Always
    } else if cli.compact {
        PrettyMode::Never
    } else {
        config.output.pretty
    };
    let format = OutputFormat::from_mode(pretty);

    match cli.query() {
        InventoryQuery::List => {
            let source = cli.source.unwrap_or(config.inventory.source);
            debug!(source = %source.display(), "loading inventory source");

            let document = load_document(&source)?;
            let inventory = compile_inventory(&document)
                .with_context(|| format!("failed to compile {}", source.display()))?;
            Ok(render_inventory(&inventory, format)?)
        }
        InventoryQuery::Host(host) => Ok(render_host(&host, format)?),
        InventoryQuery::Empty => Ok(render_empty(format)?),
    }
}

fn init_tracing(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => config.output.verbosity.log_filter(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn report_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(message) = &w.message {
            if w.is_from_env() {
                warn!("{}", message);
            } else {
                warn!(file = %w.file.display(), "skipping config: {}", message);
            }
            continue;
        }
        match (w.line, &w.suggestion) {
            (Some(line), Some(suggestion)) => warn!(
                "unknown config key '{}' in {}:{} (did you mean '{}'?)",
                w.key,
                w.file.display(),
                line,
                suggestion
            ),
            (Some(line), None) => {
                warn!("unknown config key '{}' in {}:{}", w.key, w.file.display(), line)
            }
            (None, _) => warn!("unknown config key '{}' in {}", w.key, w.file.display()),
        }
    }
}
