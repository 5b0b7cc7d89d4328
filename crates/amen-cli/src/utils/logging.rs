//! Logging initialization and color control.

use anyhow::{Result, anyhow};
use colored::control as color_control;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::output::OutputFormat;

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set. Otherwise the level comes from `-v`/`-q`, with
/// `serve` logging at info so requests are visible, and JSON output dropping to
/// errors only so stdout stays parseable.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let machine_output = !cli.verbose && emits_json(&cli.command);
    let level = base_level(cli, machine_output);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    let env_no_color = std::env::var_os("NO_COLOR").is_some();
    if cli.no_color || env_no_color || machine_output {
        color_control::set_override(false);
    }
    Ok(())
}

fn base_level(cli: &Cli, machine_output: bool) -> Level {
    if cli.verbose {
        Level::DEBUG
    } else if cli.quiet || machine_output {
        Level::ERROR
    } else if matches!(cli.command, Commands::Serve { .. } | Commands::Import { .. }) {
        Level::INFO
    } else {
        Level::WARN
    }
}

fn emits_json(command: &Commands) -> bool {
    match command {
        Commands::Verse { format, .. } | Commands::Today { format, .. } => {
            format.resolve() == OutputFormat::Json
        },
        _ => false,
    }
}
