//! amen CLI - daily Bible verses in English, Amharic and Finnish
//!
//! Entry point: parse arguments, install logging, dispatch to the command.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod output;
mod utils;

use cli::{Cli, Commands};
use utils::logging::initialize_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    execute_command(cli).await
}

async fn execute_command(cli: Cli) -> Result<()> {
    let dataset_dir = cli.dataset_dir.as_deref();

    match cli.command {
        Commands::Serve { bind, port } => commands::serve(dataset_dir, bind, port).await,
        Commands::Verse { lang, id, format } => {
            commands::show_verse(dataset_dir, &lang, id, format.resolve())
        },
        Commands::Today { lang, format } => {
            commands::show_today(dataset_dir, &lang, format.resolve())
        },
        Commands::Amen { id, lang, force } => {
            commands::lock_blessing(dataset_dir, id, &lang, force)
        },
        Commands::Count => commands::count_verses(dataset_dir),
        Commands::Import {
            source,
            delay_ms,
            dry_run,
        } => commands::import_verses(dataset_dir, &source, delay_ms, dry_run).await,
    }
}
