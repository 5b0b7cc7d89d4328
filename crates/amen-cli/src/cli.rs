//! # CLI Structure and Argument Parsing
//!
//! `amen` reads verses from the built-in dataset or a dataset directory, keeps
//! today's blessing, imports new verses, and runs the HTTP API.
//!
//! ```bash
//! # A random verse, or a specific one in Finnish
//! amen verse
//! amen verse --id 3 --lang fi
//!
//! # Accept verse 3 as today's blessing, then show it again later
//! amen amen --id 3
//! amen today
//!
//! # Serve the API on port 8080
//! ALLOWED_ORIGIN=https://amen.example.com amen serve --port 8080
//!
//! # Add verses to a dataset directory, from a file or a topical verse page
//! amen --dataset-dir ./data import --input new-verses.json
//! amen --dataset-dir ./data import --url https://example.com/hope-verses/
//! ```

use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::output::FormatArg;

#[derive(Parser, Clone, Debug)]
#[command(name = "amen")]
#[command(version)]
#[command(about = "amen - daily Bible verses in English, Amharic and Finnish", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Dataset directory holding en.json, am.json and fi.json (built-in data if unset)
    #[arg(
        long = "dataset-dir",
        global = true,
        value_name = "DIR",
        env = "AMEN_DATASET_DIR"
    )]
    pub dataset_dir: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to bind (overrides `AMEN_BIND`)
        #[arg(long)]
        bind: Option<IpAddr>,
        /// Port to listen on (overrides `AMEN_PORT`)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print a random verse, or one by id
    Verse {
        /// Language code (en, am, fi); anything else falls back to English
        #[arg(short, long, default_value = "en")]
        lang: String,
        /// Verse id; out-of-range values are clamped
        #[arg(long, allow_negative_numbers = true)]
        id: Option<i64>,
        #[command(flatten)]
        format: FormatArg,
    },

    /// Print today's blessing, or a fresh verse if none was accepted today
    Today {
        /// Language code (en, am, fi)
        #[arg(short, long, default_value = "en")]
        lang: String,
        #[command(flatten)]
        format: FormatArg,
    },

    /// Accept a verse as today's blessing
    Amen {
        /// Verse id to lock for today
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
        /// Language the blessing is shown in
        #[arg(short, long, default_value = "en")]
        lang: String,
        /// Replace a blessing already accepted today
        #[arg(long)]
        force: bool,
    },

    /// Print the number of verses
    Count,

    /// Import verses into the dataset directory, fetching their translations
    Import {
        #[command(flatten)]
        source: ImportSource,
        /// Pause between verses in milliseconds
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,
        /// Only report which candidates are new; no translation fetches, no writes
        #[arg(long)]
        dry_run: bool,
    },
}

/// Where `import` reads its English candidates from.
#[derive(Args, Clone, Debug)]
#[group(required = true, multiple = false)]
pub struct ImportSource {
    /// JSON array of {"text", "reference"} English candidates
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Page to scrape English candidates from
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,
}
