//! Output format selection and verse rendering.

use amen_core::VerseResponse;
use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use is_terminal::IsTerminal;
use serde::Serialize;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default for terminals)
    #[default]
    Text,
    /// JSON (default for pipes)
    Json,
}

impl OutputFormat {
    /// `Text` for interactive terminals, `Json` for pipes and redirects.
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Text
        } else {
            Self::Json
        }
    }
}

#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatArg {
    /// Output format (text, json); defaults to text for terminals, json for pipes
    #[arg(short = 'f', long = "format", value_enum, env = "AMEN_OUTPUT_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(long, conflicts_with = "format")]
    pub json: bool,
}

impl FormatArg {
    pub fn resolve(&self) -> OutputFormat {
        if self.json {
            return OutputFormat::Json;
        }
        self.format.unwrap_or_else(OutputFormat::detect)
    }
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a verse as text: citation header, the resolved text, then the
/// other translations dimmed.
pub fn print_verse_text(verse: &VerseResponse) {
    println!(
        "{} {}",
        verse.citation().bold(),
        format!("(#{}, {})", verse.verse_id, verse.language).bright_black()
    );
    println!("{}", verse.text);
    for (language, text) in verse.translations.iter() {
        if language != verse.language {
            println!("  {} {}", format!("[{language}]").bright_black(), text.dimmed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shorthand_wins() {
        let arg = FormatArg {
            format: None,
            json: true,
        };
        assert_eq!(arg.resolve(), OutputFormat::Json);
    }

    #[test]
    fn test_explicit_format_is_kept() {
        let arg = FormatArg {
            format: Some(OutputFormat::Text),
            json: false,
        };
        assert_eq!(arg.resolve(), OutputFormat::Text);
    }
}
