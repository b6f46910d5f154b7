//! Command line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "csv-to-anki",
    version,
    about = "Convert CSV files into a deck of flashcards for Anki",
    long_about = "Convert CSV files into a deck of flashcards for Anki.\n\n\
                  Files whose name contains \"cloze\" become cloze cards, files whose\n\
                  name contains \"verb\" become conjugation tables (the first row lists\n\
                  the six subject pronouns), any other CSV becomes basic two-sided cards."
)]
pub struct Cli {
    /// One or more CSV files.
    #[arg(short = 'i', long = "input", value_name = "FILE", num_args = 1.., required = true)]
    pub input: Vec<PathBuf>,

    /// Name of the generated deck.
    #[arg(short = 'n', long = "name")]
    pub name: String,

    /// Language of the cards. Accepted for compatibility, not used.
    #[arg(short = 'l', long = "language")]
    pub language: Option<String>,

    /// Package path (default: <NAME>.apkg in the current directory).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Field delimiter.
    #[arg(long, default_value = ";", env = "CSV_TO_ANKI_DELIMITER")]
    pub delimiter: char,

    /// Quote character.
    #[arg(long, default_value = "|", env = "CSV_TO_ANKI_QUOTE")]
    pub quote: char,

    /// Media files to bundle into the package.
    #[arg(long = "media", value_name = "FILE", num_args = 1..)]
    pub media: Vec<PathBuf>,

    /// Read and validate the files without writing a package.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Summary format printed on stdout.
    #[arg(long, value_enum, default_value = "human")]
    pub summary: SummaryFormatArg,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormatArg {
    Human,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
