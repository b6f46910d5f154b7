//! Validated build configuration.

use std::path::PathBuf;

use deck_core::CsvOptions;

use crate::cli::Cli;
use crate::error::ConfigError;

/// Package extension used when no output path is given.
pub const PACKAGE_EXTENSION: &str = "apkg";

/// Everything a build needs, checked and resolved.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub deck_name: String,
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub csv: CsvOptions,
    pub media: Vec<PathBuf>,
    pub language: Option<String>,
    pub dry_run: bool,
}

impl BuildConfig {
    /// Create a config with default CSV options and output path.
    pub fn new(deck_name: impl Into<String>, inputs: Vec<PathBuf>) -> Result<Self, ConfigError> {
        let deck_name = deck_name.into();
        validate_inputs(&deck_name, &inputs)?;
        Ok(Self {
            output: default_output(&deck_name),
            deck_name,
            inputs,
            csv: CsvOptions::default(),
            media: Vec::new(),
            language: None,
            dry_run: false,
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        validate_inputs(&cli.name, &cli.input)?;

        let delimiter = ascii_byte("delimiter", cli.delimiter)?;
        let quote = ascii_byte("quote", cli.quote)?;
        if delimiter == quote {
            return Err(ConfigError::SameDelimiterAndQuote(cli.delimiter));
        }

        Ok(Self {
            deck_name: cli.name.clone(),
            inputs: cli.input.clone(),
            output: cli
                .output
                .clone()
                .unwrap_or_else(|| default_output(&cli.name)),
            csv: CsvOptions { delimiter, quote },
            media: cli.media.clone(),
            language: cli.language.clone(),
            dry_run: cli.dry_run,
        })
    }
}

fn validate_inputs(deck_name: &str, inputs: &[PathBuf]) -> Result<(), ConfigError> {
    if deck_name.trim().is_empty() {
        return Err(ConfigError::EmptyDeckName);
    }
    if inputs.is_empty() {
        return Err(ConfigError::NoInputs);
    }
    Ok(())
}

fn default_output(deck_name: &str) -> PathBuf {
    PathBuf::from(format!("{deck_name}.{PACKAGE_EXTENSION}"))
}

fn ascii_byte(which: &'static str, value: char) -> Result<u8, ConfigError> {
    if value.is_ascii() {
        Ok(value as u8)
    } else {
        Err(ConfigError::NonAsciiChar { which, value })
    }
}
