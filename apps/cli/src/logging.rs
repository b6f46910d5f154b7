//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so stdout only carries the build summary.
//! Without `-v`/`-q` the filter comes from `RUST_LOG`, falling back to `info`.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, LogFormatArg};

/// Logging behavior derived from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Explicit level, or `None` to read `RUST_LOG`.
    pub level: Option<LevelFilter>,
    pub format: LogFormatArg,
}

impl LogConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let level = if cli.quiet {
            Some(LevelFilter::ERROR)
        } else {
            match cli.verbose {
                0 => None,
                1 => Some(LevelFilter::DEBUG),
                _ => Some(LevelFilter::TRACE),
            }
        };
        Self {
            level,
            format: cli.log_format,
        }
    }

    fn filter(&self) -> EnvFilter {
        match self.level {
            Some(level) => EnvFilter::default().add_directive(level.into()),
            None => EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into())),
        }
    }
}

/// Install the global subscriber.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(config.filter());

    match config.format {
        LogFormatArg::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()?,
        LogFormatArg::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()?,
        LogFormatArg::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}
