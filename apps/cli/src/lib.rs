//! Convert CSV files into an Anki deck package.
//!
//! The pipeline is linear: arguments are validated into a [`BuildConfig`],
//! every input is classified and read into a [`DeckPlan`], and the plan is
//! written as an `.apkg` package.

pub mod build;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod package;
pub mod summary;

pub use build::{collect, DeckPlan};
pub use config::BuildConfig;
pub use summary::BuildSummary;

use tracing::info;

/// Run a build and report what was done.
pub fn run(config: &BuildConfig) -> anyhow::Result<BuildSummary> {
    let plan = collect(config)?;

    if config.dry_run {
        info!(notes = plan.note_count(), "dry run, skipping package write");
        return Ok(BuildSummary::new(&plan, None));
    }

    package::write_package(&plan, &config.output, &config.media)?;
    Ok(BuildSummary::new(&plan, Some(config.output.clone())))
}
