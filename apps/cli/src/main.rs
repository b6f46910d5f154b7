//! csv-to-anki command line entry point.

use clap::Parser;
use csv_to_anki::cli::{Cli, SummaryFormatArg};
use csv_to_anki::logging::{init_logging, LogConfig};
use csv_to_anki::{run, BuildConfig, BuildSummary};

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if let Err(error) = init_logging(&LogConfig::from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let exit_code = match execute(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn execute(cli: &Cli) -> anyhow::Result<()> {
    let config = BuildConfig::from_cli(cli)?;
    let summary = run(&config)?;
    print_summary(&summary, cli.summary)
}

fn print_summary(summary: &BuildSummary, format: SummaryFormatArg) -> anyhow::Result<()> {
    match format {
        SummaryFormatArg::Human => print!("{}", summary.to_human()),
        SummaryFormatArg::Json => println!("{}", summary.to_json()?),
    }
    Ok(())
}
