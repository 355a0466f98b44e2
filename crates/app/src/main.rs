use std::process::ExitCode;

use clap::Parser;
use engine::SystemClock;

use crate::{
    cli::{Cli, Command},
    error::Result,
};

mod cli;
mod error;
mod input;
mod report;
mod settings;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = settings::load(&cli)?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(format!(
            "tally={level},engine={level}",
            level = settings.level
        ))
        .init();
    tracing::debug!(language = %settings.language, "settings loaded");

    let report = match &cli.command {
        Command::Energy(args) => report::energy(&settings, SystemClock, &args.records)?,
        Command::Cash(args) => report::cash(&settings, SystemClock, &args.records)?,
    };
    tracing::info!(
        records = report.records.len(),
        remaining = report.status.today_remaining,
        "report ready"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}
