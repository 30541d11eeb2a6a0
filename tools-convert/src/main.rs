mod cli;
mod config;
mod excel;
mod tools;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::*;

use crate::cli::Cli;
use crate::config::ConvertConfig;
use crate::tools::ConversionSummary;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ConvertConfig::from(Cli::parse());
    report(&config, tools::convert(&config))
}

/// Print the outcome once and map it to the process exit status
fn report(config: &ConvertConfig, result: Result<ConversionSummary>) -> ExitCode {
    match result {
        Ok(summary) => {
            println!(
                "{} {} records in {} categories saved to {}",
                "Done:".bright_green().bold(),
                summary.record_count,
                summary.category_count,
                config.output_path().display().to_string().cyan()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Conversion failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
