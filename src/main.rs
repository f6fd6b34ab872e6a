mod cli;
mod config;
mod error;
mod input;
mod report;
mod score;
mod types;
mod workload;

use crate::error::PostureError;
use crate::score::ScoreEngine;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: cli::Cli) -> Result<i32, PostureError> {
    match cli.command {
        cli::Commands::Score(cmd) => {
            let engine = ScoreEngine::from_config_dir(cmd.config_dir.as_deref())?;
            let reports = input::load_reports(&cmd.input)?;
            let posture = report::PostureReport::new(engine.score_all(&reports));

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&posture, output_format)?;
            println!("{rendered}");

            if posture.has_unavailable() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Weigh(cmd) => {
            let engine = ScoreEngine::from_config_dir(cmd.config_dir.as_deref())?;
            let resources = input::load_resources(&cmd.input)?;
            for resource in &resources {
                println!(
                    "{}\t{}",
                    workload::resource_id(resource),
                    engine.weight(resource)
                );
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
