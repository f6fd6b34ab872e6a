use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "posture",
    version,
    about = "Risk-weighted Kubernetes security posture scoring"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score framework reports
    Score(ScoreCommand),
    /// Print the risk weight of each resource
    Weigh(WeighCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// JSON file with one framework report or a list of them
    pub input: PathBuf,
    /// Directory holding posture.toml and the weight tables
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct WeighCommand {
    /// JSON file with one resource or a list of them
    pub input: PathBuf,
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
