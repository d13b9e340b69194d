use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "readiness",
    version,
    about = "Readiness self-assessment scoring and reporting CLI"
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
    /// Score an answers file and render the readiness report
    Score(ScoreCommand),
    /// Print the questionnaire so answers can be collected
    Questions(QuestionsCommand),
    /// Check an answers file for missing or unknown question ids
    Check(CheckCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// JSON file mapping question ids to raw answers
    pub answers: PathBuf,

    /// Name to stamp on the report (defaults to "anonymous")
    #[arg(long)]
    pub name: Option<String>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Also write the downloadable <name>_report.json file
    #[arg(long)]
    pub export: bool,

    /// Directory for the exported report file
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Optional readiness.toml with weight/nudge overrides
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct QuestionsCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CheckCommand {
    /// JSON file mapping question ids to raw answers
    pub answers: PathBuf,
}
