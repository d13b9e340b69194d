mod answers;
mod catalog;
mod cli;
mod config;
mod error;
mod report;
mod score;
mod types;

use crate::error::ReadinessError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, ReadinessError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let catalog = config::load_catalog(cmd.config.as_deref())?;
            let responses = answers::load_answers(&cmd.answers)?;

            let unanswered = catalog
                .questions
                .iter()
                .filter(|question| !responses.contains_key(question.id))
                .count();
            if unanswered > 0 {
                eprintln!("warning: {unanswered} question(s) unanswered; scoring with neutral defaults");
            }

            let assessment = score::score(&catalog, &responses);
            let report = types::report::Report::new(cmd.name.as_deref(), &assessment);

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&report, output_format)?;
            println!("{rendered}");

            if cmd.export {
                let path =
                    report::export::write_report(&cmd.out_dir, cmd.name.as_deref(), &report)?;
                println!("report file: {}", path.display());
            }

            if unanswered > 0 {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Questions(cmd) => {
            let catalog = catalog::Catalog::builtin();
            match cmd.format {
                cli::ReportFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&catalog.questions)?);
                }
                cli::ReportFormat::Md => {
                    println!("# Readiness Questionnaire\n");
                    for question in &catalog.questions {
                        println!("- {} [{}] {}", question.id, question.dimension, question.prompt);
                        if !question.choices.is_empty() {
                            println!("  choices: {}", question.choices.join(", "));
                        }
                    }
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let catalog = catalog::Catalog::builtin();
            let responses = answers::load_answers(&cmd.answers)?;

            let mut findings = 0;
            for question in &catalog.questions {
                if !responses.contains_key(question.id) {
                    findings += 1;
                    println!("[WARN] missing_answer {}: {}", question.id, question.prompt);
                }
            }
            for id in responses.keys() {
                if !catalog.questions.iter().any(|question| question.id == id) {
                    findings += 1;
                    println!("[WARN] unknown_id {id}: not part of the questionnaire");
                }
            }

            if findings == 0 {
                println!("check: no findings");
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn main() {
    match run() {
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
