//! `ballot` — replay a ballot session against an in-memory ledger.

mod config;
mod error;
mod session;

use std::path::{Path, PathBuf};

use anyhow::Context;
use ballot_utils::{init_logging, LogFormat};
use clap::Parser;

use crate::config::SessionConfig;
use crate::session::ReplayReport;

#[derive(Parser)]
#[command(name = "ballot", about = "Weighted ballot session runner")]
struct Cli {
    /// Log format: "human" or "json". Defaults to the session's value.
    #[arg(long, env = "BALLOT_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    /// Defaults to the session's value; `RUST_LOG` overrides both.
    #[arg(long, env = "BALLOT_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Replay a session file and print the results.
    Run {
        /// Path to the TOML session file.
        session: PathBuf,

        /// Print the report as JSON instead of a table.
        #[arg(long)]
        json: bool,

        /// Stop at the first rejected operation.
        #[arg(long, env = "BALLOT_FAIL_FAST")]
        fail_fast: bool,
    },
    /// Parse and validate a session file without replaying it.
    Check {
        /// Path to the TOML session file.
        session: PathBuf,
    },
    /// Print an example session file.
    Template,
}

fn load(cli: &Cli, path: &Path) -> anyhow::Result<SessionConfig> {
    let config = SessionConfig::from_toml_file(path)
        .with_context(|| format!("loading session {}", path.display()))?;
    init_logging(
        cli.log_format.unwrap_or(config.log_format),
        cli.log_level.as_deref().unwrap_or(&config.log_level),
    );
    tracing::debug!("loaded session from {}", path.display());
    Ok(config)
}

fn print_table(report: &ReplayReport) {
    let results = &report.results;
    println!("chairperson: {}", results.chairperson);
    println!(
        "operations:  {} applied, {} rejected",
        report.applied,
        report.rejected.len()
    );
    for rejection in &report.rejected {
        println!(
            "  #{:<4} {}: {}",
            rejection.step, rejection.operation, rejection.reason
        );
    }
    println!();
    println!("{:>3}  {:<32}  {:>8}", "#", "proposal", "votes");
    for tally in &results.proposals {
        let marker = if tally.index == results.winning_proposal {
            " *"
        } else {
            ""
        };
        println!(
            "{:>3}  {:<32}  {:>8}{}",
            tally.index, tally.name, tally.vote_count, marker
        );
    }
    println!();
    println!(
        "winner: #{} {} ({} of {} votes)",
        results.winning_proposal,
        results.winner_name,
        results.proposals[results.winning_proposal].vote_count,
        results.total_votes
    );
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Template => {
            print!("{}", SessionConfig::template().to_toml_string()?);
        }
        Command::Check { session: path } => {
            let config = load(&cli, path)?;
            config.validate()?;
            println!(
                "{}: {} proposals, {} operations",
                path.display(),
                config.proposals.len(),
                config.operations.len()
            );
        }
        Command::Run {
            session: path,
            json,
            fail_fast,
        } => {
            let mut config = load(&cli, path)?;
            config.fail_fast |= *fail_fast;
            config.validate()?;
            let report = session::replay(&config)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_table(&report);
            }
        }
    }

    Ok(())
}
