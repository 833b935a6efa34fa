//! pr-review - review, test and merge open pull requests one at a time

mod cli;

use crate::cli::style::Stylize;
use anstream::eprintln;
use clap::{ArgAction, Parser};
use cli::ReviewOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter
const LOG_ENV: &str = "PR_REVIEW_LOG";

#[derive(Parser)]
#[command(name = "pr-review")]
#[command(about = "Review, test and merge open GitHub pull requests one at a time")]
#[command(version)]
struct Cli {
    /// Path to the repository (defaults to current directory)
    #[arg(long)]
    path: Option<PathBuf>,

    /// Remote identifying the repository (default: origin)
    #[arg(long)]
    remote: Option<String>,

    /// API base URL (default: <https://api.github.com>)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Dependency installation command (default: "npm install")
    #[arg(long, value_name = "CMD")]
    install: Option<String>,

    /// Test command (default: "npm test")
    #[arg(long = "test", value_name = "CMD")]
    test_command: Option<String>,

    /// Config file (default: .pr-review.toml in the repository)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let path = cli.path.unwrap_or_else(|| PathBuf::from("."));
    let options = ReviewOptions {
        remote: cli.remote,
        api_url: cli.api_url,
        install: cli.install,
        test: cli.test_command,
        config: cli.config,
    };

    match cli::run_review(&path, options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".error());
            ExitCode::FAILURE
        }
    }
}
