//! Review command - review open pull requests one at a time

use crate::cli::CliProgress;
use crate::cli::prompt::{TerminalPrompter, credentials};
use crate::cli::style::Stylize;
use anstream::println;
use pr_review::checkout::ProcessRunner;
use pr_review::config::{CommandSpec, Config};
use pr_review::error::{Error, Result};
use pr_review::review::{ReviewOutcome, RunContext, run_review_loop};
use std::fs;
use std::path::Path;

/// Command-line overrides for the review command
#[derive(Debug, Clone, Default)]
pub struct ReviewOptions {
    /// Remote name override
    pub remote: Option<String>,
    /// API base URL override
    pub api_url: Option<String>,
    /// Install command override
    pub install: Option<String>,
    /// Test command override
    pub test: Option<String>,
    /// Explicit config file
    pub config: Option<std::path::PathBuf>,
}

/// Load the config file and apply CLI overrides on top
fn load_config(base_dir: &Path, options: &ReviewOptions) -> Result<Config> {
    let mut config = match &options.config {
        Some(file) => Config::from_file(file)?,
        None => Config::load(base_dir)?,
    };

    if let Some(remote) = &options.remote {
        config.remote.clone_from(remote);
    }
    if let Some(api_url) = &options.api_url {
        config.api_url.clone_from(api_url);
    }
    if let Some(install) = &options.install {
        config.commands.install = CommandSpec::parse(install)?;
    }
    if let Some(test) = &options.test {
        config.commands.test = CommandSpec::parse(test)?;
    }

    Ok(config.with_env_proxy())
}

/// Run the review command
#[allow(clippy::future_not_send)]
pub async fn run_review(path: &Path, options: ReviewOptions) -> Result<()> {
    if !path.is_dir() {
        return Err(Error::Config(format!(
            "{} is not a directory",
            path.display()
        )));
    }
    let base_dir = fs::canonicalize(path)?;
    let config = load_config(&base_dir, &options)?;

    let ctx = RunContext::connect(&base_dir, &config, credentials)?;
    println!(
        "{} {}",
        "Reviewing".emphasis(),
        ctx.identity.to_string().accent()
    );

    let runner = ProcessRunner::new(config.commands.clone());
    let progress = CliProgress::new();
    let summary = run_review_loop(&ctx, &TerminalPrompter, &runner, &progress).await?;

    match summary.outcome {
        ReviewOutcome::NoPullRequests => {
            println!("{}", "No pull requests found. Exiting".muted());
        }
        ReviewOutcome::Cancelled => println!("{}", "cancelled.".muted()),
    }
    if summary.reviewed > 0 {
        println!(
            "Reviewed {} pull request(s), merged {}",
            summary.reviewed.accent(),
            summary.merged.len().accent()
        );
    }

    Ok(())
}
