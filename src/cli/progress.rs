//! Terminal progress output for the review loop

use crate::cli::style::{Stylize, arrow, check, spinner_style};
use anstream::println;
use async_trait::async_trait;
use indicatif::ProgressBar;
use pr_review::review::{ReviewEvent, ReviewProgress};
use std::sync::Mutex;
use std::time::Duration;

/// Prints review events and spins while pull requests are fetched
#[derive(Default)]
pub struct CliProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create a progress printer
    pub fn new() -> Self {
        Self::default()
    }

    fn start_spinner(&self, message: String) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(80));
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(spinner);
        }
    }

    fn stop_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(spinner) = slot.take()
        {
            spinner.finish_and_clear();
        }
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.stop_spinner();
    }
}

#[async_trait]
impl ReviewProgress for CliProgress {
    async fn on_event(&self, event: ReviewEvent<'_>) {
        match event {
            ReviewEvent::Listing { repo } => {
                self.start_spinner(format!(
                    "Fetching open pull requests for {}...",
                    repo.emphasis()
                ));
            }
            ReviewEvent::Listed { count } => {
                self.stop_spinner();
                if count > 0 {
                    println!(
                        "{} {} open pull request(s)",
                        check(),
                        count.accent()
                    );
                }
            }
            ReviewEvent::ListingFailed => self.stop_spinner(),
            ReviewEvent::Cloning { pr, path } => {
                println!(
                    "{} Cloning {} from {} to {}",
                    arrow(),
                    pr.title.emphasis(),
                    pr.head_ref.accent(),
                    path.display()
                );
            }
            ReviewEvent::StepSucceeded(step) => {
                println!("{} {} succeeded", check(), step.emphasis());
            }
            ReviewEvent::Merged { pr, result } => {
                if result.merged {
                    let sha = result.sha.as_deref().unwrap_or("(no sha)");
                    println!(
                        "{} Merged #{}: {}",
                        check(),
                        pr.number.accent(),
                        sha.muted()
                    );
                } else {
                    let reason = result.message.as_deref().unwrap_or("no reason given");
                    println!(
                        "{}",
                        format!("#{} was not merged: {reason}", pr.number).warn()
                    );
                }
            }
            ReviewEvent::MergeSkipped { pr } => {
                println!("{}", format!("Left #{} open", pr.number).muted());
            }
        }
    }
}
