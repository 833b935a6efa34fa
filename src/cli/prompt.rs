//! Interactive terminal prompts

use dialoguer::{Confirm, Input, Password, Select};
use pr_review::auth::{AuthSource, credentials_from_env};
use pr_review::error::{Error, Result};
use pr_review::review::{MERGE_PROMPT, Prompter, menu_items, selection_from_index};
use pr_review::types::{Credentials, PullRequestSummary, RepositoryIdentity, Selection};
use tracing::debug;

/// Collect credentials, preferring the environment over prompting
///
/// The login prompt defaults to the repository owner.
pub fn credentials(identity: &RepositoryIdentity) -> Result<Credentials> {
    if let Some(credentials) = credentials_from_env() {
        debug!(source = ?AuthSource::EnvVar, "using credentials");
        return Ok(credentials);
    }

    let login: String = Input::new()
        .with_prompt("GitHub username")
        .default(identity.owner.clone())
        .interact_text()
        .map_err(|e| Error::Prompt(format!("Failed to read username: {e}")))?;
    let secret = Password::new()
        .with_prompt("GitHub password or token")
        .interact()
        .map_err(|e| Error::Prompt(format!("Failed to read password: {e}")))?;

    debug!(source = ?AuthSource::Prompt, "using credentials");
    Ok(Credentials {
        identity: login,
        secret,
    })
}

/// [`Prompter`] backed by dialoguer widgets
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select_pull_request(&self, pull_requests: &[PullRequestSummary]) -> Result<Selection> {
        let index = Select::new()
            .with_prompt("Select a pull request")
            .items(&menu_items(pull_requests))
            .default(0)
            .interact_opt()
            .map_err(|e| Error::Prompt(format!("Failed to read selection: {e}")))?;
        Ok(selection_from_index(pull_requests, index))
    }

    fn confirm_merge(&self, _pr: &PullRequestSummary) -> Result<bool> {
        Confirm::new()
            .with_prompt(MERGE_PROMPT)
            .default(false)
            .interact()
            .map_err(|e| Error::Prompt(format!("Failed to read confirmation: {e}")))
    }
}
