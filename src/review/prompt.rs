//! Maintainer decisions
//!
//! The workflow asks exactly two kinds of questions: pick one pull request
//! (or cancel), and confirm a merge. Terminal and scripted front ends both
//! implement [`Prompter`].

use crate::error::Result;
use crate::types::{PullRequestSummary, Selection};

/// Label of the trailing cancel entry in the pull request menu
pub const CANCEL_LABEL: &str = "cancel";

/// Question asked before merging
pub const MERGE_PROMPT: &str = "Would you like to merge now?";

/// Front end for the maintainer's choices
pub trait Prompter: Send + Sync {
    /// Pick one pull request from a non-empty list, or cancel
    fn select_pull_request(&self, pull_requests: &[PullRequestSummary]) -> Result<Selection>;

    /// Ask whether to merge `pr`; answering with the default means no
    fn confirm_merge(&self, pr: &PullRequestSummary) -> Result<bool>;
}

/// Menu label for a pull request: `(<number>) <author>: <title>`
pub fn choice_label(pr: &PullRequestSummary) -> String {
    format!("({}) {}: {}", pr.number, pr.author_login, pr.title)
}

/// Menu entries for `pull_requests` followed by the cancel entry
pub fn menu_items(pull_requests: &[PullRequestSummary]) -> Vec<String> {
    pull_requests
        .iter()
        .map(choice_label)
        .chain(std::iter::once(CANCEL_LABEL.to_string()))
        .collect()
}

/// Map a menu index back to a selection
///
/// Any index that is not a pull request (the cancel entry, an out-of-range
/// index or no index at all) is a cancellation.
pub fn selection_from_index(
    pull_requests: &[PullRequestSummary],
    index: Option<usize>,
) -> Selection {
    index
        .and_then(|i| pull_requests.get(i))
        .map_or(Selection::Cancelled, |pr| {
            Selection::PullRequest(pr.clone())
        })
}
