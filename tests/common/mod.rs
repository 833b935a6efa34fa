//! Shared test utilities

#![allow(dead_code)]

mod mock_platform;
mod scripted;

pub use mock_platform::{MergeCall, MockPlatformService, SharedMock};
pub use scripted::{Pick, RecordingProgress, ScriptedPrompter, ScriptedRunner};

use pr_review::review::RunContext;
use pr_review::types::{PullRequestSummary, RepositoryIdentity};
use std::path::Path;
use std::process::Command;
use std::sync::Arc;

/// The repository the tests review
pub fn base_identity() -> RepositoryIdentity {
    RepositoryIdentity {
        owner: "maintainer".to_string(),
        name: "project".to_string(),
    }
}

/// A run context for `base_identity()` backed by `mock`
pub fn context(mock: &Arc<MockPlatformService>, base_dir: &Path) -> RunContext {
    RunContext::new(
        base_identity(),
        Box::new(SharedMock(Arc::clone(mock))),
        base_dir,
    )
}

/// The pull request from the reference scenarios: #42 "Fix bug" by alice
pub fn alice_pr() -> PullRequestSummary {
    PullRequestSummary {
        number: 42,
        title: "Fix bug".to_string(),
        author_login: "alice".to_string(),
        head_ref: "fix-42".to_string(),
        head_clone_url: "https://example.com/alice/repo.git".to_string(),
        head_owner_login: "alice".to_string(),
        head_repo_name: "repo".to_string(),
        html_url: None,
    }
}

/// A pull request opened from `author`'s fork
pub fn make_pr(number: u64, author: &str, title: &str) -> PullRequestSummary {
    PullRequestSummary {
        number,
        title: title.to_string(),
        author_login: author.to_string(),
        head_ref: format!("branch-{number}"),
        head_clone_url: format!("https://github.com/{author}/project.git"),
        head_owner_login: author.to_string(),
        head_repo_name: "project".to_string(),
        html_url: Some(format!("https://github.com/maintainer/project/pull/{number}")),
    }
}

/// Run git in `dir`, panicking on failure
pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(["-c", "user.name=Test", "-c", "user.email=test@example.com"])
        .args(args)
        .current_dir(dir)
        .status()
        .expect("git should be installed");
    assert!(status.success(), "git {args:?} failed");
}

/// Initialise a git repository in `dir` with `origin` pointing at `url`
pub fn init_repo_with_origin(dir: &Path, url: &str) {
    git(dir, &["init", "--quiet"]);
    git(dir, &["remote", "add", "origin", url]);
}
