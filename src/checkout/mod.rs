//! Checkout and build steps
//!
//! Clones a pull request's head branch into a deterministic directory and
//! runs the project's install and test commands inside it.

mod process;

pub use process::ProcessRunner;

use crate::error::Result;
use crate::types::{CheckoutResult, PullRequestSummary};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Directory (relative to the invocation directory) holding clones
pub const CLONE_ROOT: &str = "pull-requests";

/// Where pull request `number` is cloned under `base_dir`
pub fn clone_path(base_dir: &Path, number: u64) -> PathBuf {
    base_dir.join(CLONE_ROOT).join(number.to_string())
}

/// External steps of a review iteration
///
/// Every method runs to completion before returning; output streams go
/// straight to the terminal.
#[async_trait]
pub trait CheckoutRunner: Send + Sync {
    /// Clone the head branch of `pr` into [`clone_path`]
    async fn clone_pull_request(
        &self,
        pr: &PullRequestSummary,
        base_dir: &Path,
    ) -> Result<CheckoutResult>;

    /// Install dependencies inside `path`
    async fn install_dependencies(&self, path: &Path) -> Result<()>;

    /// Run the test suite inside `path`
    async fn run_tests(&self, path: &Path) -> Result<()>;
}
