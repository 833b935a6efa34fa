//! Child-process implementation of [`CheckoutRunner`]

use super::{CheckoutRunner, clone_path};
use crate::config::{CommandSpec, Commands};
use crate::error::{Error, ReviewStep, Result};
use crate::types::{CheckoutResult, PullRequestSummary};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Runs `git clone` and the configured install/test commands
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    git: String,
    commands: Commands,
}

impl ProcessRunner {
    /// Create a runner using `git` from `PATH`
    pub fn new(commands: Commands) -> Self {
        Self {
            git: "git".to_string(),
            commands,
        }
    }

    /// Use a different git executable
    #[must_use]
    pub fn with_git(self, git: impl Into<String>) -> Self {
        Self {
            git: git.into(),
            ..self
        }
    }
}

/// Run `program` with inherited stdio and map a failed exit onto `step`
async fn run(step: ReviewStep, program: &str, args: &[String], cwd: Option<&Path>) -> Result<()> {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    debug!(%step, program, ?args, cwd = ?cwd, "starting process");
    let status = command.status().await.map_err(|source| Error::Spawn {
        step,
        program: program.to_string(),
        source,
    })?;
    debug!(%step, code = ?status.code(), "process exited");

    if status.success() {
        Ok(())
    } else {
        Err(Error::Process {
            step,
            code: status.code(),
        })
    }
}

/// Arguments for `git clone`; options come before `--` so the URL and
/// path are always positional.
fn clone_args(pr: &PullRequestSummary, local_path: &Path) -> Vec<String> {
    vec![
        "clone".to_string(),
        "-b".to_string(),
        pr.head_ref.clone(),
        "--".to_string(),
        pr.head_clone_url.clone(),
        local_path.to_string_lossy().into_owned(),
    ]
}

async fn run_spec(step: ReviewStep, spec: &CommandSpec, cwd: &Path) -> Result<()> {
    run(step, spec.program(), spec.args(), Some(cwd)).await
}

#[async_trait]
impl CheckoutRunner for ProcessRunner {
    async fn clone_pull_request(
        &self,
        pr: &PullRequestSummary,
        base_dir: &Path,
    ) -> Result<CheckoutResult> {
        let local_path = clone_path(base_dir, pr.number);

        // An earlier run may have left this clone behind for inspection
        if local_path.exists() {
            return Err(Error::CloneTargetExists(local_path));
        }

        let args = clone_args(pr, &local_path);
        run(ReviewStep::Clone, &self.git, &args, None).await?;

        Ok(CheckoutResult {
            pull_request: pr.clone(),
            local_path,
            branch: pr.head_ref.clone(),
        })
    }

    async fn install_dependencies(&self, path: &Path) -> Result<()> {
        run_spec(ReviewStep::InstallDependencies, &self.commands.install, path).await
    }

    async fn run_tests(&self, path: &Path) -> Result<()> {
        run_spec(ReviewStep::RunTests, &self.commands.test, path).await
    }
}
