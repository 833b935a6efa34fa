//! Scripted prompter and runner doubles

#![allow(dead_code)]

use async_trait::async_trait;
use pr_review::checkout::{CheckoutRunner, clone_path};
use pr_review::error::{Error, ReviewStep, Result};
use pr_review::review::{Prompter, ReviewEvent, ReviewProgress, selection_from_index};
use pr_review::types::{CheckoutResult, PullRequestSummary, Selection};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A scripted answer to the pull request menu
#[derive(Debug, Clone, Copy)]
pub enum Pick {
    /// Choose the entry at this index
    Index(usize),
    /// Choose the cancel entry
    Cancel,
}

/// Prompter that replays scripted answers
///
/// Running out of answers cancels the menu and declines merges, so a test
/// can never loop forever.
pub struct ScriptedPrompter {
    picks: Mutex<VecDeque<Pick>>,
    confirmations: Mutex<VecDeque<bool>>,
    menus_shown: Mutex<Vec<Vec<u64>>>,
    confirm_calls: Mutex<Vec<u64>>,
}

impl ScriptedPrompter {
    pub fn new(picks: &[Pick], confirmations: &[bool]) -> Self {
        Self {
            picks: Mutex::new(picks.iter().copied().collect()),
            confirmations: Mutex::new(confirmations.iter().copied().collect()),
            menus_shown: Mutex::new(Vec::new()),
            confirm_calls: Mutex::new(Vec::new()),
        }
    }

    /// PR numbers offered in each menu shown so far
    pub fn menus_shown(&self) -> Vec<Vec<u64>> {
        self.menus_shown.lock().unwrap().clone()
    }

    /// PR numbers the merge confirmation was asked for
    pub fn confirm_calls(&self) -> Vec<u64> {
        self.confirm_calls.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn select_pull_request(&self, pull_requests: &[PullRequestSummary]) -> Result<Selection> {
        self.menus_shown
            .lock()
            .unwrap()
            .push(pull_requests.iter().map(|pr| pr.number).collect());

        let pick = self.picks.lock().unwrap().pop_front().unwrap_or(Pick::Cancel);
        let index = match pick {
            Pick::Index(i) => i,
            Pick::Cancel => pull_requests.len(),
        };
        Ok(selection_from_index(pull_requests, Some(index)))
    }

    fn confirm_merge(&self, pr: &PullRequestSummary) -> Result<bool> {
        self.confirm_calls.lock().unwrap().push(pr.number);
        Ok(self.confirmations.lock().unwrap().pop_front().unwrap_or(false))
    }
}

/// Runner that records steps instead of starting processes
pub struct ScriptedRunner {
    calls: Mutex<Vec<(ReviewStep, PathBuf)>>,
    failures: Mutex<HashMap<ReviewStep, i32>>,
}

impl Default for ScriptedRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(HashMap::new()),
        }
    }

    /// Make `step` exit with `code`
    pub fn fail_step(&self, step: ReviewStep, code: i32) {
        self.failures.lock().unwrap().insert(step, code);
    }

    /// Steps executed so far, with the path each ran against
    pub fn calls(&self) -> Vec<(ReviewStep, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }

    /// Steps executed so far
    pub fn steps(&self) -> Vec<ReviewStep> {
        self.calls().into_iter().map(|(step, _)| step).collect()
    }

    fn record(&self, step: ReviewStep, path: &Path) -> Result<()> {
        self.calls.lock().unwrap().push((step, path.to_path_buf()));
        match self.failures.lock().unwrap().get(&step) {
            Some(code) => Err(Error::Process {
                step,
                code: Some(*code),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CheckoutRunner for ScriptedRunner {
    async fn clone_pull_request(
        &self,
        pr: &PullRequestSummary,
        base_dir: &Path,
    ) -> Result<CheckoutResult> {
        let local_path = clone_path(base_dir, pr.number);
        self.record(ReviewStep::Clone, &local_path)?;
        Ok(CheckoutResult {
            pull_request: pr.clone(),
            local_path,
            branch: pr.head_ref.clone(),
        })
    }

    async fn install_dependencies(&self, path: &Path) -> Result<()> {
        self.record(ReviewStep::InstallDependencies, path)
    }

    async fn run_tests(&self, path: &Path) -> Result<()> {
        self.record(ReviewStep::RunTests, path)
    }
}

/// Progress sink that records event names in order
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<&'static str>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReviewProgress for RecordingProgress {
    async fn on_event(&self, event: ReviewEvent<'_>) {
        let name = match event {
            ReviewEvent::Listing { .. } => "listing",
            ReviewEvent::Listed { .. } => "listed",
            ReviewEvent::ListingFailed => "listing_failed",
            ReviewEvent::Cloning { .. } => "cloning",
            ReviewEvent::StepSucceeded(_) => "step_succeeded",
            ReviewEvent::Merged { .. } => "merged",
            ReviewEvent::MergeSkipped { .. } => "merge_skipped",
        };
        self.events.lock().unwrap().push(name);
    }
}
