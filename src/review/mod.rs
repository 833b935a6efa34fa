//! Review-and-merge workflow
//!
//! Sequences identity resolution, authentication and the review loop:
//! list, select, clone, install, test, confirm, merge, and back to list.

mod context;
mod progress;
mod prompt;
mod workflow;

pub use context::RunContext;
pub use progress::{NoopProgress, ReviewEvent, ReviewProgress};
pub use prompt::{
    CANCEL_LABEL, MERGE_PROMPT, Prompter, choice_label, menu_items, selection_from_index,
};
pub use workflow::{ReviewOutcome, ReviewSummary, merge_target, run_review_loop};
