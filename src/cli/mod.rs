//! CLI command implementations

mod progress;
mod prompt;
mod review;
pub mod style;

pub use progress::CliProgress;
pub use review::{ReviewOptions, run_review};
