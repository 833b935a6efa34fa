//! pr-review: review open pull requests one at a time
//!
//! Lists the open pull requests of the repository behind the local `origin`
//! remote, checks the chosen one out, installs its dependencies, runs its
//! tests and optionally merges it, looping until the maintainer cancels or
//! nothing is left to review.

pub mod auth;
pub mod checkout;
pub mod config;
pub mod error;
pub mod platform;
pub mod repo;
pub mod review;
pub mod types;
