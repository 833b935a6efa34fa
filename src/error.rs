//! Error types for pr-review

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A step of a review iteration that runs an external process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewStep {
    /// Cloning the pull request's head branch
    Clone,
    /// Installing the project's dependencies
    InstallDependencies,
    /// Running the project's test suite
    RunTests,
}

impl fmt::Display for ReviewStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clone => write!(f, "clone"),
            Self::InstallDependencies => write!(f, "installDependencies"),
            Self::RunTests => write!(f, "runTests"),
        }
    }
}

fn describe_exit(code: Option<&i32>) -> String {
    code.map_or_else(
        || "was terminated by a signal".to_string(),
        |c| format!("failed with exit code {c}"),
    )
}

/// Errors that can occur during a review session
#[derive(Error, Debug)]
pub enum Error {
    /// The invocation directory is not a git repository
    #[error("not a git repository: {}", .0.display())]
    NotARepository(PathBuf),

    /// The requested remote is not configured
    #[error("remote '{0}' not found")]
    RemoteNotFound(String),

    /// The remote does not point at the hosting platform
    #[error("remote url '{0}' does not reference a supported repository host")]
    UnsupportedRemote(String),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Connection-level HTTP failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API request {path} returned status {status}")]
    ApiStatus {
        /// HTTP status code
        status: u16,
        /// Request path
        path: String,
    },

    /// The API answered with a body that could not be decoded
    #[error("invalid response from {path}: {message}")]
    InvalidResponse {
        /// Request path
        path: String,
        /// Decoder message
        message: String,
    },

    /// An external process exited unsuccessfully
    #[error("{step} {}", describe_exit(.code.as_ref()))]
    Process {
        /// The failing step
        step: ReviewStep,
        /// Exit code, `None` when killed by a signal
        code: Option<i32>,
    },

    /// An external process could not be started
    #[error("{step} could not start '{program}': {source}")]
    Spawn {
        /// The failing step
        step: ReviewStep,
        /// Program that failed to start
        program: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The clone destination is already occupied
    #[error("clone failed: {} already exists", .0.display())]
    CloneTargetExists(PathBuf),

    /// Interactive prompt failure
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error came from talking to the remote API
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::ApiStatus { .. } | Self::InvalidResponse { .. }
        )
    }

    /// Whether this error means the local repository cannot be reviewed
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::NotARepository(_)
                | Self::RemoteNotFound(_)
                | Self::UnsupportedRemote(_)
                | Self::Config(_)
        )
    }

    /// The review step that failed, for process errors
    pub const fn failed_step(&self) -> Option<ReviewStep> {
        match self {
            Self::Process { step, .. } | Self::Spawn { step, .. } => Some(*step),
            Self::CloneTargetExists(_) => Some(ReviewStep::Clone),
            _ => None,
        }
    }
}

/// Result type alias for pr-review operations
pub type Result<T> = std::result::Result<T, Error>;
