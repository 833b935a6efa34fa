//! Credentials for the hosting API
//!
//! Credentials come from the environment when both variables are set, and
//! from an interactive prompt otherwise.

use crate::types::Credentials;

/// Variable holding the login name
pub const USER_VAR: &str = "GITHUB_USER";

/// Variable holding the password or token
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Source of credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Entered at the terminal
    Prompt,
    /// Read from environment variables
    EnvVar,
}

/// Build credentials from environment variables looked up through `lookup`
///
/// Returns `None` unless both the user and token variables are non-empty.
pub fn credentials_from(lookup: impl Fn(&str) -> Option<String>) -> Option<Credentials> {
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
    Some(Credentials {
        identity: non_empty(USER_VAR)?,
        secret: non_empty(TOKEN_VAR)?,
    })
}

/// Build credentials from the process environment
pub fn credentials_from_env() -> Option<Credentials> {
    credentials_from(|name| std::env::var(name).ok())
}
