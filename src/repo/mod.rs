//! Repository identity resolution
//!
//! Works out which hosted repository is being reviewed by reading the
//! local git configuration.

mod remote;

pub use remote::parse_remote_url;

use crate::error::{Error, Result};
use crate::types::RepositoryIdentity;
use std::path::Path;
use tracing::debug;

/// Read the URL configured for `remote_name` in the repository at `path`
pub fn remote_url(path: &Path, remote_name: &str) -> Result<String> {
    let repo = gix::discover(path).map_err(|e| {
        debug!(error = %e, "git discovery failed");
        Error::NotARepository(path.to_path_buf())
    })?;

    let key = format!("remote.{remote_name}.url");
    let url = repo
        .config_snapshot()
        .string(key.as_str())
        .map(|value| value.to_string())
        .ok_or_else(|| Error::RemoteNotFound(remote_name.to_string()))?;

    debug!(remote = remote_name, %url, "found remote");
    Ok(url)
}

/// Resolve the repository identity from the remote in `path`
///
/// The remote must exist and reference `host`.
pub fn resolve(path: &Path, remote_name: &str, host: &str) -> Result<RepositoryIdentity> {
    let url = remote_url(path, remote_name)?;
    let identity = parse_remote_url(&url, host)?;
    debug!(owner = %identity.owner, name = %identity.name, "resolved repository");
    Ok(identity)
}
