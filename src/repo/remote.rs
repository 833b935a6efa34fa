//! Remote URL parsing

use crate::error::{Error, Result};
use crate::types::RepositoryIdentity;
use url::Url;

/// Extract owner and repository name from a remote URL
///
/// Accepts `https://`, `ssh://` and scp-style (`git@host:owner/repo.git`)
/// URLs. The host must match `host`; a trailing `.git` and trailing
/// slashes are dropped.
pub fn parse_remote_url(url: &str, host: &str) -> Result<RepositoryIdentity> {
    let unsupported = || Error::UnsupportedRemote(url.to_string());
    let trimmed = url.trim();

    let (remote_host, path) = if trimmed.contains("://") {
        let parsed = Url::parse(trimmed).map_err(|_| unsupported())?;
        let remote_host = parsed.host_str().ok_or_else(unsupported)?.to_string();
        (remote_host, parsed.path().to_string())
    } else {
        // scp-like syntax: [user@]host:path
        let (authority, path) = trimmed.split_once(':').ok_or_else(unsupported)?;
        let remote_host = authority.rsplit('@').next().unwrap_or(authority);
        (remote_host.to_string(), path.to_string())
    };

    if !remote_host.eq_ignore_ascii_case(host) {
        return Err(unsupported());
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let [owner, name] = segments.as_slice() else {
        return Err(unsupported());
    };

    let name = name.strip_suffix(".git").unwrap_or(*name);
    if name.is_empty() {
        return Err(unsupported());
    }

    Ok(RepositoryIdentity {
        owner: (*owner).to_string(),
        name: name.to_string(),
    })
}
