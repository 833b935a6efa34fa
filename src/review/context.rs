//! Run-scoped state shared by every loop iteration

use crate::config::Config;
use crate::error::Result;
use crate::platform::{ApiClient, ClientOptions, GitHubService, PullRequestApi};
use crate::repo;
use crate::types::{Credentials, RepositoryIdentity};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Identity and API access for one invocation
///
/// Built once before the loop starts and only read afterwards; nothing
/// scoped to a single pull request lives here.
pub struct RunContext {
    /// The repository under review
    pub identity: RepositoryIdentity,
    /// Hosting API
    pub api: Box<dyn PullRequestApi>,
    /// Invocation directory; clones go under `pull-requests/` inside it
    pub base_dir: PathBuf,
}

impl RunContext {
    /// Create a context from already-resolved parts
    pub fn new(
        identity: RepositoryIdentity,
        api: Box<dyn PullRequestApi>,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            identity,
            api,
            base_dir: base_dir.into(),
        }
    }

    /// Resolve the repository identity, then authenticate against the API
    ///
    /// `credentials` is called once, after the identity is known, so an
    /// interactive prompt can offer the owner as the default login.
    pub fn connect(
        base_dir: &Path,
        config: &Config,
        credentials: impl FnOnce(&RepositoryIdentity) -> Result<Credentials>,
    ) -> Result<Self> {
        let identity = repo::resolve(base_dir, &config.remote, &config.host)?;
        let credentials = credentials(&identity)?;

        let client = ApiClient::new(ClientOptions {
            base_url: config.api_url.clone(),
            credentials,
            proxy: config.proxy.clone(),
        })?;
        debug!(api = client.base_url(), %identity, "connected");

        Ok(Self::new(
            identity,
            Box::new(GitHubService::new(client)),
            base_dir,
        ))
    }
}
