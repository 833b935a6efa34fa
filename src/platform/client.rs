//! Authenticated JSON client for the hosting API

use crate::error::{Error, Result};
use crate::types::Credentials;
use reqwest::header::{ACCEPT, CONTENT_LENGTH};
use reqwest::{Client, Method, Proxy};
use serde_json::Value;
use tracing::debug;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("pr-review/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`ApiClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API base URL, e.g. `https://api.github.com`
    pub base_url: String,
    /// Credentials attached to every request
    pub credentials: Credentials,
    /// Outbound proxy, if any
    pub proxy: Option<String>,
}

/// Issues authenticated `GET`/`PUT` requests and decodes JSON bodies
///
/// Holds only connection configuration, so one instance serves the whole
/// run.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

impl ApiClient {
    /// Create a new client
    pub fn new(options: ClientOptions) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        builder = match options.proxy.as_deref() {
            Some(proxy) => {
                debug!(proxy, "using outbound proxy");
                let proxy = Proxy::all(proxy)
                    .map_err(|e| Error::Config(format!("invalid proxy '{proxy}': {e}")))?;
                builder.proxy(proxy)
            }
            None => builder.no_proxy(),
        };

        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            credentials: options.credentials,
        })
    }

    /// API base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Authenticated read
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.request(Method::GET, path).await
    }

    /// Authenticated mutation with an empty body
    pub async fn put(&self, path: &str) -> Result<Value> {
        self.request(Method::PUT, path).await
    }

    async fn request(&self, method: Method, path: &str) -> Result<Value> {
        let url = format!("{}{path}", self.base_url);
        debug!(%method, path, "sending API request");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .basic_auth(&self.credentials.identity, Some(&self.credentials.secret))
            .header(ACCEPT, "application/vnd.github+json");
        if method == Method::PUT {
            request = request.header(CONTENT_LENGTH, "0");
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(%method, path, status = status.as_u16(), "API response");

        if !status.is_success() {
            return Err(Error::ApiStatus {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| Error::InvalidResponse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}
