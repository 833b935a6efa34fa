//! Run configuration
//!
//! Settings come from three layers: built-in defaults, an optional
//! `.pr-review.toml` in the invocation directory, and CLI overrides applied
//! by the caller on top of the loaded value.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// File name looked up in the invocation directory
pub const CONFIG_FILE: &str = ".pr-review.toml";

/// Default hosted API base
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default hosting domain the remote must reference
pub const DEFAULT_HOST: &str = "github.com";

/// Default remote name
pub const DEFAULT_REMOTE: &str = "origin";

/// Environment variables consulted for an outbound proxy, in order
const PROXY_VARS: [&str; 4] = ["HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"];

/// A program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    /// Build a command from a program and its arguments
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }

    /// Parse a whitespace-separated command line such as `cargo test --all`
    pub fn parse(line: &str) -> Result<Self> {
        Self::try_from(line.split_whitespace().map(String::from).collect::<Vec<_>>())
    }

    /// Program to execute
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl TryFrom<Vec<String>> for CommandSpec {
    type Error = Error;

    fn try_from(mut parts: Vec<String>) -> Result<Self> {
        if parts.is_empty() {
            return Err(Error::Config("command must not be empty".to_string()));
        }
        let program = parts.remove(0);
        Ok(Self {
            program,
            args: parts,
        })
    }
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Commands run inside a fresh checkout
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Commands {
    /// Dependency installation command
    #[serde(default = "default_install")]
    pub install: CommandSpec,
    /// Test command
    #[serde(default = "default_test")]
    pub test: CommandSpec,
}

fn default_install() -> CommandSpec {
    CommandSpec::new("npm", &["install"])
}

fn default_test() -> CommandSpec {
    CommandSpec::new("npm", &["test"])
}

impl Default for Commands {
    fn default() -> Self {
        Self {
            install: default_install(),
            test: default_test(),
        }
    }
}

/// Effective configuration for one run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Remote whose URL identifies the repository
    pub remote: String,
    /// Hosting domain the remote must reference
    pub host: String,
    /// API base URL
    pub api_url: String,
    /// Install/test commands
    pub commands: Commands,
    /// Outbound proxy; never read from the file
    #[serde(skip)]
    pub proxy: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_string(),
            host: DEFAULT_HOST.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            commands: Commands::default(),
            proxy: None,
        }
    }
}

impl Config {
    /// Load `.pr-review.toml` from `dir`, falling back to defaults when absent
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Load an explicit config file, which must exist
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        let config = Self::from_toml(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Set the proxy from the process environment
    #[must_use]
    pub fn with_env_proxy(self) -> Self {
        let proxy = proxy_from(|name| std::env::var(name).ok());
        Self { proxy, ..self }
    }
}

/// Pick the first non-empty proxy variable using `lookup`
pub fn proxy_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    PROXY_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
