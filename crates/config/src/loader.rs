//! Configuration loader for skeletonkey
//!
//! Sources are layered, later ones winning:
//! 1. `skeletonkey.json` (explicit path, else the working directory, else the
//!    user config directory)
//! 2. `SKELETONKEY_*` environment variables
//! 3. values set on the loader itself (CLI flags)

use crate::config::{Config, FileConfig};
use skeletonkey_core::{
    Error, Result, ResultExt, TenantId, CONFIG_FILENAME, DEFAULT_ENTRY_TTL,
    DEFAULT_REQUEST_TIMEOUT, SKELETONKEY_ENDPOINT_VAR, SKELETONKEY_TENANT_VAR,
    SKELETONKEY_TIMEOUT_VAR, SKELETONKEY_TTL_VAR,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Configuration loader that handles all startup configuration
pub struct ConfigLoader {
    config_file: Option<PathBuf>,
    search_defaults: bool,
    env: EnvLookup,
    endpoint: Option<String>,
    tenant: Option<String>,
    ttl: Option<Duration>,
    request_timeout: Option<Duration>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader that reads the process environment
    pub fn new() -> Self {
        Self {
            config_file: None,
            search_defaults: true,
            env: Box::new(|name| std::env::var(name).ok()),
            endpoint: None,
            tenant: None,
            ttl: None,
            request_timeout: None,
        }
    }

    /// Read this file instead of searching the default locations
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Skip the default config file search
    pub fn no_default_files(mut self) -> Self {
        self.search_defaults = false;
        self
    }

    /// Replace the environment lookup
    pub fn env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        self.env = Box::new(lookup);
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Resolve the configuration
    pub fn load(self) -> Result<Config> {
        let file = match self.locate_config_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "reading config file");
                read_file_config(&path)?
            }
            None => FileConfig::default(),
        };

        let endpoint = match self
            .endpoint
            .clone()
            .or_else(|| (self.env)(SKELETONKEY_ENDPOINT_VAR))
        {
            Some(raw) => parse_endpoint(&raw)?,
            None => file.endpoint.ok_or_else(|| {
                Error::configuration(format!(
                    "no cache endpoint configured (set {SKELETONKEY_ENDPOINT_VAR} or --endpoint)"
                ))
            })?,
        };

        let tenant = match self
            .tenant
            .clone()
            .or_else(|| (self.env)(SKELETONKEY_TENANT_VAR))
        {
            Some(raw) => TenantId::new(raw)?,
            None => file.tenant.ok_or_else(|| {
                Error::configuration(format!(
                    "no tenant configured (set {SKELETONKEY_TENANT_VAR} or --tenant)"
                ))
            })?,
        };

        let ttl = match self.ttl {
            Some(ttl) => ttl,
            None => self
                .seconds_var(SKELETONKEY_TTL_VAR)?
                .or(file.ttl_secs)
                .map_or(DEFAULT_ENTRY_TTL, Duration::from_secs),
        };

        let request_timeout = match self.request_timeout {
            Some(timeout) => timeout,
            None => self
                .seconds_var(SKELETONKEY_TIMEOUT_VAR)?
                .or(file.timeout_secs)
                .map_or(DEFAULT_REQUEST_TIMEOUT, Duration::from_secs),
        };

        if ttl.is_zero() {
            return Err(Error::configuration("ttl must be greater than zero"));
        }

        tracing::debug!(%endpoint, %tenant, ttl_secs = ttl.as_secs(), "configuration resolved");

        Ok(Config {
            endpoint,
            tenant,
            ttl,
            request_timeout,
        })
    }

    fn locate_config_file(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config_file {
            return Some(path.clone());
        }
        if !self.search_defaults {
            return None;
        }

        let local = std::env::current_dir()
            .ok()
            .map(|dir| dir.join(CONFIG_FILENAME));
        let user = dirs::config_dir().map(|dir| dir.join("skeletonkey").join(CONFIG_FILENAME));

        [local, user].into_iter().flatten().find(|path| path.is_file())
    }

    fn seconds_var(&self, name: &str) -> Result<Option<u64>> {
        match (self.env)(name) {
            Some(raw) => raw.trim().parse::<u64>().map(Some).map_err(|e| {
                Error::configuration(format!("{name} must be a whole number of seconds: {e}"))
            }),
            None => Ok(None),
        }
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| Error::file_system(path, "read", e))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("invalid config file '{}'", path.display()))
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| Error::configuration(format!("invalid endpoint '{raw}': {e}")))
}
