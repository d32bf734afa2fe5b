//! Resolved runtime configuration

use serde::Deserialize;
use skeletonkey_core::{TenantId, DEFAULT_ENTRY_TTL, DEFAULT_REQUEST_TIMEOUT};
use std::time::Duration;
use url::Url;

/// Immutable configuration shared by the stores and the CLI
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Cache gateway endpoint that instruction lists are POSTed to
    pub endpoint: Url,

    /// Tenant every key is scoped under
    pub tenant: TenantId,

    /// Expiry applied to every write
    pub ttl: Duration,

    /// Upper bound on a single gateway round trip
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(endpoint: Url, tenant: TenantId) -> Self {
        Self {
            endpoint,
            tenant,
            ttl: DEFAULT_ENTRY_TTL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// On-disk shape of `skeletonkey.json`; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub endpoint: Option<Url>,
    pub tenant: Option<TenantId>,
    pub ttl_secs: Option<u64>,
    pub timeout_secs: Option<u64>,
}
