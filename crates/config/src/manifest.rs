//! Bootstrap manifests
//!
//! Two JSON files seed a tenant:
//!
//! - the services manifest, an array of service names:
//!   `["billing", "shipping"]`
//! - the skeleton keys manifest, an object keyed by username:
//!   `{"alice": {"password": "...", "services": ["billing"]}}`
//!
//! Every name goes through the validated segment types, so a manifest with
//! an empty name or a `:` inside one is rejected before anything is written.

use serde::Deserialize;
use skeletonkey_core::{Error, Result, ServiceName, Username};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Credential details for one username, as read from the manifest
#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct KeyDetails {
    pub password: String,
    #[zeroize(skip)]
    #[serde(default)]
    pub services: Vec<ServiceName>,
}

impl fmt::Debug for KeyDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyDetails")
            .field("password", &"<redacted>")
            .field("services", &self.services)
            .finish()
    }
}

/// Username to credential details, iterated in username order
pub type SkeletonKeyMap = BTreeMap<Username, KeyDetails>;

/// Parse a services manifest from a JSON string
pub fn parse_services(json: &str) -> Result<Vec<ServiceName>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a skeleton keys manifest from a JSON string
pub fn parse_skeleton_keys(json: &str) -> Result<SkeletonKeyMap> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse the services manifest at `path`
pub fn load_services(path: &Path) -> Result<Vec<ServiceName>> {
    let contents = read_manifest(path)?;
    let services = parse_services(&contents)?;
    tracing::debug!(path = %path.display(), count = services.len(), "loaded services manifest");
    Ok(services)
}

/// Read and parse the skeleton keys manifest at `path`
pub fn load_skeleton_keys(path: &Path) -> Result<SkeletonKeyMap> {
    let contents = read_manifest(path)?;
    let keys = parse_skeleton_keys(&contents)?;
    tracing::debug!(path = %path.display(), count = keys.len(), "loaded skeleton keys manifest");
    Ok(keys)
}

fn read_manifest(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::file_system(path, "read", e))
}
