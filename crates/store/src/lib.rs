//! Skeleton key stores for skeletonkey
//!
//! Everything here is layered on [`skeletonkey_cache::CacheClient`]:
//!
//! - [`EntitlementStore`]: tenant-wide service availability flags and
//!   per-user service entitlement flags
//! - [`CredentialStore`]: salted password hash records per username
//! - [`Verifier`]: the entitlement → availability → password decision
//! - [`Provisioner`]: replays manifests as store writes
//! - [`Registry`]: all of the above wired to one gateway

mod flags;

pub mod credentials;
pub mod entitlements;
pub mod provision;
pub mod registry;
pub mod verify;

pub use credentials::CredentialStore;
pub use entitlements::EntitlementStore;
pub use provision::{ProvisionReport, Provisioner};
pub use registry::{Registry, RegistryBuilder};
pub use verify::Verifier;
