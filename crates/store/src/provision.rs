//! Bulk provisioning from manifests
//!
//! Provisioning replays manifests as plain store writes. It is not
//! transactional: the first failure stops the run and everything written
//! before it stays in the cache. Every write is an overwrite, so re-running
//! the same manifests after a failure is safe.

use crate::credentials::CredentialStore;
use crate::entitlements::EntitlementStore;
use skeletonkey_config::{load_services, load_skeleton_keys, SkeletonKeyMap};
use skeletonkey_core::{Result, ServiceName, TenantId};
use std::path::Path;

/// Counts of writes performed by one provisioning run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    pub services: usize,
    pub skeleton_keys: usize,
    pub entitlements: usize,
}

#[derive(Debug, Clone)]
pub struct Provisioner {
    entitlements: EntitlementStore,
    credentials: CredentialStore,
}

impl Provisioner {
    pub fn new(entitlements: EntitlementStore, credentials: CredentialStore) -> Self {
        Self {
            entitlements,
            credentials,
        }
    }

    /// Mark every service available, then store every skeleton key and its
    /// entitlements
    pub async fn provision(
        &self,
        tenant: &TenantId,
        services: &[ServiceName],
        skeleton_keys: &SkeletonKeyMap,
    ) -> Result<ProvisionReport> {
        let mut report = ProvisionReport::default();

        for service in services {
            self.entitlements
                .set_available_service(tenant, service)
                .await?;
            report.services += 1;
        }

        for (username, details) in skeleton_keys {
            self.credentials
                .set_skeleton_key(tenant, username, &details.password)
                .await?;
            report.skeleton_keys += 1;

            for service in &details.services {
                self.entitlements
                    .set_skeleton_key_service(tenant, username, service)
                    .await?;
                report.entitlements += 1;
            }
        }

        tracing::info!(
            %tenant,
            services = report.services,
            skeleton_keys = report.skeleton_keys,
            entitlements = report.entitlements,
            "provisioning complete"
        );
        Ok(report)
    }

    /// Load both manifests from disk and provision them
    ///
    /// Both files are parsed before the first write, so a malformed manifest
    /// leaves the cache untouched.
    pub async fn provision_from_files(
        &self,
        tenant: &TenantId,
        services_path: &Path,
        skeleton_keys_path: &Path,
    ) -> Result<ProvisionReport> {
        let services = load_services(services_path)?;
        let skeleton_keys = load_skeleton_keys(skeleton_keys_path)?;
        self.provision(tenant, &services, &skeleton_keys).await
    }
}
