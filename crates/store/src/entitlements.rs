//! Service availability and skeleton key entitlement flags

use crate::flags::{read_flag, write_flag};
use skeletonkey_cache::{CacheClient, CacheKey};
use skeletonkey_core::{Result, ServiceName, TenantId, Username, DEFAULT_ENTRY_TTL};
use std::time::Duration;

/// Reads and writes the two kinds of service flag
///
/// Availability (`tenant:available_services:service`) says a service exists
/// in the tenant at all. Entitlement
/// (`tenant:skeleton_key_services:username:service`) says one user's skeleton
/// key includes it.
#[derive(Debug, Clone)]
pub struct EntitlementStore {
    client: CacheClient,
    ttl: Duration,
}

impl EntitlementStore {
    pub fn new(client: CacheClient) -> Self {
        Self::with_ttl(client, DEFAULT_ENTRY_TTL)
    }

    pub fn with_ttl(client: CacheClient, ttl: Duration) -> Self {
        Self { client, ttl }
    }

    pub async fn set_available_service(
        &self,
        tenant: &TenantId,
        service: &ServiceName,
    ) -> Result<()> {
        let key = CacheKey::available_service(tenant, service);
        write_flag(&self.client, &key, self.ttl, "set service").await?;
        tracing::debug!(%tenant, %service, "service marked available");
        Ok(())
    }

    /// `Ok(false)` when the flag is absent or expired
    pub async fn get_available_service(
        &self,
        tenant: &TenantId,
        service: &ServiceName,
    ) -> Result<bool> {
        read_flag(&self.client, &CacheKey::available_service(tenant, service)).await
    }

    pub async fn set_skeleton_key_service(
        &self,
        tenant: &TenantId,
        username: &Username,
        service: &ServiceName,
    ) -> Result<()> {
        let key = CacheKey::skeleton_key_service(tenant, username, service);
        write_flag(&self.client, &key, self.ttl, "set skeleton key service").await?;
        tracing::debug!(%tenant, %username, %service, "service granted to skeleton key");
        Ok(())
    }

    /// `Ok(false)` when the flag is absent or expired
    pub async fn get_skeleton_key_service(
        &self,
        tenant: &TenantId,
        username: &Username,
        service: &ServiceName,
    ) -> Result<bool> {
        read_flag(
            &self.client,
            &CacheKey::skeleton_key_service(tenant, username, service),
        )
        .await
    }
}
