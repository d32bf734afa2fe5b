//! Hashed skeleton key credentials

use crate::flags::expect_ok;
use skeletonkey_cache::{CacheClient, CacheKey, Instructions};
use skeletonkey_core::{Error, Result, TenantId, Username, DEFAULT_ENTRY_TTL};
use skeletonkey_security::{HashParams, HashRecord, PasswordHasher};
use std::sync::Arc;
use std::time::Duration;
use zeroize::Zeroizing;

/// Stores one JSON-encoded [`HashRecord`] per username under
/// `tenant:salted_password_hash:username`
#[derive(Clone)]
pub struct CredentialStore {
    client: CacheClient,
    hasher: Arc<dyn PasswordHasher>,
    params: HashParams,
    ttl: Duration,
}

impl CredentialStore {
    pub fn new(client: CacheClient, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            client,
            hasher,
            params: HashParams::default(),
            ttl: DEFAULT_ENTRY_TTL,
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: HashParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn hasher(&self) -> &Arc<dyn PasswordHasher> {
        &self.hasher
    }

    /// Hash `password` and store the record, replacing any previous one
    pub async fn set_skeleton_key(
        &self,
        tenant: &TenantId,
        username: &Username,
        password: &str,
    ) -> Result<()> {
        let record = self.hash_off_thread(password).await?;
        let value = serde_json::to_string(&record)?;

        let key = CacheKey::salted_password_hash(tenant, username);
        let instructions = Instructions::set(key.into_string(), value).expire_after(self.ttl);
        let response = self.client.execute_string(&instructions).await?;
        expect_ok("set skeleton key", &response)?;

        tracing::debug!(%tenant, %username, "skeleton key stored");
        Ok(())
    }

    /// The stored record, `None` if the user has no skeleton key
    pub(crate) async fn hash_record(
        &self,
        tenant: &TenantId,
        username: &Username,
    ) -> Result<Option<HashRecord>> {
        let key = CacheKey::salted_password_hash(tenant, username);
        match self
            .client
            .execute_base64(&Instructions::get(key.into_string()))
            .await?
        {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    // Runs on the blocking pool
    async fn hash_off_thread(&self, password: &str) -> Result<HashRecord> {
        let hasher = Arc::clone(&self.hasher);
        let params = self.params;
        let password = Zeroizing::new(password.to_string());
        tokio::task::spawn_blocking(move || hasher.hash(&password, &params))
            .await
            .map_err(|e| Error::hashing(format!("hashing task failed: {e}")))?
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("client", &self.client)
            .field("params", &self.params)
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skeletonkey_cache::MemoryGateway;
    use skeletonkey_security::Argon2Hasher;

    fn fast_params() -> HashParams {
        HashParams {
            memory_kib: 1024,
            iterations: 1,
            ..HashParams::default()
        }
    }

    fn store(gateway: &MemoryGateway) -> CredentialStore {
        CredentialStore::new(
            CacheClient::new(Arc::new(gateway.clone())),
            Arc::new(Argon2Hasher::new()),
        )
        .with_params(fast_params())
    }

    fn ids() -> (TenantId, Username) {
        (TenantId::new("acme").unwrap(), Username::new("alice").unwrap())
    }

    #[tokio::test]
    async fn test_stores_json_hash_record_not_plaintext() {
        let gateway = MemoryGateway::new();
        let store = store(&gateway);
        let (tenant, alice) = ids();

        store
            .set_skeleton_key(&tenant, &alice, "secret123")
            .await
            .unwrap();

        let raw = gateway
            .raw_value("acme:salted_password_hash:alice")
            .expect("record should be stored");
        assert!(!raw.contains("secret123"));

        let record: HashRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(record.params, fast_params());
    }

    #[tokio::test]
    async fn test_hash_record_round_trip() {
        let gateway = MemoryGateway::new();
        let store = store(&gateway);
        let (tenant, alice) = ids();

        assert!(store.hash_record(&tenant, &alice).await.unwrap().is_none());

        store
            .set_skeleton_key(&tenant, &alice, "secret123")
            .await
            .unwrap();
        let record = store.hash_record(&tenant, &alice).await.unwrap().unwrap();
        assert!(store.hasher().matches("secret123", &record).unwrap());
    }

    #[tokio::test]
    async fn test_corrupt_record_is_encoding_error() {
        let gateway = MemoryGateway::new();
        let store = store(&gateway);
        let (tenant, alice) = ids();

        CacheClient::new(Arc::new(gateway.clone()))
            .execute_string(&Instructions::set(
                "acme:salted_password_hash:alice",
                "not a record",
            ))
            .await
            .unwrap();

        let err = store.hash_record(&tenant, &alice).await.unwrap_err();
        assert!(err.is_encoding());
    }
}
