//! One gateway, every store

use crate::credentials::CredentialStore;
use crate::entitlements::EntitlementStore;
use crate::provision::Provisioner;
use crate::verify::Verifier;
use skeletonkey_cache::{CacheClient, CacheGateway, HttpGateway};
use skeletonkey_config::Config;
use skeletonkey_core::{Result, DEFAULT_ENTRY_TTL};
use skeletonkey_security::{Argon2Hasher, HashParams, PasswordHasher};
use std::sync::Arc;
use std::time::Duration;

/// The stores, verifier and provisioner sharing one cache client
#[derive(Debug, Clone)]
pub struct Registry {
    client: CacheClient,
    entitlements: EntitlementStore,
    credentials: CredentialStore,
}

impl Registry {
    /// Wire everything to `gateway` with the default expiry and hashing
    pub fn new(gateway: Arc<dyn CacheGateway>) -> Self {
        Self::builder(gateway).build()
    }

    pub fn builder(gateway: Arc<dyn CacheGateway>) -> RegistryBuilder {
        RegistryBuilder {
            gateway,
            hasher: Arc::new(Argon2Hasher::new()),
            params: HashParams::default(),
            ttl: DEFAULT_ENTRY_TTL,
        }
    }

    /// Connect to the HTTP gateway described by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let gateway = HttpGateway::with_timeout(config.endpoint.clone(), config.request_timeout)?;
        Ok(Self::builder(Arc::new(gateway)).ttl(config.ttl).build())
    }

    pub fn client(&self) -> &CacheClient {
        &self.client
    }

    pub fn entitlements(&self) -> &EntitlementStore {
        &self.entitlements
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn verifier(&self) -> Verifier {
        Verifier::new(self.entitlements.clone(), self.credentials.clone())
    }

    pub fn provisioner(&self) -> Provisioner {
        Provisioner::new(self.entitlements.clone(), self.credentials.clone())
    }
}

pub struct RegistryBuilder {
    gateway: Arc<dyn CacheGateway>,
    hasher: Arc<dyn PasswordHasher>,
    params: HashParams,
    ttl: Duration,
}

impl RegistryBuilder {
    pub fn hasher(mut self, hasher: Arc<dyn PasswordHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn hash_params(mut self, params: HashParams) -> Self {
        self.params = params;
        self
    }

    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn build(self) -> Registry {
        let client = CacheClient::new(self.gateway);
        let entitlements = EntitlementStore::with_ttl(client.clone(), self.ttl);
        let credentials = CredentialStore::new(client.clone(), self.hasher)
            .with_params(self.params)
            .with_ttl(self.ttl);
        Registry {
            client,
            entitlements,
            credentials,
        }
    }
}
