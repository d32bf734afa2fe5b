#![allow(dead_code)]

use skeletonkey_cache::{CacheGateway, Instructions, MemoryGateway};
use skeletonkey_core::{Error, Result, ServiceName, TenantId, Username};
use skeletonkey_security::HashParams;
use skeletonkey_store::Registry;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Argon2 parameters small enough for a test suite
pub fn fast_params() -> HashParams {
    HashParams {
        memory_kib: 1024,
        iterations: 1,
        ..HashParams::default()
    }
}

pub fn registry(gateway: Arc<dyn CacheGateway>) -> Registry {
    Registry::builder(gateway).hash_params(fast_params()).build()
}

pub fn tenant(name: &str) -> TenantId {
    TenantId::new(name).unwrap()
}

pub fn service(name: &str) -> ServiceName {
    ServiceName::new(name).unwrap()
}

pub fn user(name: &str) -> Username {
    Username::new(name).unwrap()
}

/// Memory gateway that answers with a non-200 status for chosen requests
pub struct FaultyGateway {
    inner: MemoryGateway,
    fail_keys_containing: Option<String>,
    fail_after_sets: Option<usize>,
    sets: AtomicUsize,
}

impl FaultyGateway {
    pub fn new(inner: MemoryGateway) -> Self {
        Self {
            inner,
            fail_keys_containing: None,
            fail_after_sets: None,
            sets: AtomicUsize::new(0),
        }
    }

    /// Fail every request whose key contains `fragment`
    pub fn failing_keys(mut self, fragment: &str) -> Self {
        self.fail_keys_containing = Some(fragment.to_string());
        self
    }

    /// Let `count` SETs through, then fail every later SET
    pub fn failing_after_sets(mut self, count: usize) -> Self {
        self.fail_after_sets = Some(count);
        self
    }
}

#[async_trait::async_trait]
impl CacheGateway for FaultyGateway {
    async fn execute(&self, instructions: &Instructions) -> Result<String> {
        if let (Some(fragment), Some(key)) = (&self.fail_keys_containing, instructions.key()) {
            if key.contains(fragment.as_str()) {
                return Err(Error::unexpected_status(instructions.operation(), 503));
            }
        }
        if instructions.keyword() == Some("SET") {
            let seen = self.sets.fetch_add(1, Ordering::SeqCst);
            if self.fail_after_sets.is_some_and(|limit| seen >= limit) {
                return Err(Error::unexpected_status(instructions.operation(), 500));
            }
        }
        self.inner.execute(instructions).await
    }

    fn endpoint(&self) -> &str {
        "faulty://"
    }
}

/// Gateway that acknowledges writes with something other than OK
pub struct GrumpyGateway;

#[async_trait::async_trait]
impl CacheGateway for GrumpyGateway {
    async fn execute(&self, _instructions: &Instructions) -> Result<String> {
        Ok("\"QUEUED\"".to_string())
    }

    fn endpoint(&self) -> &str {
        "grumpy://"
    }
}
