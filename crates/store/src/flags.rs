//! Boolean flags on top of the cache's string values
//!
//! The cache has no boolean type. A flag is written as JSON `true`, which the
//! cache stores as `"1"`; a flag is set iff reading it back yields exactly that
//! sentinel. Absence means false. This is the only module that knows either
//! sentinel.

use skeletonkey_cache::{CacheClient, CacheKey, Instructions};
use skeletonkey_core::{Error, Result, OK_SENTINEL, TRUE_SENTINEL};
use std::time::Duration;

/// Write `key = true` with an expiry
pub(crate) async fn write_flag(
    client: &CacheClient,
    key: &CacheKey,
    ttl: Duration,
    operation: &'static str,
) -> Result<()> {
    let instructions = Instructions::set(key.as_str(), true).expire_after(ttl);
    let response = client.execute_string(&instructions).await?;
    expect_ok(operation, &response)
}

/// Read a flag; `Ok(false)` for an absent key or any non-truthy value
pub(crate) async fn read_flag(client: &CacheClient, key: &CacheKey) -> Result<bool> {
    let value = client.execute_base64(&Instructions::get(key.as_str())).await?;
    Ok(value.as_deref() == Some(TRUE_SENTINEL))
}

/// Require the write acknowledgement sentinel
pub(crate) fn expect_ok(operation: &'static str, response: &str) -> Result<()> {
    if response == OK_SENTINEL {
        Ok(())
    } else {
        Err(Error::protocol(
            operation,
            format!("expected {OK_SENTINEL:?}, gateway answered {response:?}"),
        ))
    }
}
