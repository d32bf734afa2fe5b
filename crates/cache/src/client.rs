//! Response decoding over a [`CacheGateway`]
//!
//! Every gateway response body is a single JSON string. `SET` acknowledgements
//! are used as-is; `GET` payloads are base64 (URL-safe alphabet) inside that
//! JSON string and are decoded a second time here.

use crate::gateway::CacheGateway;
use crate::instruction::Instructions;
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde_json::Value;
use skeletonkey_core::{Error, Result};
use std::sync::Arc;
use tracing::Instrument;

/// Protocol client shared by the stores
#[derive(Clone)]
pub struct CacheClient {
    gateway: Arc<dyn CacheGateway>,
}

impl CacheClient {
    pub fn new(gateway: Arc<dyn CacheGateway>) -> Self {
        Self { gateway }
    }

    pub fn endpoint(&self) -> &str {
        self.gateway.endpoint()
    }

    /// Execute and decode the body as a plain string
    ///
    /// A `null` body is an encoding error here; callers of this variant
    /// always expect a value.
    pub async fn execute_string(&self, instructions: &Instructions) -> Result<String> {
        let body = self.round_trip(instructions).await?;
        decode_string(&body)?.ok_or_else(|| Error::encoding("json", "nil string was returned"))
    }

    /// Execute and decode the body as base64 inside a JSON string
    ///
    /// Returns `None` when the gateway reports the key as absent.
    pub async fn execute_base64(&self, instructions: &Instructions) -> Result<Option<String>> {
        let body = self.round_trip(instructions).await?;
        match decode_string(&body)? {
            Some(encoded) => decode_base64(&encoded).map(Some),
            None => Ok(None),
        }
    }

    /// `INCR key`, returning the new counter value
    pub async fn incr(&self, key: &str) -> Result<i64> {
        let instructions = Instructions::incr(key);
        let body = self.round_trip(&instructions).await?;
        let value: Value = serde_json::from_str(&body)?;
        let counter = match &value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        };
        counter.ok_or_else(|| {
            Error::protocol(
                instructions.operation(),
                format!("expected an integer counter, got {value}"),
            )
        })
    }

    async fn round_trip(&self, instructions: &Instructions) -> Result<String> {
        instructions.validate()?;
        let span = tracing::debug_span!(
            "cache_execute",
            command = instructions.keyword().unwrap_or_default(),
            key = instructions.key().unwrap_or_default(),
            endpoint = self.gateway.endpoint(),
        );
        async {
            let result = self.gateway.execute(instructions).await;
            if let Err(e) = &result {
                tracing::debug!(error = %e, "cache round trip failed");
            }
            result
        }
        .instrument(span)
        .await
    }
}

impl std::fmt::Debug for CacheClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheClient")
            .field("endpoint", &self.gateway.endpoint())
            .finish()
    }
}

fn decode_string(body: &str) -> Result<Option<String>> {
    Ok(serde_json::from_str::<Option<String>>(body)?)
}

fn decode_base64(encoded: &str) -> Result<String> {
    let bytes = URL_SAFE.decode(encoded)?;
    Ok(String::from_utf8(bytes)?)
}
