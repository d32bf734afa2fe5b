use super::CacheGateway;
use crate::instruction::{Command, Instructions, EXPIRE_SECONDS};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use dashmap::DashMap;
use serde_json::Value;
use skeletonkey_core::{Error, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

const MEMORY_ENDPOINT: &str = "memory://";
const BAD_REQUEST: u16 = 400;

#[derive(Debug, Clone)]
struct StoredValue {
    value: String,
    expires_at: Option<Instant>,
}

impl StoredValue {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |deadline| now < deadline)
    }
}

/// In-process gateway that speaks the same wire contract as the real one
///
/// Values are stored the way the cache renders them (`true` becomes `"1"`),
/// `GET` answers with the value base64 encoded inside a JSON string, and a
/// missing key answers JSON `null`. `EX` expiry follows tokio's clock, so
/// paused-time tests can step past it.
#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    entries: Arc<DashMap<String, StoredValue>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.iter().filter(|e| e.value().is_live(now)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw stored value for a key, bypassing the wire encoding
    pub fn raw_value(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        self.entries
            .get(key)
            .filter(|e| e.value().is_live(now))
            .map(|e| e.value().value.clone())
    }

    fn set(&self, instructions: &Instructions) -> Result<String> {
        let key = key_of(instructions)?;
        let args = instructions.args();
        let value = args
            .first()
            .ok_or_else(|| Error::unexpected_status(instructions.operation(), BAD_REQUEST))?;

        let expires_at = match args.get(1..) {
            Some([Value::String(modifier), Value::Number(seconds)])
                if modifier.eq_ignore_ascii_case(EXPIRE_SECONDS) =>
            {
                let seconds = seconds
                    .as_u64()
                    .ok_or_else(|| Error::unexpected_status(instructions.operation(), BAD_REQUEST))?;
                Some(Instant::now() + Duration::from_secs(seconds))
            }
            Some([]) | None => None,
            Some(_) => {
                return Err(Error::unexpected_status(
                    instructions.operation(),
                    BAD_REQUEST,
                ))
            }
        };

        self.entries.insert(
            key.to_string(),
            StoredValue {
                value: render(value),
                expires_at,
            },
        );
        Ok(serde_json::to_string("OK")?)
    }

    fn get(&self, instructions: &Instructions) -> Result<String> {
        let key = key_of(instructions)?;
        match self.raw_value(key) {
            Some(value) => Ok(serde_json::to_string(&URL_SAFE.encode(value))?),
            None => Ok(Value::Null.to_string()),
        }
    }

    fn incr(&self, instructions: &Instructions) -> Result<String> {
        let key = key_of(instructions)?;
        let now = Instant::now();
        let mut entry = self.entries.entry(key.to_string()).or_insert(StoredValue {
            value: "0".to_string(),
            expires_at: None,
        });
        if !entry.is_live(now) {
            *entry = StoredValue {
                value: "0".to_string(),
                expires_at: None,
            };
        }
        let current: i64 = entry
            .value
            .parse()
            .map_err(|_| Error::unexpected_status(instructions.operation(), BAD_REQUEST))?;
        let next = current + 1;
        entry.value = next.to_string();
        Ok(serde_json::to_string(&entry.value)?)
    }
}

fn key_of(instructions: &Instructions) -> Result<&str> {
    instructions
        .key()
        .ok_or_else(|| Error::invalid_instruction("instruction is missing a key"))
}

/// How the cache stores a JSON argument
fn render(value: &Value) -> String {
    match value {
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => "0".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait::async_trait]
impl CacheGateway for MemoryGateway {
    async fn execute(&self, instructions: &Instructions) -> Result<String> {
        instructions.validate()?;
        match instructions.command() {
            Some(Command::Set) => self.set(instructions),
            Some(Command::Get) => self.get(instructions),
            Some(Command::Incr) => self.incr(instructions),
            None => Err(Error::unexpected_status(
                instructions.operation(),
                BAD_REQUEST,
            )),
        }
    }

    fn endpoint(&self) -> &str {
        MEMORY_ENDPOINT
    }
}
