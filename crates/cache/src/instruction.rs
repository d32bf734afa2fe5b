//! Instruction lists sent to the cache gateway

use serde::Serialize;
use serde_json::Value;
use skeletonkey_core::{Error, Result};
use std::fmt;
use std::time::Duration;

/// Command keywords understood by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Set,
    Get,
    Incr,
}

impl Command {
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Set => "SET",
            Command::Get => "GET",
            Command::Incr => "INCR",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_uppercase().as_str() {
            "SET" => Some(Command::Set),
            "GET" => Some(Command::Get),
            "INCR" => Some(Command::Incr),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Expiry modifier keyword for `SET`
pub const EXPIRE_SECONDS: &str = "EX";

/// An ordered instruction list, serialized as a bare JSON array
///
/// The first element is always the command keyword and the second the key.
/// Values keep their JSON type, so a boolean flag goes over the wire as
/// `true` rather than `"true"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Instructions(Vec<Value>);

impl Instructions {
    /// `SET key value`
    pub fn set(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self(vec![
            Value::from(Command::Set.keyword()),
            Value::from(key.into()),
            value.into(),
        ])
    }

    /// `GET key`
    pub fn get(key: impl Into<String>) -> Self {
        Self(vec![
            Value::from(Command::Get.keyword()),
            Value::from(key.into()),
        ])
    }

    /// `INCR key`
    pub fn incr(key: impl Into<String>) -> Self {
        Self(vec![
            Value::from(Command::Incr.keyword()),
            Value::from(key.into()),
        ])
    }

    /// Build from raw values, checking the command/key prefix
    pub fn from_values(values: Vec<Value>) -> Result<Self> {
        let instructions = Self(values);
        instructions.validate()?;
        Ok(instructions)
    }

    /// Append `EX seconds`. Sub-second remainders are rounded up so a short
    /// expiry never becomes "no expiry".
    #[must_use]
    pub fn expire_after(mut self, ttl: Duration) -> Self {
        let mut seconds = ttl.as_secs();
        if ttl.subsec_nanos() > 0 || seconds == 0 {
            seconds += 1;
        }
        self.0.push(Value::from(EXPIRE_SECONDS));
        self.0.push(Value::from(seconds));
        self
    }

    /// Reject lists the gateway could never execute
    pub fn validate(&self) -> Result<()> {
        let keyword = match self.0.first() {
            None => return Err(Error::invalid_instruction("instruction list is empty")),
            Some(Value::String(keyword)) => keyword,
            Some(other) => {
                return Err(Error::invalid_instruction(format!(
                    "command must be a string, got {other}"
                )))
            }
        };
        if keyword.is_empty() {
            return Err(Error::invalid_instruction("command keyword is empty"));
        }
        match self.0.get(1) {
            Some(Value::String(_)) => Ok(()),
            Some(other) => Err(Error::invalid_instruction(format!(
                "{keyword} key must be a string, got {other}"
            ))),
            None => Err(Error::invalid_instruction(format!("{keyword} is missing a key"))),
        }
    }

    /// The command keyword, as sent
    pub fn keyword(&self) -> Option<&str> {
        self.0.first().and_then(Value::as_str)
    }

    /// The parsed command, if the keyword is one this crate knows
    pub fn command(&self) -> Option<Command> {
        self.keyword().and_then(Command::from_keyword)
    }

    /// The key the instruction targets
    pub fn key(&self) -> Option<&str> {
        self.0.get(1).and_then(Value::as_str)
    }

    /// Everything after the key
    pub fn args(&self) -> &[Value] {
        self.0.get(2..).unwrap_or(&[])
    }

    /// Serialize to the JSON array sent as the request body
    pub fn to_json(&self) -> Result<Vec<u8>> {
        self.validate()?;
        Ok(serde_json::to_vec(&self.0)?)
    }

    /// A short label for logs and error messages, without any value
    pub fn operation(&self) -> String {
        match (self.keyword(), self.key()) {
            (Some(keyword), Some(key)) => format!("{keyword} {key}"),
            (Some(keyword), None) => keyword.to_string(),
            _ => "<empty>".to_string(),
        }
    }
}
