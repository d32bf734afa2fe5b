//! Validated namespace segments
//!
//! Cache keys are flat strings built by joining segments with
//! [`KEY_DELIMITER`]. A segment that contained the delimiter could make two
//! different entities collide on one key, so every segment type rejects it at
//! construction and there is no unchecked constructor.

use crate::constants::KEY_DELIMITER;
use crate::errors::{Error, Result, Validate};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::ops::Deref;
use std::str::FromStr;

macro_rules! segment_newtype {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a new segment, rejecting empty values and the key delimiter
            pub fn new(value: impl Into<String>) -> Result<Self> {
                let value = value.into();
                Validate::not_empty(&value, $field)?;
                Validate::excludes(&value, KEY_DELIMITER, $field)?;
                Ok(Self(value))
            }

            /// Get the inner string
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert to String
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = Error;

            fn try_from(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = Error;

            fn try_from(s: String) -> Result<Self> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

segment_newtype!(
    /// Scopes every key written for one deployment or customer
    TenantId,
    "tenant"
);

segment_newtype!(
    /// A capability a skeleton key may be entitled to use
    ServiceName,
    "service"
);

segment_newtype!(
    /// A credential holder within a tenant
    Username,
    "username"
);
