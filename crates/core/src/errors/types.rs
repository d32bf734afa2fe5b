//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for skeletonkey operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for skeletonkey operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed or empty instruction list handed to the protocol client
    InvalidInstruction { message: String },

    /// A namespace segment or other input failed validation
    Validation {
        field: String,
        value: String,
        message: String,
    },

    /// JSON, base64 or UTF-8 encoding and decoding failures
    Encoding {
        format: &'static str,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The gateway answered, but not with what the contract requires
    Protocol {
        operation: String,
        status: Option<u16>,
        message: String,
    },

    /// The gateway could not be reached at all
    Network {
        endpoint: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An entitlement, availability flag or credential does not exist
    Domain {
        kind: DomainErrorKind,
        subject: String,
        #[source]
        source: Option<Box<Error>>,
    },

    /// Password hashing collaborator failures
    Hashing { message: String },

    /// Configuration errors
    Configuration { message: String },

    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// The specific negative outcome of a domain lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainErrorKind {
    /// The user's skeleton key is not entitled to the service
    SkeletonKeyServiceDoesNotExist,
    /// The service is not available in the tenant
    AvailableServiceDoesNotExist,
    /// No credential record is stored for the user
    SkeletonKeyDoesNotExist,
}

impl DomainErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainErrorKind::SkeletonKeyServiceDoesNotExist => {
                "skeleton key service does not exist"
            }
            DomainErrorKind::AvailableServiceDoesNotExist => "available service does not exist",
            DomainErrorKind::SkeletonKeyDoesNotExist => "skeleton key does not exist",
        }
    }
}

/// Coarse error taxonomy used by callers that only care about the category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Input,
    Encoding,
    Protocol,
    Domain,
    Environment,
}
