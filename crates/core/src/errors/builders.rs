//! Builder methods for creating errors with context

use super::types::{DomainErrorKind, Error, ErrorClass};
use std::path::PathBuf;

// Helper methods for creating errors with context
impl Error {
    /// Create an invalid instruction error
    #[must_use]
    pub fn invalid_instruction(message: impl Into<String>) -> Self {
        Error::InvalidInstruction {
            message: message.into(),
        }
    }

    /// Create a validation error for a named field
    #[must_use]
    pub fn validation(
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::Validation {
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an encoding error without an underlying source
    #[must_use]
    pub fn encoding(format: &'static str, message: impl Into<String>) -> Self {
        Error::Encoding {
            format,
            message: message.into(),
            source: None,
        }
    }

    /// Create an encoding error with a source error
    #[must_use]
    pub fn encoding_with_source(
        format: &'static str,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Encoding {
            format,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a protocol error for a non-200 gateway response
    #[must_use]
    pub fn unexpected_status(operation: impl Into<String>, status: u16) -> Self {
        Error::Protocol {
            operation: operation.into(),
            status: Some(status),
            message: "request failed to resolve instructions".to_string(),
        }
    }

    /// Create a protocol error for a response that violates the contract
    #[must_use]
    pub fn protocol(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Protocol {
            operation: operation.into(),
            status: None,
            message: message.into(),
        }
    }

    /// Create a network error
    #[must_use]
    pub fn network(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Network {
            endpoint: endpoint.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with a source error
    #[must_use]
    pub fn network_with_source(
        endpoint: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let source = source.into();
        Error::Network {
            endpoint: endpoint.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create a domain error
    #[must_use]
    pub fn domain(kind: DomainErrorKind, subject: impl Into<String>) -> Self {
        Error::Domain {
            kind,
            subject: subject.into(),
            source: None,
        }
    }

    /// Create a domain error caused by a lower-level failure
    #[must_use]
    pub fn domain_with_source(
        kind: DomainErrorKind,
        subject: impl Into<String>,
        source: Error,
    ) -> Self {
        Error::Domain {
            kind,
            subject: subject.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a hashing error
    #[must_use]
    pub fn hashing(message: impl Into<String>) -> Self {
        Error::Hashing {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Which branch of the taxonomy this error belongs to
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Error::InvalidInstruction { .. } | Error::Validation { .. } => ErrorClass::Input,
            Error::Encoding { .. } => ErrorClass::Encoding,
            Error::Protocol { .. } | Error::Network { .. } => ErrorClass::Protocol,
            Error::Domain { .. } => ErrorClass::Domain,
            Error::Hashing { .. } | Error::Configuration { .. } | Error::FileSystem { .. } => {
                ErrorClass::Environment
            }
        }
    }

    #[must_use]
    pub fn is_input(&self) -> bool {
        self.class() == ErrorClass::Input
    }

    #[must_use]
    pub fn is_encoding(&self) -> bool {
        self.class() == ErrorClass::Encoding
    }

    #[must_use]
    pub fn is_protocol(&self) -> bool {
        self.class() == ErrorClass::Protocol
    }

    #[must_use]
    pub fn is_domain(&self) -> bool {
        self.class() == ErrorClass::Domain
    }

    /// The domain kind, if this is a domain error
    #[must_use]
    pub fn domain_kind(&self) -> Option<DomainErrorKind> {
        match self {
            Error::Domain { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
