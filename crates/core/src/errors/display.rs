//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInstruction { message } => {
                write!(f, "invalid instruction: {message}")
            }
            Error::Validation {
                field,
                value,
                message,
            } => {
                write!(f, "invalid {field} '{value}': {message}")
            }
            Error::Encoding {
                format, message, ..
            } => {
                write!(f, "{format} encoding error: {message}")
            }
            Error::Protocol {
                operation,
                status,
                message,
            } => match status {
                Some(code) => write!(f, "{operation} failed with status {code}: {message}"),
                None => write!(f, "{operation} failed: {message}"),
            },
            Error::Network {
                endpoint, message, ..
            } => {
                write!(f, "network error for '{endpoint}': {message}")
            }
            Error::Domain { kind, subject, .. } => {
                write!(f, "{}: '{subject}'", kind.as_str())
            }
            Error::Hashing { message } => {
                write!(f, "password hashing error: {message}")
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            Error::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system {} operation failed for '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
        }
    }
}
