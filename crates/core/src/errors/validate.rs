//! Validation helpers shared by the newtype constructors

use super::types::{Error, Result};

/// Functional validation utilities
pub struct Validate;

impl Validate {
    /// Validate that a string is not empty
    pub fn not_empty(value: &str, field_name: &str) -> Result<()> {
        if value.is_empty() {
            Err(Error::validation(field_name, value, "cannot be empty"))
        } else {
            Ok(())
        }
    }

    /// Validate that a string does not contain a forbidden character
    pub fn excludes(value: &str, forbidden: char, field_name: &str) -> Result<()> {
        if value.contains(forbidden) {
            Err(Error::validation(
                field_name,
                value,
                format!("must not contain '{forbidden}'"),
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(Validate::not_empty("acme", "tenant").is_ok());
        assert!(Validate::not_empty("", "tenant").is_err());
    }

    #[test]
    fn test_excludes() {
        assert!(Validate::excludes("billing", ':', "service").is_ok());
        let err = Validate::excludes("bill:ing", ':', "service").unwrap_err();
        assert_eq!(err.to_string(), "invalid service 'bill:ing': must not contain ':'");
    }
}
