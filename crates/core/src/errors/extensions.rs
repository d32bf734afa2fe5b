use super::types::{Error, Result};
use std::fmt::Display;

/// Re-report a lower-level failure as a configuration problem
pub trait ResultExt<T> {
    /// Prefix the error with a lazily built description of what was being read
    fn with_context<F, M>(self, describe: F) -> Result<T>
    where
        F: FnOnce() -> M,
        M: Display;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn with_context<F, M>(self, describe: F) -> Result<T>
    where
        F: FnOnce() -> M,
        M: Display,
    {
        self.map_err(|e| Error::configuration(format!("{}: {}", describe(), e.into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_prefixes_message() {
        let parsed: std::result::Result<u64, serde_json::Error> = serde_json::from_str("nope");
        let err = parsed
            .with_context(|| "invalid config file 'skeletonkey.json'")
            .unwrap_err();

        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err
            .to_string()
            .contains("invalid config file 'skeletonkey.json': "));
    }

    #[test]
    fn test_ok_passes_through_without_describing() {
        let value: std::result::Result<u8, Error> = Ok(7);
        let value = value
            .with_context(|| -> String { panic!("not evaluated") })
            .unwrap();
        assert_eq!(value, 7);
    }
}
