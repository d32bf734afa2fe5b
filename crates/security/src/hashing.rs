//! Salted password hashing
//!
//! Uses Argon2id with explicit parameters. The parameters, salt and digest
//! travel together in a [`HashRecord`] so a record stays verifiable after the
//! defaults change.

use argon2::{Algorithm, Argon2, Params, Version};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use skeletonkey_core::{Error, Result};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Tuning knobs for a single hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
    pub salt_length: u32,
    pub key_length: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
            salt_length: 16,
            key_length: 32,
        }
    }
}

impl HashParams {
    fn argon2(&self) -> Result<Argon2<'static>> {
        let params = Params::new(
            self.memory_kib,
            self.iterations,
            self.parallelism,
            Some(self.key_length as usize),
        )
        .map_err(|e| Error::hashing(format!("invalid parameters: {e}")))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Parameters, salt and digest of one hashed password
///
/// `salt` and `hash` are standard base64. The record is what gets stored in
/// the cache, JSON encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashRecord {
    pub params: HashParams,
    pub salt: String,
    pub hash: String,
}

/// The hashing collaborator consumed by the credential store
pub trait PasswordHasher: Send + Sync {
    /// Hash `plaintext` with a fresh salt
    fn hash(&self, plaintext: &str, params: &HashParams) -> Result<HashRecord>;

    /// Check `plaintext` against a stored record
    ///
    /// `Ok(false)` means the password does not match; `Err` means the record
    /// itself could not be used.
    fn matches(&self, plaintext: &str, record: &HashRecord) -> Result<bool>;
}

/// Argon2id implementation of [`PasswordHasher`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }

    fn derive(plaintext: &str, salt: &[u8], params: &HashParams) -> Result<Zeroizing<Vec<u8>>> {
        let argon2 = params.argon2()?;
        let mut output = Zeroizing::new(vec![0u8; params.key_length as usize]);
        argon2
            .hash_password_into(plaintext.as_bytes(), salt, &mut output)
            .map_err(|e| Error::hashing(format!("password hash failed: {e}")))?;
        Ok(output)
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str, params: &HashParams) -> Result<HashRecord> {
        let mut salt = vec![0u8; params.salt_length as usize];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| Error::hashing(format!("salt generation failed: {e}")))?;

        let digest = Self::derive(plaintext, &salt, params)?;

        Ok(HashRecord {
            params: *params,
            salt: STANDARD.encode(&salt),
            hash: STANDARD.encode(digest.as_slice()),
        })
    }

    fn matches(&self, plaintext: &str, record: &HashRecord) -> Result<bool> {
        let salt = STANDARD
            .decode(&record.salt)
            .map_err(|e| Error::hashing(format!("invalid salt: {e}")))?;
        let expected = STANDARD
            .decode(&record.hash)
            .map_err(|e| Error::hashing(format!("invalid digest: {e}")))?;
        if expected.len() != record.params.key_length as usize {
            return Err(Error::hashing(format!(
                "digest is {} bytes, parameters say {}",
                expected.len(),
                record.params.key_length
            )));
        }

        let actual = Self::derive(plaintext, &salt, &record.params)?;
        let matched: bool = actual.as_slice().ct_eq(&expected).into();
        tracing::trace!(matched, "password comparison finished");
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Small parameters keep the suite fast; production uses the defaults
    fn fast() -> HashParams {
        HashParams {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
            ..HashParams::default()
        }
    }

    #[test]
    fn test_hash_and_match() {
        let hasher = Argon2Hasher::new();
        let record = hasher.hash("correct_password", &fast()).unwrap();

        assert!(hasher.matches("correct_password", &record).unwrap());
        assert!(!hasher.matches("wrong_password", &record).unwrap());
    }

    #[test]
    fn test_salt_differs_each_time() {
        let hasher = Argon2Hasher::new();
        let first = hasher.hash("test_password", &fast()).unwrap();
        let second = hasher.hash("test_password", &fast()).unwrap();

        assert_ne!(first.salt, second.salt);
        assert_ne!(first.hash, second.hash);
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let hasher = Argon2Hasher::new();
        let record = hasher.hash("пароль密码🔐", &fast()).unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let restored: HashRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, restored);
        assert!(hasher.matches("пароль密码🔐", &restored).unwrap());
    }

    #[test]
    fn test_default_params_work() {
        let hasher = Argon2Hasher::new();
        let record = hasher.hash("", &HashParams::default()).unwrap();

        assert_eq!(record.params, HashParams::default());
        assert!(hasher.matches("", &record).unwrap());
        assert!(!hasher.matches("not_empty", &record).unwrap());
    }

    #[test]
    fn test_corrupt_record_is_error() {
        let hasher = Argon2Hasher::new();
        let mut record = hasher.hash("password", &fast()).unwrap();
        record.salt = "***".to_string();
        assert!(hasher.matches("password", &record).is_err());

        let mut record = hasher.hash("password", &fast()).unwrap();
        record.params.key_length = 64;
        assert!(hasher.matches("password", &record).is_err());
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        let hasher = Argon2Hasher::new();
        let params = HashParams {
            iterations: 0,
            ..fast()
        };
        let err = hasher.hash("password", &params).unwrap_err();
        assert!(err.to_string().contains("invalid parameters"));
    }
}
