//! Password hashing for skeletonkey
//!
//! Credentials are never stored in plaintext. The stores only see the
//! [`PasswordHasher`] contract: turn a plaintext into a [`HashRecord`], and
//! later check a plaintext against that record. [`Argon2Hasher`] is the
//! implementation used in production.

pub mod hashing;

pub use hashing::{Argon2Hasher, HashParams, HashRecord, PasswordHasher};
