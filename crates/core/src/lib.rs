//! Core domain types, errors, and constants for `skeletonkey`.
//!
//! Every other crate in the workspace builds on the pieces defined here:
//!
//! - **`errors`**: the shared `Error` enum and `Result` alias. Failures are
//!   grouped into input, encoding, protocol and domain errors so callers can
//!   tell "does not exist" apart from "the cache could not be reached".
//! - **`types`**: validated namespace segments (`TenantId`, `ServiceName`,
//!   `Username`). A segment can never be empty or contain the key delimiter.
//! - **`constants`**: key categories, wire sentinels and environment variable
//!   names shared between the library crates and the CLI.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{DomainErrorKind, Error, ErrorClass, Result, ResultExt, Validate},
    types::*,
};
