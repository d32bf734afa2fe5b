//! Error types and result extensions for skeletonkey operations

mod builders;
mod conversions;
mod display;
mod extensions;
mod types;
mod validate;

pub use extensions::*;
pub use types::{DomainErrorKind, Error, ErrorClass, Result};
pub use validate::Validate;
