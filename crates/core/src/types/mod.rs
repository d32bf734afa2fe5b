//! Domain types for skeletonkey

pub mod newtypes;

pub use newtypes::{ServiceName, TenantId, Username};
