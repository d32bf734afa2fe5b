//! The seam between skeletonkey and the external cache
//!
//! A gateway executes one instruction list and hands back the raw response
//! body. Decoding that body is the job of [`crate::CacheClient`], so every
//! gateway implementation shares one decoding path.

mod http;
mod memory;

pub use http::HttpGateway;
pub use memory::MemoryGateway;

use crate::instruction::Instructions;
use skeletonkey_core::Result;

/// Executes instruction lists against a cache
#[async_trait::async_trait]
pub trait CacheGateway: Send + Sync {
    /// Send the instructions and return the raw body of a 200 response
    ///
    /// Any other status is a protocol error.
    async fn execute(&self, instructions: &Instructions) -> Result<String>;

    /// Where the gateway sends requests, for logs and error messages
    fn endpoint(&self) -> &str;
}
