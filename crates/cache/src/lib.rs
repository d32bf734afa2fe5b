//! Cache gateway client for skeletonkey
//!
//! The external cache is only reachable through a narrow command protocol:
//! an instruction list such as `["SET", key, value, "EX", ttl]` is POSTed as
//! a JSON array and the gateway answers with a single JSON string. Values
//! returned by `GET` are additionally base64 encoded by the gateway.
//!
//! This crate provides:
//! - [`Instructions`]: the ordered, heterogeneous instruction list
//! - [`keys`]: composition of flat `tenant:category:entity` keys
//! - [`CacheGateway`]: the seam to the external cache, with an HTTP
//!   implementation and an in-memory one for tests
//! - [`CacheClient`]: the two response decoders layered over a gateway

pub mod client;
pub mod gateway;
pub mod instruction;
pub mod keys;

pub use client::CacheClient;
pub use gateway::{CacheGateway, HttpGateway, MemoryGateway};
pub use instruction::{Command, Instructions};
pub use keys::{compose, CacheKey, KeyCategory};
