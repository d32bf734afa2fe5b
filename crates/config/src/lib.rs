//! Configuration and manifest loading for skeletonkey
//!
//! [`ConfigLoader`] resolves where the cache gateway lives and which tenant to
//! operate on. The [`manifest`] module reads the two bootstrap files that the
//! provisioning pipeline replays into the cache.

pub mod config;
pub mod loader;
pub mod manifest;

pub use config::Config;
pub use loader::ConfigLoader;
pub use manifest::{load_services, load_skeleton_keys, KeyDetails, SkeletonKeyMap};
