/// Constants used throughout the skeletonkey codebase
use std::time::Duration;

// Key namespace
pub const KEY_DELIMITER: char = ':';
pub const AVAILABLE_SERVICES: &str = "available_services";
pub const SALTED_PASSWORD_HASH: &str = "salted_password_hash";
pub const SKELETON_KEY_SERVICES: &str = "skeleton_key_services";

// Gateway wire sentinels
pub const OK_SENTINEL: &str = "OK";
pub const TRUE_SENTINEL: &str = "1";

// One week
pub const DEFAULT_ENTRY_TTL: Duration = Duration::from_secs(60 * 60 * 24 * 7);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Environment variable names
pub const SKELETONKEY_ENDPOINT_VAR: &str = "SKELETONKEY_ENDPOINT";
pub const SKELETONKEY_TENANT_VAR: &str = "SKELETONKEY_TENANT";
pub const SKELETONKEY_TTL_VAR: &str = "SKELETONKEY_TTL_SECS";
pub const SKELETONKEY_TIMEOUT_VAR: &str = "SKELETONKEY_TIMEOUT_SECS";
pub const SKELETONKEY_PASSWORD_VAR: &str = "SKELETONKEY_PASSWORD";
pub const SKELETONKEY_LOG_VAR: &str = "SKELETONKEY_LOG";

// Config file
pub const CONFIG_FILENAME: &str = "skeletonkey.json";
