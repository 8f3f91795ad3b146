// ============================================================================
// src/consts.rs – documented argument ranges and process exit codes
// ============================================================================

/// Smallest accepted hash type selector.
pub const MIN_HASH_TYPE: i64 = 1;
/// Largest accepted hash type selector.
pub const MAX_HASH_TYPE: i64 = 5;

/// Smallest integer salt accepted in naive mode.
pub const MIN_SALT: i64 = 0;
/// Largest integer salt accepted in naive mode (`i32::MAX`, the salt is stored as a 32-bit int).
pub const MAX_SALT: i64 = i32::MAX as i64;

/// Smallest accepted PBKDF2 iteration count.
pub const MIN_ITERATION_COUNT: i64 = 1;
/// Largest accepted PBKDF2 iteration count.
///
/// Keeps a single run in the seconds range on current hardware.
pub const MAX_ITERATION_COUNT: i64 = 5_000_000;

pub const EXIT_OK: u8 = 0;
pub const EXIT_USAGE: u8 = 1;
pub const EXIT_VALIDATION: u8 = 2;
pub const EXIT_RESOURCE: u8 = 3;

/// Environment variable holding a `tracing` filter directive (e.g. `pbkdf2_demo=debug`).
pub const LOG_ENV: &str = "PBKDF2_LOG";
