// ============================================================================
// src/util/mod.rs – re-exports for utility modules
// ============================================================================

pub mod hex;
pub mod stopwatch;
pub mod text;
