// ============================================================================
// src/cmd/mod.rs – command subsystem root
// ============================================================================
pub mod derive; // pbkdf2 <hashType> <salt> <iterationCount> <password> [doItRight]

pub use derive::{run, run_with, Invocation, Phase};
