// ============================================================================
// src/kdf/mod.rs – PBKDF2 key derivation
// ============================================================================

pub mod algorithm;
pub mod engine;
pub mod provider;

pub use algorithm::HashAlgorithm;
pub use engine::{derive_key, DerivationParameters, DerivedKey};
pub use provider::{PrfHandle, PrfProvider, RustCryptoProvider, Status};
