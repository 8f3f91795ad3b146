// ============================================================================
// src/lib.rs – PBKDF2 done right and done wrong
// ============================================================================

//! Derives a PBKDF2 key from command-line input in one of two ways:
//!
//! * correct: the salt is a hex byte array and the password is hashed as
//!   UTF-8, so the same input gives the same key everywhere;
//! * naive: the salt is a 32-bit integer and the password is hashed as the
//!   in-memory bytes of the platform's native character type, so the key
//!   silently depends on the platform.
//!
//! Data flow: [`validate`] → [`mode`] → [`kdf::engine`] → [`util::hex`] → [`ui`].

pub mod cli;
pub mod cmd;
pub mod config;
pub mod consts;
pub mod error;
pub mod kdf;
pub mod mode;
pub mod ui;
pub mod util;
pub mod validate;

pub use config::{Mode, NativeWidth, RunConfig};
pub use error::{ErrorKind, Pbkdf2Error};
pub use kdf::{derive_key, DerivationParameters, DerivedKey, HashAlgorithm};
