// ============================================================================
// src/mode.rs – correct vs. naive salt and password handling
// ============================================================================

//! The only place the two demonstrations differ. Everything downstream
//! (engine, hex output) sees plain bytes and does not know the mode.

use std::ffi::OsStr;
use std::fmt;

use tracing::info;

use crate::config::{Mode, NativeWidth};
use crate::error::Pbkdf2Error;
use crate::kdf::{DerivationParameters, HashAlgorithm};
use crate::util::{hex, text};
use crate::validate;

/// Raw positional arguments, exactly as received.
#[derive(Debug, Clone, Copy)]
pub struct RawArgs<'a> {
    pub hash_type: &'a OsStr,
    pub salt: &'a OsStr,
    pub iteration_count: &'a OsStr,
    pub password: &'a OsStr,
}

/// Salt as the user meant it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Salt {
    /// Decoded hex bytes.
    Bytes(Vec<u8>),
    /// A 32-bit integer, hashed as its little-endian in-memory bytes.
    Integer(i32),
}

impl Salt {
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Bytes(b) => b.clone(),
            Self::Integer(i) => i.to_le_bytes().to_vec(),
        }
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(b) => f.write_str(&hex::encode(b)),
            Self::Integer(i) => write!(f, "{i}"),
        }
    }
}

/// Arguments that passed validation; the password is still text.
#[derive(Debug, Clone)]
pub struct Validated<'a> {
    pub algorithm: HashAlgorithm,
    pub salt: Salt,
    pub iteration_count: u64,
    pub password: &'a OsStr,
}

/// Validated inputs plus the exact bytes handed to the engine.
#[derive(Debug)]
pub struct Prepared {
    pub salt: Salt,
    pub params: DerivationParameters,
}

/// Check hash type, salt and iteration count, in that order. The first
/// failure wins.
pub fn validate_args<'a>(mode: Mode, args: RawArgs<'a>) -> Result<Validated<'a>, Pbkdf2Error> {
    let algorithm = validate::hash_type(&args.hash_type.to_string_lossy())?;

    let salt_text = args.salt.to_string_lossy();
    let salt = match mode {
        Mode::Correct => Salt::Bytes(hex::decode(&salt_text)?),
        Mode::Naive => Salt::Integer(validate::integer_salt(&salt_text)?),
    };

    let iteration_count = validate::iteration_count(&args.iteration_count.to_string_lossy())?;

    Ok(Validated {
        algorithm,
        salt,
        iteration_count,
        password: args.password,
    })
}

/// Turn validated arguments into derivation parameters. Converts the password,
/// which is the last input to be checked.
pub fn assemble(
    mode: Mode,
    width: NativeWidth,
    validated: Validated<'_>,
) -> Result<Prepared, Pbkdf2Error> {
    let password = match mode {
        Mode::Correct => text::to_utf8(validated.password)?,
        Mode::Naive => {
            info!(
                ?width,
                "naive mode: integer salt and native password bytes are platform dependent"
            );
            text::to_native_bytes(validated.password, width)
        }
    };

    let params = DerivationParameters {
        algorithm: validated.algorithm,
        salt: validated.salt.to_bytes(),
        iteration_count: validated.iteration_count,
        password,
    };

    Ok(Prepared {
        salt: validated.salt,
        params,
    })
}

/// [`validate_args`] followed by [`assemble`].
pub fn build_parameters(
    mode: Mode,
    width: NativeWidth,
    args: RawArgs<'_>,
) -> Result<Prepared, Pbkdf2Error> {
    let validated = validate_args(mode, args)?;
    assemble(mode, width, validated)
}
