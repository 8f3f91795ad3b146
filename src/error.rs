// ============================================================================
// src/error.rs – error taxonomy and exit-code mapping
// ============================================================================

//! Every failure the pipeline can hit, grouped the way the process reports
//! them: usage (exit 1), validation (exit 2), resource and derivation (exit 3).

use std::fmt;

use thiserror::Error;

use crate::consts::{EXIT_RESOURCE, EXIT_USAGE, EXIT_VALIDATION};
use crate::kdf::provider::Status;

/// Hex text could not be turned into bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("Invalid hex character '{character}' at position {position} of hex string \"{input}\"")]
    InvalidHexCharacter {
        character: char,
        /// 1-based character position.
        position: usize,
        input: String,
    },
}

/// A command-line argument is malformed or out of range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("\"{name}\" is not an integer: '{text}'")]
    NotAnInteger { name: &'static str, text: String },

    #[error("\"{name}\" value {value} is smaller than minimum value of {min}")]
    BelowMinimum {
        name: &'static str,
        min: i64,
        value: String,
    },

    #[error("\"{name}\" value {value} is larger than maximum value of {max}")]
    AboveMaximum {
        name: &'static str,
        max: i64,
        value: String,
    },

    #[error(transparent)]
    Hex(#[from] HexError),
}

/// Password text could not be converted to its canonical byte form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Password could not be converted to UTF-8: {reason}")]
    EncodingConversionFailed { reason: String },

    #[error("Could not allocate {bytes} bytes for {what}")]
    AllocationFailed { what: &'static str, bytes: usize },
}

/// The keyed-hash primitive refused one of the derivation steps.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    #[error("Error {status} returned by {step}")]
    AlgorithmUnavailable { step: &'static str, status: Status },

    #[error("Error {status} returned by {step}")]
    PropertyQueryFailed { step: &'static str, status: Status },

    #[error("Could not allocate {bytes} bytes for hash value ({step})")]
    AllocationFailed { step: &'static str, bytes: usize },

    #[error("Error {status} returned by {step}")]
    DerivationFailed { step: &'static str, status: Status },
}

impl DeriveError {
    /// Name of the derivation step that failed.
    pub fn step(&self) -> &'static str {
        match self {
            Self::AlgorithmUnavailable { step, .. }
            | Self::PropertyQueryFailed { step, .. }
            | Self::AllocationFailed { step, .. }
            | Self::DerivationFailed { step, .. } => step,
        }
    }
}

/// Coarse failure class; decides the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    Validation,
    Resource,
    Derivation,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Usage => EXIT_USAGE,
            Self::Validation => EXIT_VALIDATION,
            Self::Resource | Self::Derivation => EXIT_RESOURCE,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Usage => "UsageError",
            Self::Validation => "ValidationError",
            Self::Resource => "ResourceError",
            Self::Derivation => "DerivationError",
        };
        f.write_str(name)
    }
}

/// Top-level error for one invocation.
#[derive(Error, Debug)]
pub enum Pbkdf2Error {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Derive(#[from] DeriveError),

    #[error("Could not write result: {0}")]
    Output(#[from] std::io::Error),
}

impl From<HexError> for Pbkdf2Error {
    fn from(err: HexError) -> Self {
        Self::Validation(err.into())
    }
}

impl Pbkdf2Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage(_) => ErrorKind::Usage,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Encoding(_) | Self::Output(_) => ErrorKind::Resource,
            Self::Derive(DeriveError::AllocationFailed { .. }) => ErrorKind::Resource,
            Self::Derive(_) => ErrorKind::Derivation,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.kind().exit_code()
    }
}
