// ============================================================================
// src/kdf/engine.rs – one PBKDF2 derivation per call
// ============================================================================

use std::fmt;

use tracing::debug;
use zeroize::Zeroizing;

use super::provider::{PrfHandle, PrfProvider};
use super::HashAlgorithm;
use crate::error::DeriveError;
use crate::util::hex;

pub const STEP_OPEN: &str = "open algorithm provider";
pub const STEP_QUERY: &str = "query hash length";
pub const STEP_ALLOCATE: &str = "allocate derived key";
pub const STEP_DERIVE: &str = "derive PBKDF2";

/// Exact inputs for one derivation.
pub struct DerivationParameters {
    pub algorithm: HashAlgorithm,
    pub salt: Vec<u8>,
    pub iteration_count: u64,
    pub password: Zeroizing<Vec<u8>>,
}

impl fmt::Debug for DerivationParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivationParameters")
            .field("algorithm", &self.algorithm)
            .field("salt", &hex::encode(&self.salt))
            .field("iteration_count", &self.iteration_count)
            .field("password", &format_args!("<{} bytes>", self.password.len()))
            .finish()
    }
}

/// PBKDF2 output; always exactly one digest long. Wiped on drop.
pub struct DerivedKey {
    algorithm: HashAlgorithm,
    bytes: Zeroizing<Vec<u8>>,
}

impl DerivedKey {
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Spaced uppercase hex, as printed in the result line.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKey")
            .field("algorithm", &self.algorithm)
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

/// Open the HMAC for `params.algorithm`, size the output from its digest
/// length and run PBKDF2 once.
///
/// The handle is dropped on every return path. Nothing is retried and no
/// default is substituted on failure.
pub fn derive_key<P: PrfProvider>(
    provider: &P,
    params: &DerivationParameters,
) -> Result<DerivedKey, DeriveError> {
    let handle = provider
        .open(params.algorithm)
        .map_err(|status| DeriveError::AlgorithmUnavailable {
            step: STEP_OPEN,
            status,
        })?;

    let len = handle
        .hash_length()
        .map_err(|status| DeriveError::PropertyQueryFailed {
            step: STEP_QUERY,
            status,
        })?;

    let mut out = Zeroizing::new(Vec::new());
    out.try_reserve_exact(len)
        .map_err(|_| DeriveError::AllocationFailed {
            step: STEP_ALLOCATE,
            bytes: len,
        })?;
    out.resize(len, 0);

    handle
        .derive_pbkdf2(&params.password, &params.salt, params.iteration_count, &mut out)
        .map_err(|status| DeriveError::DerivationFailed {
            step: STEP_DERIVE,
            status,
        })?;

    debug!(
        algorithm = %params.algorithm,
        iterations = params.iteration_count,
        key_len = len,
        "PBKDF2 derivation complete"
    );

    Ok(DerivedKey {
        algorithm: params.algorithm,
        bytes: out,
    })
}
