// ============================================================================
// src/kdf/algorithm.rs – HMAC hash selection
// ============================================================================

use std::fmt;

use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

/// Hash function underneath the PBKDF2 HMAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

/// Selector `n` picks entry `n - 1`. Slots 4 and 5 are both SHA-512; the
/// duplicate is kept so existing invocations keep producing the same keys.
const SELECTOR_TABLE: [HashAlgorithm; 5] = [
    HashAlgorithm::Sha1,
    HashAlgorithm::Sha256,
    HashAlgorithm::Sha384,
    HashAlgorithm::Sha512,
    HashAlgorithm::Sha512,
];

impl HashAlgorithm {
    /// Look up a 1-based selector; `None` outside `1..=5`.
    pub fn from_selector(selector: i64) -> Option<Self> {
        let idx = usize::try_from(selector).ok()?.checked_sub(1)?;
        SELECTOR_TABLE.get(idx).copied()
    }

    /// Identifier printed in the result line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
        }
    }

    /// Native digest size in bytes; this is also the derived key length.
    pub fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => <Sha1 as Digest>::output_size(),
            Self::Sha256 => <Sha256 as Digest>::output_size(),
            Self::Sha384 => <Sha384 as Digest>::output_size(),
            Self::Sha512 => <Sha512 as Digest>::output_size(),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
