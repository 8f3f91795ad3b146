// ============================================================================
// src/kdf/provider.rs – keyed-hash primitive behind the derivation engine
// ============================================================================

//! The engine never computes HMAC itself. It opens a handle for one hash
//! algorithm, asks it for the digest size and lets it run PBKDF2. Handles are
//! released when dropped, so every exit path closes them.

use std::fmt;

use hmac::Hmac;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use tracing::trace;

use super::HashAlgorithm;

/// Status code reported by a provider; displayed as `0xC000000D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(pub u32);

impl Status {
    pub const INVALID_PARAMETER: Status = Status(0xC000_000D);
    pub const NO_MEMORY: Status = Status(0xC000_0017);
    pub const BUFFER_TOO_SMALL: Status = Status(0xC000_0023);
    pub const NOT_SUPPORTED: Status = Status(0xC000_00BB);
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

/// Source of PBKDF2-capable HMAC handles.
pub trait PrfProvider {
    type Handle: PrfHandle;

    /// Acquire a handle for `algorithm`.
    fn open(&self, algorithm: HashAlgorithm) -> Result<Self::Handle, Status>;
}

/// An open HMAC algorithm. Dropping it releases the algorithm.
pub trait PrfHandle {
    /// Native output size of the hash, in bytes.
    fn hash_length(&self) -> Result<usize, Status>;

    /// Fill `out` with PBKDF2-HMAC(password, salt, iterations).
    fn derive_pbkdf2(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u64,
        out: &mut [u8],
    ) -> Result<(), Status>;
}

/// RustCrypto `pbkdf2` + `hmac` over `sha1`/`sha2`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustCryptoProvider;

#[derive(Debug)]
pub struct RustCryptoHandle {
    algorithm: HashAlgorithm,
}

impl PrfProvider for RustCryptoProvider {
    type Handle = RustCryptoHandle;

    fn open(&self, algorithm: HashAlgorithm) -> Result<Self::Handle, Status> {
        trace!(%algorithm, "algorithm handle opened");
        Ok(RustCryptoHandle { algorithm })
    }
}

impl PrfHandle for RustCryptoHandle {
    fn hash_length(&self) -> Result<usize, Status> {
        Ok(self.algorithm.digest_len())
    }

    fn derive_pbkdf2(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u64,
        out: &mut [u8],
    ) -> Result<(), Status> {
        // The RustCrypto primitive counts rounds in 32 bits.
        let rounds = u32::try_from(iterations).map_err(|_| Status::INVALID_PARAMETER)?;
        if rounds == 0 || out.is_empty() {
            return Err(Status::INVALID_PARAMETER);
        }

        let res = match self.algorithm {
            HashAlgorithm::Sha1 => pbkdf2::pbkdf2::<Hmac<Sha1>>(password, salt, rounds, out),
            HashAlgorithm::Sha256 => pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, rounds, out),
            HashAlgorithm::Sha384 => pbkdf2::pbkdf2::<Hmac<Sha384>>(password, salt, rounds, out),
            HashAlgorithm::Sha512 => pbkdf2::pbkdf2::<Hmac<Sha512>>(password, salt, rounds, out),
        };
        res.map_err(|_| Status::INVALID_PARAMETER)
    }
}

impl Drop for RustCryptoHandle {
    fn drop(&mut self) {
        trace!(algorithm = %self.algorithm, "algorithm handle released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_renders_as_hex_code() {
        assert_eq!(Status::INVALID_PARAMETER.to_string(), "0xC000000D");
    }

    #[test]
    fn zero_rounds_are_rejected() {
        let handle = RustCryptoProvider.open(HashAlgorithm::Sha256).unwrap();
        let mut out = [0u8; 32];
        assert_eq!(
            handle.derive_pbkdf2(b"pw", b"salt", 0, &mut out),
            Err(Status::INVALID_PARAMETER)
        );
    }

    #[test]
    fn rounds_beyond_32_bits_are_rejected() {
        let handle = RustCryptoProvider.open(HashAlgorithm::Sha1).unwrap();
        let mut out = [0u8; 20];
        assert_eq!(
            handle.derive_pbkdf2(b"pw", b"salt", u64::from(u32::MAX) + 1, &mut out),
            Err(Status::INVALID_PARAMETER)
        );
    }

    #[test]
    fn rfc6070_sha1_single_round() {
        let handle = RustCryptoProvider.open(HashAlgorithm::Sha1).unwrap();
        let mut out = [0u8; 20];
        handle
            .derive_pbkdf2(b"password", b"salt", 1, &mut out)
            .unwrap();
        assert_eq!(
            out,
            [
                0x0c, 0x60, 0xc8, 0x0f, 0x96, 0x1f, 0x0e, 0x71, 0xf3, 0xa9, 0xb5, 0x24, 0xaf,
                0x60, 0x12, 0x06, 0x2f, 0xe0, 0x37, 0xa6,
            ]
        );
    }
}
