//! tests/kdf_tests.rs
//! Derivation engine: golden vectors, key sizes, failure steps, handle release

mod common;

use std::cell::Cell;
use std::rc::Rc;

use pbkdf2_demo::error::DeriveError;
use pbkdf2_demo::kdf::engine::{STEP_ALLOCATE, STEP_DERIVE, STEP_OPEN, STEP_QUERY};
use pbkdf2_demo::kdf::{
    derive_key, DerivationParameters, HashAlgorithm, PrfHandle, PrfProvider, RustCryptoProvider,
    Status,
};
use zeroize::Zeroizing;

fn params(algorithm: HashAlgorithm, password: &[u8], salt: &[u8], iterations: u64) -> DerivationParameters {
    DerivationParameters {
        algorithm,
        salt: salt.to_vec(),
        iteration_count: iterations,
        password: Zeroizing::new(password.to_vec()),
    }
}

#[test]
fn sha256_golden_vector() {
    let p = params(HashAlgorithm::Sha256, b"test", &[0x00, 0x10], 1);
    let key = derive_key(&RustCryptoProvider, &p).unwrap();

    assert_eq!(key.len(), 32);
    assert_eq!(hex::encode_upper(key.as_bytes()), common::SHA256_TEST_0010_1);
    assert_eq!(key.to_hex(), common::spaced(common::SHA256_TEST_0010_1));
}

#[test]
fn golden_vectors_across_algorithms() {
    let cases: [(HashAlgorithm, &[u8], &[u8], u64, &str); 4] = [
        (
            HashAlgorithm::Sha1,
            b"password",
            b"salt",
            1,
            "0C60C80F961F0E71F3A9B524AF6012062FE037A6",
        ),
        (
            HashAlgorithm::Sha384,
            b"test",
            &[0x00, 0x10],
            2,
            "C2933753EF519A6BF88BCA46F036DD6062E88DA5A2A525B8EB965101C7C3DF6DC1F258002C63E6BB210C07458B9454E0",
        ),
        (
            HashAlgorithm::Sha512,
            b"test",
            &[0x00, 0x10],
            1,
            "319BC1F9A0A58C414E245564AE00043CFF2E33B7967B52DBA360EC23343B036B7E292B385289E46606D51D55CFA2607C205ECCB9B5BCE7B423D42198CA294E5F",
        ),
        (
            HashAlgorithm::Sha256,
            "pässword".as_bytes(),
            &[0x12, 0x34],
            10,
            "49EBDC739FC9AFC8E5BAE83F86EC6C05BC31534A8DA362FB8ECC705ED5DAA5C8",
        ),
    ];

    for (algorithm, password, salt, iterations, expected) in cases {
        let key = derive_key(&RustCryptoProvider, &params(algorithm, password, salt, iterations)).unwrap();
        assert_eq!(key.algorithm(), algorithm);
        assert_eq!(key.len(), algorithm.digest_len(), "{algorithm} key length");
        assert_eq!(hex::encode_upper(key.as_bytes()), expected, "{algorithm} mismatch");
    }
}

#[test]
fn derivation_is_reproducible() {
    let p = params(HashAlgorithm::Sha256, b"test", &[0x00, 0x10], 1000);
    let a = derive_key(&RustCryptoProvider, &p).unwrap();
    let b = derive_key(&RustCryptoProvider, &p).unwrap();
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn empty_password_and_salt_are_passed_through() {
    let key = derive_key(&RustCryptoProvider, &params(HashAlgorithm::Sha1, b"", b"", 1)).unwrap();
    assert_eq!(key.len(), 20);
}

#[test]
fn zero_iterations_surface_as_derivation_failure() {
    let err = derive_key(&RustCryptoProvider, &params(HashAlgorithm::Sha256, b"pw", b"s", 0)).unwrap_err();
    assert_eq!(
        err,
        DeriveError::DerivationFailed {
            step: STEP_DERIVE,
            status: Status::INVALID_PARAMETER,
        }
    );
}

#[test]
fn debug_output_never_shows_password_or_key() {
    let p = params(HashAlgorithm::Sha256, b"hunter2", &[0xab], 1);
    let shown = format!("{p:?}");
    assert!(!shown.contains("hunter2"));
    assert!(shown.contains("<7 bytes>"));

    let key = derive_key(&RustCryptoProvider, &p).unwrap();
    assert!(!format!("{key:?}").contains(&key.to_hex()));
}

// ----------------------------------------------------------------------------
// Scripted provider: fails at a chosen step and counts released handles
// ----------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq)]
enum FailAt {
    Nothing,
    Open,
    Query,
    HugeLength,
    Derive,
}

struct ScriptedProvider {
    fail_at: FailAt,
    released: Rc<Cell<usize>>,
}

struct ScriptedHandle {
    fail_at: FailAt,
    released: Rc<Cell<usize>>,
}

impl ScriptedProvider {
    fn new(fail_at: FailAt) -> Self {
        Self {
            fail_at,
            released: Rc::new(Cell::new(0)),
        }
    }
}

impl PrfProvider for ScriptedProvider {
    type Handle = ScriptedHandle;

    fn open(&self, _algorithm: HashAlgorithm) -> Result<ScriptedHandle, Status> {
        if self.fail_at == FailAt::Open {
            return Err(Status::NOT_SUPPORTED);
        }
        Ok(ScriptedHandle {
            fail_at: self.fail_at,
            released: Rc::clone(&self.released),
        })
    }
}

impl PrfHandle for ScriptedHandle {
    fn hash_length(&self) -> Result<usize, Status> {
        match self.fail_at {
            FailAt::Query => Err(Status::BUFFER_TOO_SMALL),
            FailAt::HugeLength => Ok(usize::MAX),
            _ => Ok(4),
        }
    }

    fn derive_pbkdf2(&self, _pw: &[u8], _salt: &[u8], _iters: u64, out: &mut [u8]) -> Result<(), Status> {
        if self.fail_at == FailAt::Derive {
            return Err(Status::NO_MEMORY);
        }
        out.fill(0x5a);
        Ok(())
    }
}

impl Drop for ScriptedHandle {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

#[test]
fn each_failing_step_is_named_and_handle_is_released() {
    let p = params(HashAlgorithm::Sha256, b"pw", b"salt", 1);

    let cases = [
        (
            FailAt::Open,
            DeriveError::AlgorithmUnavailable {
                step: STEP_OPEN,
                status: Status::NOT_SUPPORTED,
            },
            0,
        ),
        (
            FailAt::Query,
            DeriveError::PropertyQueryFailed {
                step: STEP_QUERY,
                status: Status::BUFFER_TOO_SMALL,
            },
            1,
        ),
        (
            FailAt::HugeLength,
            DeriveError::AllocationFailed {
                step: STEP_ALLOCATE,
                bytes: usize::MAX,
            },
            1,
        ),
        (
            FailAt::Derive,
            DeriveError::DerivationFailed {
                step: STEP_DERIVE,
                status: Status::NO_MEMORY,
            },
            1,
        ),
    ];

    for (fail_at, expected, releases) in cases {
        let provider = ScriptedProvider::new(fail_at);
        let err = derive_key(&provider, &p).unwrap_err();
        assert_eq!(err, expected);
        assert_eq!(provider.released.get(), releases, "releases after {}", err.step());
    }
}

#[test]
fn successful_derivation_releases_handle_and_uses_reported_length() {
    let provider = ScriptedProvider::new(FailAt::Nothing);
    let key = derive_key(&provider, &params(HashAlgorithm::Sha1, b"pw", b"salt", 1)).unwrap();

    assert_eq!(key.as_bytes(), &[0x5a; 4]);
    assert_eq!(provider.released.get(), 1);
}
