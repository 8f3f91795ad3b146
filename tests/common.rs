//! tests/common.rs
//! Shared inputs and helpers for the integration tests

use pbkdf2_demo::cmd;

/// Reference PBKDF2-HMAC-SHA256("test", [0x00, 0x10], 1), from Python's hashlib.
#[allow(dead_code)]
pub const SHA256_TEST_0010_1: &str =
    "9DF71D97BC084F5AEA3DAD7CB50B9E167B5587D8B85EEA4F184100859830F7AA";

/// Insert the blank separators the result line uses.
#[allow(dead_code)]
pub fn spaced(hex: &str) -> String {
    hex.as_bytes()
        .chunks(2)
        .map(|pair| std::str::from_utf8(pair).unwrap())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run the CLI in-process and capture exit code, stdout and stderr.
#[allow(dead_code)]
pub fn run_cli(args: &[&str]) -> (u8, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv = std::iter::once("pbkdf2").chain(args.iter().copied());
    let code = cmd::run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}
