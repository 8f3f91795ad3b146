// ============================================================================
// src/ui.rs – result, usage and error text
// ============================================================================

use std::ffi::OsStr;
use std::time::Duration;

use console::style;

use crate::cli::USAGE;
use crate::kdf::DerivedKey;
use crate::mode::Salt;
use crate::util::stopwatch::rounded_millis;

/// Everything printed after a successful derivation.
#[derive(Debug)]
pub struct Report<'a> {
    pub salt: &'a Salt,
    pub iteration_count: u64,
    pub password: &'a OsStr,
    pub key: &'a DerivedKey,
    pub duration: Duration,
}

impl Report<'_> {
    /// The parameter/result line followed by the duration line.
    pub fn render(&self) -> String {
        format!(
            "HashType: {}, Salt: {}, IterationCount: {}, Password: '{}', PBKDF2: {}\nDuration: {} ms\n",
            self.key.algorithm(),
            self.salt,
            self.iteration_count,
            self.password.to_string_lossy(),
            self.key.to_hex(),
            rounded_millis(self.duration),
        )
    }
}

/// One failure line for stderr; red when stderr is a terminal.
pub fn error_line(message: &str) -> String {
    format!("{}\n", style(message).red().for_stderr())
}

/// Reason plus the usage block, for stderr.
pub fn usage(reason: &str) -> String {
    format!("{}\n{USAGE}\n", style(reason).red().for_stderr())
}
