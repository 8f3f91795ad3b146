// ============================================================================
// src/config.rs – runtime configuration and logging setup
// ============================================================================

use std::fmt;
use std::io;

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::consts::LOG_ENV;

/// How salt and password text become derivation input. Fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Hex byte-array salt, UTF-8 password.
    Correct,
    /// 32-bit integer salt, native in-memory password bytes.
    Naive,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => f.write_str("correct"),
            Self::Naive => f.write_str("naive"),
        }
    }
}

/// Width of the platform's native character type, used by the naive password path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NativeWidth {
    /// Single byte per character, Latin-1 (ISO-8859-1); anything above
    /// U+00FF becomes `?`.
    Narrow,
    /// 16-bit `wchar_t` (Windows).
    Utf16,
    /// 32-bit `wchar_t` (Unix).
    Utf32,
}

impl NativeWidth {
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            Self::Utf16
        } else {
            Self::Utf32
        }
    }
}

impl Default for NativeWidth {
    fn default() -> Self {
        Self::platform_default()
    }
}

/// Settings for one invocation, resolved once from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: Mode,
    pub native_width: NativeWidth,
    pub verbosity: u8,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let mode = if cli.do_it_right.is_empty() {
            Mode::Naive
        } else {
            Mode::Correct
        };
        Self {
            mode,
            native_width: cli.native_width.unwrap_or_default(),
            verbosity: cli.verbose,
        }
    }
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr `tracing` subscriber. `PBKDF2_LOG` wins over `-v`.
pub fn init_tracing(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_directive(verbosity)))
        .map_err(|e| anyhow!("invalid log filter: {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("install tracing subscriber: {e}"))
}
