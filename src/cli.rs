// ============================================================================
// src/cli.rs – positional command-line surface
// ============================================================================

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

use crate::config::NativeWidth;

pub const USAGE: &str = "\
Usage: pbkdf2 <hashType> <salt> <iterationCount> <password> [doItRight]
       hashType: 1=SHA-1, 2=SHA-256, 3=SHA-384, 4=SHA-512, 5=SHA-512
       doItRight: If present the salt is interpreted as a byte array and
                  the password is converted to UTF-8 before hashing.
                  Otherwise the salt is interpreted as an integer and
                  the password is used in its native encoding.";

/// Compute PBKDF2 the right way (hex salt, UTF-8 password) or the wrong way
/// (integer salt, native password bytes).
///
/// Arguments are taken as raw OS strings so malformed input is reported by
/// the validators, not by the parser. Options go before `hashType`; once the
/// first positional is seen every later word is a value, leading `-` included.
#[derive(Parser, Debug)]
#[command(name = "pbkdf2", version, allow_negative_numbers = true)]
pub struct Cli {
    /// 1=SHA-1, 2=SHA-256, 3=SHA-384, 4=SHA-512, 5=SHA-512
    #[arg(value_name = "hashType", allow_hyphen_values = true)]
    pub hash_type: OsString,

    /// Hex bytes with doItRight, otherwise a decimal integer
    #[arg(value_name = "salt", allow_hyphen_values = true)]
    pub salt: OsString,

    /// 1 to 5000000
    #[arg(value_name = "iterationCount", allow_hyphen_values = true)]
    pub iteration_count: OsString,

    #[arg(value_name = "password", allow_hyphen_values = true)]
    pub password: OsString,

    /// Any value selects correct salt and password handling
    #[arg(value_name = "doItRight", allow_hyphen_values = true, trailing_var_arg = true)]
    pub do_it_right: Vec<OsString>,

    /// Character width used for the naive password bytes
    #[arg(long, value_enum, value_name = "WIDTH")]
    pub native_width: Option<NativeWidth>,

    /// Log more (-v info, -vv debug, -vvv trace); PBKDF2_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Outcome of argument parsing that does not lead to a derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interrupt {
    /// `--help` or `--version`: print to stdout and exit successfully.
    Info(String),
    /// Malformed command line: one-line reason for stderr.
    Usage(String),
}

pub fn parse<I, T>(args: I) -> Result<Cli, Interrupt>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            Interrupt::Info(err.render().to_string())
        }
        ErrorKind::MissingRequiredArgument => Interrupt::Usage("Not enough arguments".into()),
        _ => Interrupt::Usage(first_line(&err.to_string())),
    })
}

fn first_line(rendered: &str) -> String {
    rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}
