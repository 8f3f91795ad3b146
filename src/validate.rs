// ============================================================================
// src/validate.rs – bounded integer arguments
// ============================================================================

use std::num::IntErrorKind;

use tracing::trace;

use crate::consts::{
    MAX_HASH_TYPE, MAX_ITERATION_COUNT, MAX_SALT, MIN_HASH_TYPE, MIN_ITERATION_COUNT, MIN_SALT,
};
use crate::error::ValidationError;
use crate::kdf::HashAlgorithm;

/// Parse `raw` as a decimal integer and check it against `[min, max]`.
///
/// Surrounding whitespace and a leading sign are accepted. Numbers too large
/// for 64 bits count as out of range, not as non-numeric.
pub fn parse_bounded_integer(
    name: &'static str,
    raw: &str,
    min: i64,
    max: i64,
) -> Result<i64, ValidationError> {
    let text = raw.trim();

    let value = match text.parse::<i64>() {
        Ok(v) => v,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => ValidationError::AboveMaximum {
                    name,
                    max,
                    value: text.to_string(),
                },
                IntErrorKind::NegOverflow => ValidationError::BelowMinimum {
                    name,
                    min,
                    value: text.to_string(),
                },
                _ => ValidationError::NotAnInteger {
                    name,
                    text: raw.to_string(),
                },
            })
        }
    };

    if value < min {
        return Err(ValidationError::BelowMinimum {
            name,
            min,
            value: value.to_string(),
        });
    }
    if value > max {
        return Err(ValidationError::AboveMaximum {
            name,
            max,
            value: value.to_string(),
        });
    }

    trace!(argument = name, value, "argument accepted");
    Ok(value)
}

/// `hashType`: 1..=5, mapped through the selector table.
pub fn hash_type(raw: &str) -> Result<HashAlgorithm, ValidationError> {
    let selector = parse_bounded_integer("hashType", raw, MIN_HASH_TYPE, MAX_HASH_TYPE)?;
    // In range, so the table lookup cannot miss.
    HashAlgorithm::from_selector(selector).ok_or_else(|| ValidationError::AboveMaximum {
        name: "hashType",
        max: MAX_HASH_TYPE,
        value: selector.to_string(),
    })
}

/// Integer salt used by the naive mode: 0..=i32::MAX.
pub fn integer_salt(raw: &str) -> Result<i32, ValidationError> {
    let value = parse_bounded_integer("salt", raw, MIN_SALT, MAX_SALT)?;
    i32::try_from(value).map_err(|_| ValidationError::AboveMaximum {
        name: "salt",
        max: MAX_SALT,
        value: value.to_string(),
    })
}

/// `iterationCount`: 1..=5,000,000, widened to the 64-bit counter the engine uses.
pub fn iteration_count(raw: &str) -> Result<u64, ValidationError> {
    let value = parse_bounded_integer(
        "iterationCount",
        raw,
        MIN_ITERATION_COUNT,
        MAX_ITERATION_COUNT,
    )?;
    u64::try_from(value).map_err(|_| ValidationError::BelowMinimum {
        name: "iterationCount",
        min: MIN_ITERATION_COUNT,
        value: value.to_string(),
    })
}
