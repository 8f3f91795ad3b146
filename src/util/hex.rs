// ============================================================================
// src/util/hex.rs – uppercase hex text for salts and derived keys
// ============================================================================

use crate::error::HexError;

/// Render bytes as uppercase hex pairs separated by single blanks (`"0A FF 10"`).
///
/// Empty input yields an empty string.
pub fn encode(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| ::hex::encode_upper([*b]))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode an unseparated run of hex digits (either case) into bytes.
///
/// An odd number of digits is accepted: the first digit becomes the low
/// nibble of a leading byte whose high nibble is zero, so `"A"` decodes to
/// `[0x0A]` and `"123"` to `[0x01, 0x23]`.
pub fn decode(text: &str) -> Result<Vec<u8>, HexError> {
    let digits = text.chars().count();
    let mut out = Vec::with_capacity(digits.div_ceil(2));

    let mut low_nibble = digits % 2 == 1;
    let mut high = 0u8;

    for (idx, ch) in text.chars().enumerate() {
        let value = ch
            .to_digit(16)
            .ok_or_else(|| HexError::InvalidHexCharacter {
                character: ch,
                position: idx + 1,
                input: text.to_string(),
            })? as u8;

        if low_nibble {
            out.push(high | value);
            high = 0;
        } else {
            high = value << 4;
        }
        low_nibble = !low_nibble;
    }

    Ok(out)
}
