// ============================================================================
// src/util/text.rs – password text to key-derivation input bytes
// ============================================================================

//! Two ways of turning the same password into bytes. [`to_utf8`] is the one
//! to use. [`to_native_bytes`] reproduces the classic mistake of hashing the
//! in-memory form of the platform's character type, which makes the derived
//! key depend on how the program was built and where it runs.

use std::ffi::OsStr;

use zeroize::Zeroizing;

use crate::config::NativeWidth;
use crate::error::EncodingError;

/// Canonical UTF-8 bytes of `password`.
///
/// Fails if the OS handed us text that is not valid Unicode, since there is
/// no lossless UTF-8 form for it.
pub fn to_utf8(password: &OsStr) -> Result<Zeroizing<Vec<u8>>, EncodingError> {
    let text = password
        .to_str()
        .ok_or_else(|| EncodingError::EncodingConversionFailed {
            reason: format!(
                "argument is not valid Unicode: '{}'",
                password.to_string_lossy()
            ),
        })?;

    let mut out = Zeroizing::new(Vec::new());
    out.try_reserve_exact(text.len())
        .map_err(|_| EncodingError::AllocationFailed {
            what: "UTF-8 password",
            bytes: text.len(),
        })?;
    out.extend_from_slice(text.as_bytes());
    Ok(out)
}

/// Raw in-memory bytes of `password` as a `width`-sized native character
/// string, with no normalisation.
///
/// * `Narrow`: one byte per character, Latin-1 (ISO-8859-1). Characters above
///   U+00FF become `?`; this is not Windows-1252, so `€` is `?` and not 0x80.
/// * `Utf16`: little-endian UTF-16 code units (`wchar_t` on Windows).
/// * `Utf32`: little-endian UTF-32 code units (`wchar_t` on Unix).
///
/// On Unix, a `Narrow` password that is not valid Unicode is passed through
/// byte for byte. The wide widths need characters, so such text is read with
/// replacement characters there.
pub fn to_native_bytes(password: &OsStr, width: NativeWidth) -> Zeroizing<Vec<u8>> {
    if width == NativeWidth::Narrow && password.to_str().is_none() {
        if let Some(raw) = raw_narrow_bytes(password) {
            return raw;
        }
    }

    let text = password.to_string_lossy();

    let bytes = match width {
        NativeWidth::Narrow => text
            .chars()
            .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
            .collect(),
        NativeWidth::Utf16 => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        NativeWidth::Utf32 => text
            .chars()
            .flat_map(|c| u32::from(c).to_le_bytes())
            .collect(),
    };

    Zeroizing::new(bytes)
}

#[cfg(unix)]
fn raw_narrow_bytes(password: &OsStr) -> Option<Zeroizing<Vec<u8>>> {
    use std::os::unix::ffi::OsStrExt;

    Some(Zeroizing::new(password.as_bytes().to_vec()))
}

#[cfg(not(unix))]
fn raw_narrow_bytes(_password: &OsStr) -> Option<Zeroizing<Vec<u8>>> {
    None
}
