//! String comparison, hex conversion and encoding validation.

use core::cmp::Ordering;

use alloc::string::String;

use crate::error::{Error, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Compares two optional strings; `None` sorts before any string.
#[inline]
pub fn compare(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.cmp(&b)
}

/// Returns `true` if both strings are `None` or both are equal.
#[inline]
pub fn equal(a: Option<&str>, b: Option<&str>) -> bool {
    a == b
}

/// Returns the rest of `s` after `prefix`, or `None` if `s` does not start
/// with it.
#[inline]
pub fn strip_prefix<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    s.strip_prefix(prefix)
}

/// Writes the lowercase hex representation of `raw` into `hex`.
///
/// # Errors
///
/// Fails with [`Error::BufferTooSmall`] if `hex` is shorter than twice `raw`.
pub fn to_hex(raw: &[u8], hex: &mut [u8]) -> Result<()> {
    let needed = raw.len() * 2;
    if hex.len() < needed {
        return Err(Error::BufferTooSmall {
            needed,
            actual: hex.len(),
        });
    }

    for (byte, out) in raw.iter().zip(hex.chunks_exact_mut(2)) {
        out[0] = HEX_DIGITS[usize::from(byte >> 4)];
        out[1] = HEX_DIGITS[usize::from(byte & 0x0f)];
    }
    Ok(())
}

/// Returns the lowercase hex representation of `raw`.
pub fn to_hex_string(raw: &[u8]) -> String {
    let mut hex = String::with_capacity(raw.len() * 2);
    for byte in raw {
        hex.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
        hex.push(char::from(HEX_DIGITS[usize::from(byte & 0x0f)]));
    }
    hex
}

#[inline]
const fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Decodes the hex string `hex` into `raw`. Upper and lower case digits are
/// accepted.
///
/// # Errors
///
/// Fails if `hex` has an odd length, contains a non-hex byte, or `raw` is
/// shorter than half of `hex`. `raw` may be partially written on failure.
pub fn from_hex(hex: &[u8], raw: &mut [u8]) -> Result<()> {
    if hex.len() % 2 != 0 {
        return Err(Error::HexLength(hex.len()));
    }
    let needed = hex.len() / 2;
    if raw.len() < needed {
        return Err(Error::BufferTooSmall {
            needed,
            actual: raw.len(),
        });
    }

    for (i, (pair, out)) in hex.chunks_exact(2).zip(raw.iter_mut()).enumerate() {
        let high = hex_value(pair[0]).ok_or(Error::InvalidHex { offset: i * 2 })?;
        let low = hex_value(pair[1]).ok_or(Error::InvalidHex { offset: i * 2 + 1 })?;
        *out = (high << 4) | low;
    }
    Ok(())
}

/// Returns the length of the longest prefix of `bytes` made of 7-bit ASCII
/// characters other than NUL.
pub fn verify_ascii(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .position(|&b| b == 0x00 || b > 0x7f)
        .unwrap_or(bytes.len())
}

/// Returns the length of the longest prefix of `bytes` that is well-formed
/// UTF-8 and contains no NUL.
///
/// Overlong encodings, surrogates and code points above U+10FFFF end the
/// prefix, and so does a sequence truncated by the end of the input.
pub fn verify_utf8(bytes: &[u8]) -> usize {
    let valid = match core::str::from_utf8(bytes) {
        Ok(s) => s.len(),
        Err(e) => e.valid_up_to(),
    };
    // NUL is a single byte, never part of a multi-byte sequence.
    bytes[..valid]
        .iter()
        .position(|&b| b == 0x00)
        .unwrap_or(valid)
}
