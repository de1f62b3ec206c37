//! Numeric parsing for integer literals.
//!
//! Operates on a borrowed digit slice from the source buffer — no
//! allocation, no mutation of the source bytes.

/// Why an integer literal failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IntParseError {
    /// The value exceeds the 32-bit signed range.
    Overflow,
    /// The digit slice was empty.
    Empty,
}

/// Parse a run of ASCII decimal digits into an `i32`.
///
/// The caller guarantees every byte in `digits` is `b'0'..=b'9'` (the
/// scanner's maximal-munch digit run). Accumulates digit-by-digit with
/// checked arithmetic so overflow is detected exactly at the 32-bit
/// boundary: `2147483647` parses, `2147483648` does not.
pub(crate) fn parse_i32(digits: &[u8]) -> Result<i32, IntParseError> {
    if digits.is_empty() {
        return Err(IntParseError::Empty);
    }

    let mut value: i32 = 0;
    for &byte in digits {
        debug_assert!(byte.is_ascii_digit(), "non-digit byte {byte:#04x}");
        let digit = i32::from(byte - b'0');
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or(IntParseError::Overflow)?;
    }
    Ok(value)
}
