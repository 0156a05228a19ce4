//! Helpers to convert between ASCII characters and decimal digits.

use crate::math::Digit;

// Convert an ASCII byte to its digit value.
#[inline]
pub(crate) fn to_digit(c: u8) -> Option<Digit> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        _ => None,
    }
}

// Convert a digit value to its ASCII byte.
#[inline]
pub(crate) fn to_char(d: Digit) -> char {
    debug_assert!(d < 10);
    (b'0' + d) as char
}

// Accumulate a digit into a native magnitude, or None on overflow.
#[inline]
pub(crate) fn add_digit(value: u128, digit: Digit) -> Option<u128> {
    value.checked_mul(10)?.checked_add(digit as u128)
}
