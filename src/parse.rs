use crate::digit::to_digit;
use crate::error::{Error, ErrorCode, Result};
use crate::math::{small, DigitVec};

// PARSERS
// -------

/// Parse a decimal integer matching `-?[0-9]+`.
///
/// Returns the sign (true for non-negative) and the normalized digits in
/// little-endian order. Leading zeros are dropped and `-0` parses to a
/// non-negative zero.
pub(crate) fn parse_decimal(s: &[u8]) -> Result<(bool, DigitVec)> {
    let (negative, body) = match s.split_first() {
        None => return Err(Error::syntax(ErrorCode::EmptyNumber, 0)),
        Some((b'-', rest)) => (true, rest),
        Some(_) => (false, s),
    };
    if body.is_empty() {
        return Err(Error::syntax(ErrorCode::LoneMinusSign, 1));
    }

    let offset = negative as usize;
    let mut digits = DigitVec::with_capacity(body.len());
    for (i, &c) in body.iter().enumerate() {
        match to_digit(c) {
            Some(d) => digits.push(d),
            None => return Err(Error::syntax(ErrorCode::InvalidDigit, offset + i + 1)),
        }
    }
    digits.reverse();
    small::normalize(&mut digits);

    let positive = !negative || small::is_zero(&digits);
    Ok((positive, digits))
}

/// Split the output of an integer formatter into sign and digits.
///
/// The input must already be a well-formed `-?[0-9]+` without leading zeros,
/// as produced by `itoa`.
pub(crate) fn split_formatted(s: &str) -> (bool, DigitVec) {
    let (positive, body) = match s.as_bytes().split_first() {
        Some((b'-', rest)) => (false, rest),
        _ => (true, s.as_bytes()),
    };
    let mut digits: DigitVec = body.iter().rev().map(|&c| c - b'0').collect();
    small::normalize(&mut digits);
    (positive, digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lib::vec;

    #[test]
    fn parse_decimal_test() {
        assert_eq!(parse_decimal(b"0").unwrap(), (true, vec![0]));
        assert_eq!(parse_decimal(b"-0").unwrap(), (true, vec![0]));
        assert_eq!(parse_decimal(b"000").unwrap(), (true, vec![0]));
        assert_eq!(parse_decimal(b"00120").unwrap(), (true, vec![0, 2, 1]));
        assert_eq!(parse_decimal(b"-0045").unwrap(), (false, vec![5, 4]));
    }

    #[test]
    fn parse_decimal_error_test() {
        let err = parse_decimal(b"").unwrap_err();
        assert_eq!(err.code(), &ErrorCode::EmptyNumber);
        assert_eq!(err.column(), 0);

        let err = parse_decimal(b"-").unwrap_err();
        assert_eq!(err.code(), &ErrorCode::LoneMinusSign);
        assert_eq!(err.column(), 1);

        let err = parse_decimal(b"12a4").unwrap_err();
        assert_eq!(err.code(), &ErrorCode::InvalidDigit);
        assert_eq!(err.column(), 3);

        let err = parse_decimal(b"-1-2").unwrap_err();
        assert_eq!(err.code(), &ErrorCode::InvalidDigit);
        assert_eq!(err.column(), 3);

        let err = parse_decimal(b"+12").unwrap_err();
        assert_eq!(err.column(), 1);

        let err = parse_decimal(b" 12").unwrap_err();
        assert_eq!(err.column(), 1);
    }

    #[test]
    fn split_formatted_test() {
        assert_eq!(split_formatted("0"), (true, vec![0]));
        assert_eq!(split_formatted("907"), (true, vec![7, 0, 9]));
        assert_eq!(split_formatted("-128"), (false, vec![8, 2, 1]));
    }
}
