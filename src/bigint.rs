//! The `BigInt` type and its arithmetic.

use crate::error::{Error, ErrorCode, Result};
use crate::lib::{cmp, vec, String};
use crate::math::{large, small, Digit, DigitVec};
use crate::parse::parse_decimal;

bitflags::bitflags! {
    /// Domain violations recorded on a [`BigInt`] by the operation that
    /// produced it.
    ///
    /// A `BigInt` with any flag set is *invalid*: it has no numeric value, it
    /// prints as a sentinel (`#DIV/0` or `#DOMAIN`), and every operation that
    /// takes it as an operand yields another invalid `BigInt` carrying the
    /// union of both operands' flags.
    #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    pub struct ErrorFlags: u8 {
        /// A division or modulo had a zero divisor.
        const DIV_ZERO = 1;
        /// A modulo had a negative operand.
        const DOMAIN = 1 << 1;
    }
}

impl ErrorFlags {
    /// The error code of the flagged condition, division by zero first.
    pub fn code(self) -> Option<ErrorCode> {
        if self.contains(ErrorFlags::DIV_ZERO) {
            Some(ErrorCode::DivisionByZero)
        } else if self.contains(ErrorFlags::DOMAIN) {
            Some(ErrorCode::Domain)
        } else {
            None
        }
    }

    pub(crate) fn sentinel(self) -> &'static str {
        if self.contains(ErrorFlags::DIV_ZERO) {
            "#DIV/0"
        } else {
            "#DOMAIN"
        }
    }
}

/// An arbitrary-precision signed integer.
///
/// Stored in sign-magnitude form: one decimal digit per element,
/// least significant first, plus a sign flag. Zero is never negative.
///
/// ```
/// use decint::BigInt;
///
/// let a = BigInt::parse("-1000000000").unwrap();
/// let b = BigInt::from(1);
/// assert_eq!(a - b, "-1000000001");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// Little-endian decimal digits, normalized.
    pub(crate) digits: DigitVec,
    /// True for zero and positive numbers.
    pub(crate) positive: bool,
    pub(crate) errors: ErrorFlags,
}

// CONSTRUCTION
// ------------

impl BigInt {
    /// The number zero.
    #[inline]
    pub fn zero() -> BigInt {
        BigInt::from_parts(true, vec![0])
    }

    /// The number one.
    #[inline]
    pub fn one() -> BigInt {
        BigInt::from_parts(true, vec![1])
    }

    /// Parse a decimal integer matching `-?[0-9]+`.
    ///
    /// Leading zeros are ignored and `-0` is the same as `0`. Anything else,
    /// including surrounding whitespace, a leading `+`, an empty string or a
    /// lone `-`, is rejected with a syntax error that reports the column of
    /// the offending character.
    ///
    /// ```
    /// use decint::BigInt;
    ///
    /// assert_eq!(BigInt::parse("-00042").unwrap(), -42);
    ///
    /// let err = BigInt::parse("12x4").unwrap_err();
    /// assert!(err.is_syntax());
    /// assert_eq!(err.column(), 3);
    /// ```
    pub fn parse(s: &str) -> Result<BigInt> {
        let (positive, digits) = parse_decimal(s.as_bytes())?;
        Ok(BigInt::from_parts(positive, digits))
    }

    /// Build from a sign and little-endian digits, normalizing both.
    pub(crate) fn from_parts(positive: bool, mut digits: DigitVec) -> BigInt {
        small::normalize(&mut digits);
        let positive = positive || small::is_zero(&digits);
        BigInt {
            digits,
            positive,
            errors: ErrorFlags::empty(),
        }
    }

    /// An invalid value carrying `errors`.
    #[cold]
    pub(crate) fn invalid(errors: ErrorFlags) -> BigInt {
        debug_assert!(!errors.is_empty());
        BigInt {
            digits: vec![0],
            positive: true,
            errors,
        }
    }
}

impl Default for BigInt {
    #[inline]
    fn default() -> Self {
        BigInt::zero()
    }
}

// PROPERTIES
// ----------

impl BigInt {
    /// Returns false if the operation that produced this value divided by
    /// zero or left the modulo domain.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The domain violations recorded on this value.
    #[inline]
    pub fn error_flags(&self) -> ErrorFlags {
        self.errors
    }

    /// The error recorded on this value, if any.
    pub fn error(&self) -> Option<Error> {
        self.errors.code().map(Error::new)
    }

    /// Turn an invalid value into the error it carries.
    ///
    /// ```
    /// use decint::BigInt;
    ///
    /// let ok = (BigInt::from(9) / BigInt::from(2)).into_result().unwrap();
    /// assert_eq!(ok, 5);
    ///
    /// let err = (BigInt::from(9) % BigInt::from(-2)).into_result().unwrap_err();
    /// assert!(err.is_arithmetic());
    /// ```
    pub fn into_result(self) -> Result<BigInt> {
        match self.errors.code() {
            None => Ok(self),
            Some(code) => Err(Error::new(code)),
        }
    }

    /// Returns true if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.is_valid() && small::is_zero(&self.digits)
    }

    /// Returns true if the value is strictly greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.is_valid() && self.positive && !small::is_zero(&self.digits)
    }

    /// Returns true if the value is strictly less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.is_valid() && !self.positive
    }

    /// Returns `-1`, `0` or `1` according to the sign of the value.
    ///
    /// Invalid values report `0`.
    pub fn signum(&self) -> i8 {
        if self.is_negative() {
            -1
        } else if self.is_positive() {
            1
        } else {
            0
        }
    }

    /// The number of decimal digits of the magnitude. Zero has one digit.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// The absolute value.
    pub fn abs(&self) -> BigInt {
        let mut abs = self.clone();
        abs.positive = true;
        abs
    }

    /// The decimal digits of the magnitude, without any sign.
    ///
    /// ```
    /// use decint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-1207).magnitude(), "1207");
    /// ```
    pub fn magnitude(&self) -> String {
        if !self.is_valid() {
            return String::from(self.errors.sentinel());
        }
        self.digits
            .iter()
            .rev()
            .map(|&d| crate::digit::to_char(d))
            .collect()
    }

    /// Flags carried into an operation by invalid operands.
    #[inline]
    fn poison(&self, rhs: &BigInt) -> Option<ErrorFlags> {
        if self.is_valid() && rhs.is_valid() {
            None
        } else {
            Some(self.errors | rhs.errors)
        }
    }

    #[inline]
    fn normalize_sign(&mut self) {
        if small::is_zero(&self.digits) {
            self.positive = true;
        }
    }
}

// ADDITION / SUBTRACTION
// ----------------------

impl BigInt {
    /// AddAssign.
    pub(crate) fn iadd(&mut self, rhs: &BigInt) {
        if let Some(errors) = self.poison(rhs) {
            *self = BigInt::invalid(errors);
            return;
        }
        self.iadd_signed(&rhs.digits, rhs.positive);
    }

    /// SubAssign, as the addition of the negated operand.
    pub(crate) fn isub(&mut self, rhs: &BigInt) {
        if let Some(errors) = self.poison(rhs) {
            *self = BigInt::invalid(errors);
            return;
        }
        let negated = !rhs.positive || small::is_zero(&rhs.digits);
        self.iadd_signed(&rhs.digits, negated);
    }

    /// Add a signed magnitude to `self`.
    ///
    /// Equal signs add the magnitudes and keep the sign. Differing signs
    /// subtract the smaller magnitude from the larger one, and the result
    /// takes the sign of whichever operand had the larger magnitude. With
    /// subtraction routed through a negated operand, this covers all four
    /// cases of `+`/`-` over the two signs.
    fn iadd_signed(&mut self, digits: &[Digit], positive: bool) {
        if self.positive == positive {
            large::iadd(&mut self.digits, digits);
        } else if large::greater_equal(&self.digits, digits) {
            large::isub(&mut self.digits, digits);
        } else {
            self.digits = large::sub(digits, &self.digits);
            self.positive = positive;
        }
        self.normalize_sign();
    }

    /// Add one, returning `self` (pre-increment).
    ///
    /// ```
    /// use decint::BigInt;
    ///
    /// let mut n = BigInt::from(-1);
    /// assert_eq!(*n.increment(), 0);
    /// ```
    pub fn increment(&mut self) -> &mut Self {
        self.iadd(&BigInt::one());
        self
    }

    /// Subtract one, returning `self` (pre-decrement).
    pub fn decrement(&mut self) -> &mut Self {
        self.isub(&BigInt::one());
        self
    }

    /// Add one, returning the previous value (post-increment).
    pub fn post_increment(&mut self) -> BigInt {
        let prev = self.clone();
        self.increment();
        prev
    }

    /// Subtract one, returning the previous value (post-decrement).
    pub fn post_decrement(&mut self) -> BigInt {
        let prev = self.clone();
        self.decrement();
        prev
    }
}

// MULTIPLICATION
// --------------

impl BigInt {
    /// Mul, with the `× 0` and `× ±1` fast paths.
    pub(crate) fn mul_ref(&self, rhs: &BigInt) -> BigInt {
        if let Some(errors) = self.poison(rhs) {
            return BigInt::invalid(errors);
        }
        if small::is_zero(&self.digits) || small::is_zero(&rhs.digits) {
            return BigInt::zero();
        }

        let positive = self.positive == rhs.positive;
        let digits = if small::is_one(&rhs.digits) {
            self.digits.clone()
        } else if small::is_one(&self.digits) {
            rhs.digits.clone()
        } else {
            large::mul(&self.digits, &rhs.digits)
        };
        BigInt::from_parts(positive, digits)
    }
}

// DIVISION / MODULO
// -----------------

impl BigInt {
    /// Div, rounding the magnitude of the quotient half up.
    ///
    /// The quotient is bumped away from zero whenever twice the remainder is
    /// at least the divisor, so `7 / 2 == 4`, `5 / 2 == 3`, `7 / 3 == 2` and
    /// `-7 / 2 == -4`.
    pub(crate) fn div_round(&self, rhs: &BigInt) -> BigInt {
        if let Some(errors) = self.poison(rhs) {
            return BigInt::invalid(errors);
        }
        if small::is_zero(&rhs.digits) {
            return BigInt::invalid(ErrorFlags::DIV_ZERO);
        }

        let (mut quotient, rem) = large::div_rem(&self.digits, &rhs.digits);
        if large::greater_equal(&small::mul(&rem, 2), &rhs.digits) {
            small::iadd(&mut quotient, 1);
        }
        BigInt::from_parts(self.positive == rhs.positive, quotient)
    }

    /// Rem, defined over non-negative operands only.
    ///
    /// A negative operand is a domain error, which takes precedence over a
    /// zero divisor.
    pub(crate) fn rem_ref(&self, rhs: &BigInt) -> BigInt {
        if let Some(errors) = self.poison(rhs) {
            return BigInt::invalid(errors);
        }
        if !self.positive || !rhs.positive {
            return BigInt::invalid(ErrorFlags::DOMAIN);
        }
        if small::is_zero(&rhs.digits) {
            return BigInt::invalid(ErrorFlags::DIV_ZERO);
        }

        let (_, rem) = large::div_rem(&self.digits, &rhs.digits);
        BigInt::from_parts(true, rem)
    }

    /// Divide, rounding the quotient half up, or fail on a zero divisor.
    ///
    /// ```
    /// use decint::BigInt;
    ///
    /// assert_eq!(BigInt::from(7).checked_div(&BigInt::from(2)).unwrap(), 4);
    /// assert!(BigInt::from(7).checked_div(&BigInt::zero()).is_err());
    /// ```
    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt> {
        self.div_round(rhs).into_result()
    }

    /// Remainder of two non-negative values, or fail on a negative operand
    /// or a zero divisor.
    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt> {
        self.rem_ref(rhs).into_result()
    }

    /// Truncating division: the quotient rounded toward zero, and the
    /// remainder with the sign of `self`, such that
    /// `self == quotient * rhs + remainder`.
    ///
    /// Unlike `%`, this accepts negative operands.
    ///
    /// ```
    /// use decint::BigInt;
    ///
    /// let (q, r) = BigInt::from(-7).div_rem_trunc(&BigInt::from(2)).unwrap();
    /// assert_eq!((q, r), (BigInt::from(-3), BigInt::from(-1)));
    /// ```
    pub fn div_rem_trunc(&self, rhs: &BigInt) -> Result<(BigInt, BigInt)> {
        if let Some(code) = self.poison(rhs).and_then(ErrorFlags::code) {
            return Err(Error::new(code));
        }
        if small::is_zero(&rhs.digits) {
            return Err(Error::new(ErrorCode::DivisionByZero));
        }

        let (quotient, rem) = large::div_rem(&self.digits, &rhs.digits);
        Ok((
            BigInt::from_parts(self.positive == rhs.positive, quotient),
            BigInt::from_parts(self.positive, rem),
        ))
    }
}

// EXPONENTIATION
// --------------

impl BigInt {
    /// Raise to the power `exp`.
    ///
    /// `x ^ 0` is 1 for every `x`, including 0. A negative exponent is the
    /// reciprocal of the positive power, rounded the same way as `/`:
    /// `±1` keeps its magnitude, `2 ^ -1` rounds 0.5 up to 1, every other
    /// base rounds to 0, and `0 ^ -n` is a division by zero.
    ///
    /// ```
    /// use decint::BigInt;
    ///
    /// assert_eq!(BigInt::from(123).pow(&BigInt::from(4)), 228886641);
    /// assert_eq!(BigInt::from(-2).pow(&BigInt::from(3)), -8);
    /// assert_eq!(BigInt::from(10).pow(&BigInt::from(-2)), 0);
    /// ```
    pub fn pow(&self, exp: &BigInt) -> BigInt {
        if let Some(errors) = self.poison(exp) {
            return BigInt::invalid(errors);
        }
        if !exp.positive {
            return self.pow_reciprocal(exp);
        }
        if small::is_zero(&exp.digits) {
            return BigInt::one();
        }
        if small::is_one(&exp.digits)
            || small::is_zero(&self.digits)
            || (self.positive && small::is_one(&self.digits))
        {
            return self.clone();
        }

        let positive = self.positive || !small::is_odd(&exp.digits);
        let digits = if small::is_one(&self.digits) {
            vec![1]
        } else {
            large::pow(&self.digits, exp.digits.clone())
        };
        BigInt::from_parts(positive, digits)
    }

    /// `1 / self ^ |exp|` for a negative `exp`, rounded half up.
    fn pow_reciprocal(&self, exp: &BigInt) -> BigInt {
        if small::is_zero(&self.digits) {
            return BigInt::invalid(ErrorFlags::DIV_ZERO);
        }
        let odd = small::is_odd(&exp.digits);
        let positive = self.positive || !odd;
        if small::is_one(&self.digits) {
            BigInt::from_parts(positive, vec![1])
        } else if self.digits == [2] && small::is_one(&exp.digits) {
            BigInt::from_parts(positive, vec![1])
        } else {
            BigInt::zero()
        }
    }

    /// Raise to a native power.
    #[inline]
    pub fn pow_u32(&self, exp: u32) -> BigInt {
        self.pow(&BigInt::from(exp))
    }

    /// Raise to the power `exp`, or fail on `0 ^ -n` or an invalid operand.
    pub fn checked_pow(&self, exp: &BigInt) -> Result<BigInt> {
        self.pow(exp).into_result()
    }
}

// COMPARISON
// ----------

impl Ord for BigInt {
    /// Numeric order over valid values. Invalid values sort after every
    /// valid value, and among themselves by their flags.
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        match (self.is_valid(), other.is_valid()) {
            (true, true) => {}
            (true, false) => return cmp::Ordering::Less,
            (false, true) => return cmp::Ordering::Greater,
            (false, false) => return self.errors.cmp(&other.errors),
        }

        match (self.positive, other.positive) {
            (true, false) => cmp::Ordering::Greater,
            (false, true) => cmp::Ordering::Less,
            (true, true) => large::compare(&self.digits, &other.digits),
            // A longer negative number is the smaller one.
            (false, false) => large::compare(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl BigInt {
    /// Compare against the canonical decimal text, without allocating.
    fn eq_canonical(&self, s: &str) -> bool {
        if !self.is_valid() {
            return s == self.errors.sentinel();
        }
        let body = match (s.strip_prefix('-'), self.positive) {
            (Some(rest), false) => rest,
            (None, true) => s,
            _ => return false,
        };
        body.len() == self.digits.len()
            && body
                .bytes()
                .rev()
                .zip(&self.digits)
                .all(|(c, &d)| c == b'0' + d)
    }
}

impl PartialEq<str> for BigInt {
    fn eq(&self, other: &str) -> bool {
        self.eq_canonical(other)
    }
}

impl<'a> PartialEq<&'a str> for BigInt {
    fn eq(&self, other: &&str) -> bool {
        self.eq_canonical(other)
    }
}

impl PartialEq<BigInt> for str {
    fn eq(&self, other: &BigInt) -> bool {
        other.eq_canonical(self)
    }
}

impl<'a> PartialEq<BigInt> for &'a str {
    fn eq(&self, other: &BigInt) -> bool {
        other.eq_canonical(self)
    }
}
