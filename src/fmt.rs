//! Decimal rendering of a `BigInt`.

use crate::bigint::BigInt;
use crate::lib::fmt::{self, Debug, Display};
use crate::lib::{format, String};

impl Display for BigInt {
    /// Formats the canonical decimal string, with a `-` only for negative
    /// values. Width, fill, `+` and `0` flags are honored the same way as
    /// for the primitive integers.
    ///
    /// Invalid values print as `#DIV/0` or `#DOMAIN`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.is_valid() {
            return f.pad(self.errors.sentinel());
        }
        f.pad_integral(self.positive, "", &self.magnitude())
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

impl BigInt {
    /// Abbreviate values with more than `width` digits as
    /// `<first width digits>e+<remaining digit count>`.
    ///
    /// The digits are cut, not rounded. A `width` of 0, or a value that fits,
    /// gives the canonical string.
    ///
    /// ```
    /// use decint::BigInt;
    ///
    /// let n = BigInt::parse("-1234567890123").unwrap();
    /// assert_eq!(n.to_scientific(4), "-1234e+9");
    /// assert_eq!(n.to_scientific(20), "-1234567890123");
    /// ```
    pub fn to_scientific(&self, width: usize) -> String {
        match self.split_at_width(width) {
            Some((head, rest)) => format!("{}e+{}", head, rest),
            None => format!("{}", self),
        }
    }

    /// Cut values with more than `width` digits down to their first `width`
    /// digits followed by `...`.
    ///
    /// ```
    /// use decint::BigInt;
    ///
    /// assert_eq!(BigInt::from(987654321).truncated(3), "987...");
    /// assert_eq!(BigInt::from(987).truncated(3), "987");
    /// ```
    pub fn truncated(&self, width: usize) -> String {
        match self.split_at_width(width) {
            Some((head, _)) => format!("{}...", head),
            None => format!("{}", self),
        }
    }

    /// The signed leading `width` digits and the count of digits cut off,
    /// or None if nothing would be cut.
    fn split_at_width(&self, width: usize) -> Option<(String, usize)> {
        let len = self.digit_count();
        if !self.is_valid() || width == 0 || len <= width {
            return None;
        }
        let mut head = String::with_capacity(width + 1);
        if !self.positive {
            head.push('-');
        }
        head.extend(
            self.digits[len - width..]
                .iter()
                .rev()
                .map(|&d| crate::digit::to_char(d)),
        );
        Some((head, len - width))
    }
}
