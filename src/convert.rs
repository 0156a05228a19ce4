//! Conversions between `BigInt` and strings or native integers.

use crate::bigint::BigInt;
use crate::digit::add_digit;
use crate::error::{Error, ErrorCode, Result};
use crate::lib::cmp::Ordering;
use crate::lib::iter::{Product, Sum};
use crate::lib::str::FromStr;
use crate::parse::split_formatted;

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<BigInt> {
        BigInt::parse(s)
    }
}

impl<'a> TryFrom<&'a str> for BigInt {
    type Error = Error;

    fn try_from(s: &'a str) -> Result<BigInt> {
        BigInt::parse(s)
    }
}

macro_rules! from_integer {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(i: $ty) -> Self {
                    let mut buffer = itoa::Buffer::new();
                    let (positive, digits) = split_formatted(buffer.format(i));
                    BigInt::from_parts(positive, digits)
                }
            }
        )*
    };
}

from_integer! {
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
}

impl BigInt {
    /// The magnitude as a `u128`, or None if it does not fit.
    fn magnitude_u128(&self) -> Option<u128> {
        self.digits
            .iter()
            .rev()
            .try_fold(0u128, |acc, &d| add_digit(acc, d))
    }

    /// Represent as an `i128` if the value is valid and fits.
    pub fn to_i128(&self) -> Option<i128> {
        if !self.is_valid() {
            return None;
        }
        let magnitude = self.magnitude_u128()?;
        if self.positive {
            i128::try_from(magnitude).ok()
        } else if magnitude == i128::MIN.unsigned_abs() {
            Some(i128::MIN)
        } else {
            i128::try_from(magnitude).ok().map(|m| -m)
        }
    }

    /// Represent as a `u128` if the value is valid, non-negative and fits.
    pub fn to_u128(&self) -> Option<u128> {
        if !self.is_valid() || !self.positive {
            return None;
        }
        self.magnitude_u128()
    }

    /// Represent as an `i64` if the value is valid and fits.
    #[inline]
    pub fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    /// Represent as a `u64` if the value is valid, non-negative and fits.
    #[inline]
    pub fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }

    /// The error for a value that does not convert to a native integer.
    #[cold]
    fn conversion_error(&self) -> Error {
        match self.error_flags().code() {
            Some(code) => Error::new(code),
            None => Error::new(ErrorCode::NumberOutOfRange),
        }
    }
}

macro_rules! try_into_integer {
    ($via:ident => $($ty:ident)*) => {
        $(
            impl<'a> TryFrom<&'a BigInt> for $ty {
                type Error = Error;

                fn try_from(n: &'a BigInt) -> Result<$ty> {
                    n.$via()
                        .and_then(|v| $ty::try_from(v).ok())
                        .ok_or_else(|| n.conversion_error())
                }
            }

            impl TryFrom<BigInt> for $ty {
                type Error = Error;

                #[inline]
                fn try_from(n: BigInt) -> Result<$ty> {
                    $ty::try_from(&n)
                }
            }

            impl PartialEq<$ty> for BigInt {
                fn eq(&self, other: &$ty) -> bool {
                    self.$via()
                        .and_then(|v| $ty::try_from(v).ok())
                        .map_or(false, |v| v == *other)
                }
            }

            impl PartialEq<BigInt> for $ty {
                #[inline]
                fn eq(&self, other: &BigInt) -> bool {
                    other == self
                }
            }

            impl PartialOrd<$ty> for BigInt {
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    Some(self.cmp(&BigInt::from(*other)))
                }
            }

            impl PartialOrd<BigInt> for $ty {
                fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
                    Some(BigInt::from(*self).cmp(other))
                }
            }
        )*
    };
}

try_into_integer!(to_i128 => i8 i16 i32 i64 i128 isize);
try_into_integer!(to_u128 => u8 u16 u32 u64 u128 usize);

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |mut acc, n| {
            acc.iadd(&n);
            acc
        })
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |mut acc, n| {
            acc.iadd(n);
            acc
        })
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, n| acc.mul_ref(&n))
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, n| acc.mul_ref(n))
    }
}
