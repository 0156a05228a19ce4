//! Serde support. A `BigInt` serializes as its decimal string, so it survives
//! formats whose native integers are narrower than the value.

use crate::bigint::BigInt;
use crate::lib::fmt;
use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};
use serde::ser::{self, Serialize, Serializer};

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.error_flags().code() {
            Some(code) => Err(ser::Error::custom(code)),
            None => serializer.collect_str(self),
        }
    }
}

struct BigIntVisitor;

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal integer")
    }

    #[inline]
    fn visit_i64<E>(self, value: i64) -> Result<BigInt, E> {
        Ok(BigInt::from(value))
    }

    #[inline]
    fn visit_u64<E>(self, value: u64) -> Result<BigInt, E> {
        Ok(BigInt::from(value))
    }

    #[inline]
    fn visit_i128<E>(self, value: i128) -> Result<BigInt, E> {
        Ok(BigInt::from(value))
    }

    #[inline]
    fn visit_u128<E>(self, value: u128) -> Result<BigInt, E> {
        Ok(BigInt::from(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        BigInt::parse(value).map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntVisitor)
    }
}
