//! # decint
//!
//! Arbitrary-precision signed integers stored as a sequence of decimal
//! digits, with the full set of arithmetic and relational operators.
//!
//! ```
//! use decint::BigInt;
//!
//! # fn main() -> decint::Result<()> {
//! let a: BigInt = "999999999".parse()?;
//! let b = BigInt::from(999_999_999);
//!
//! assert_eq!(&a * &b, "999999998000000001");
//! assert_eq!(BigInt::from(123) ^ BigInt::from(4), 228886641);
//! assert_eq!((a + 1).to_string(), "1000000000");
//! # Ok(())
//! # }
//! ```
//!
//! # Division and modulo
//!
//! Integer division rounds the quotient half up, away from zero, rather
//! than truncating: `7 / 2 == 4`, `5 / 2 == 3` and `-7 / 2 == -4`. The plain
//! truncating quotient is available from [`BigInt::div_rem_trunc`].
//!
//! Modulo is only defined when both operands are non-negative.
//!
//! # Invalid values
//!
//! The operator forms of `/`, `%` and `^` cannot return a `Result`. When one
//! of them divides by zero or leaves the modulo domain, the result is an
//! *invalid* `BigInt`: it prints as `#DIV/0` or `#DOMAIN`, every further
//! operation on it stays invalid, and [`BigInt::is_valid`] reports it. Use
//! the `checked_*` methods, or [`BigInt::into_result`], to get an [`Error`]
//! instead.
//!
//! ```
//! use decint::{BigInt, ErrorFlags};
//!
//! let q = BigInt::from(10) / BigInt::from(0);
//! assert!(!q.is_valid());
//! assert_eq!(q.error_flags(), ErrorFlags::DIV_ZERO);
//! assert_eq!(q.to_string(), "#DIV/0");
//!
//! let err = BigInt::from(-15).checked_rem(&BigInt::from(4)).unwrap_err();
//! assert!(err.is_arithmetic());
//! ```

#![doc(html_root_url = "https://docs.rs/decint/0.3.1")]
#![deny(missing_docs)]
#![no_std]
#![allow(
    clippy::comparison_chain,
    clippy::module_name_repetitions,
    clippy::should_implement_trait,
    clippy::suspicious_arithmetic_impl,
    clippy::suspicious_op_assign_impl
)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

extern crate serde_core as serde;

/// Facade around the core features for name mangling.
pub(crate) mod lib {
    pub(crate) use core::{cmp, fmt, iter, ops, result, str};

    pub(crate) use alloc::boxed::Box;
    pub(crate) use alloc::format;
    pub(crate) use alloc::string::{String, ToString};
    pub(crate) use alloc::vec;
    pub(crate) use alloc::vec::Vec;
}

mod features_check;

mod bigint;
mod convert;
mod digit;
pub mod error;
mod fmt;
mod math;
mod ops;
mod parse;
mod ser;

pub use crate::bigint::{BigInt, ErrorFlags};
#[doc(inline)]
pub use crate::error::{Error, Result};
