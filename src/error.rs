//! When parsing, converting or dividing a `BigInt` goes wrong.

use crate::lib::fmt::{self, Debug, Display};
use crate::lib::{result, Box, String, ToString};
use serde::{de, ser};
#[cfg(feature = "std")]
use std::io;

/// This type represents all possible errors that can occur when parsing a
/// `BigInt`, converting it to a native integer, or performing an arithmetic
/// operation outside of its domain.
pub struct Error {
    /// Boxed so that `Result<BigInt, Error>` stays no larger than `BigInt`
    /// itself plus a discriminant.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `decint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based column of the character at which a parse error was
    /// detected.
    ///
    /// Errors that are not tied to a position in the input, including every
    /// arithmetic error and the error for an empty string, report column 0.
    pub fn column(&self) -> usize {
        self.err.column
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - a string that is not a decimal integer
    /// - `Category::Arithmetic` - division by zero or an operand outside the
    ///   domain of the operation
    /// - `Category::Data` - a value that does not fit the requested type, or
    ///   a custom serde message
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::EmptyNumber | ErrorCode::LoneMinusSign | ErrorCode::InvalidDigit => {
                Category::Syntax
            }
            ErrorCode::DivisionByZero | ErrorCode::Domain => Category::Arithmetic,
            ErrorCode::Message(_) | ErrorCode::NumberOutOfRange => Category::Data,
        }
    }

    /// Returns true if this error was caused by a string that is not a
    /// decimal integer.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by dividing by zero or by an
    /// operand outside of the domain of the operation.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }

    /// Returns true if this error was caused by a value that cannot be
    /// represented by the requested type.
    pub fn is_data(&self) -> bool {
        self.classify() == Category::Data
    }
}

/// Categorizes the cause of a `decint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by a string that is not a decimal integer.
    Syntax,

    /// The error was caused by division by zero, or by a modulo operand
    /// outside of the non-negative domain.
    Arithmetic,

    /// The error was caused by a value that does not fit the requested type.
    ///
    /// For example, converting `BigInt::from(300)` into a `u8`.
    Data,
}

#[cfg(feature = "std")]
impl From<Error> for io::Error {
    /// Convert a `decint::Error` into an `io::Error`.
    ///
    /// Every category turns into an `InvalidData` IO error.
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

struct ErrorImpl {
    code: ErrorCode,
    column: usize,
}

/// This type describes all possible errors that can occur when working with
/// a `BigInt`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// Catchall for serde error messages.
    Message(Box<str>),

    /// The string to parse was empty.
    EmptyNumber,

    /// The string to parse was a minus sign without any digit.
    LoneMinusSign,

    /// Found a character other than `0`-`9` after the optional leading `-`.
    InvalidDigit,

    /// The divisor of a division or modulo was zero.
    DivisionByZero,

    /// Modulo was requested with a negative operand.
    Domain,

    /// Number is bigger than the maximum value of the requested type.
    NumberOutOfRange,
}

impl Error {
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, column: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, column }),
        }
    }

    #[cold]
    pub(crate) fn new(code: ErrorCode) -> Self {
        Error::syntax(code, 0)
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Message(msg) => f.write_str(msg),
            ErrorCode::EmptyNumber => f.write_str("cannot parse integer from empty string"),
            ErrorCode::LoneMinusSign => f.write_str("expected digits after `-`"),
            ErrorCode::InvalidDigit => f.write_str("invalid digit"),
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
            ErrorCode::Domain => f.write_str("modulo is only defined for non-negative operands"),
            ErrorCode::NumberOutOfRange => f.write_str("number out of range"),
        }
    }
}

impl serde::de::StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.column == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(f, "{} at column {}", self.code, self.column)
        }
    }
}

// Keep the representation flat; this is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, column: {})",
            self.err.code.to_string(),
            self.err.column
        )
    }
}

impl de::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        make_error(msg.to_string())
    }
}

impl ser::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        make_error(msg.to_string())
    }
}

fn make_error(msg: String) -> Error {
    Error::new(ErrorCode::Message(msg.into_boxed_str()))
}
