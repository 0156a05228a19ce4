//! Building-blocks for arbitrary-precision decimal math.
//!
//! These algorithms assume little-endian order for the digit buffers, so for
//! a `vec![0, 1, 2, 3]`, `3` is the most significant digit and `0` is the
//! least significant digit; the buffer reads as the number `3210`.
//!
//! Every buffer handed out of this module is normalized: it is never empty,
//! and its most significant digit is only zero for the number zero itself,
//! which is exactly `[0]`.

use crate::lib::{cmp, iter, vec, Vec};

// ALIASES
// -------

/// Type for a single decimal digit of the big integer.
pub(crate) type Digit = u8;

/// Type wide enough to hold any sum or product of two digits plus a carry.
type Wide = u32;

/// Radix of the digit buffers.
pub(crate) const BASE: Digit = 10;

/// Storage for the digits of a big integer.
pub(crate) type DigitVec = Vec<Digit>;

/// Cast to wide type.
#[inline(always)]
fn as_wide(d: Digit) -> Wide {
    Wide::from(d)
}

/// Split a wide value into (low digit, carry).
#[inline(always)]
fn split_wide(z: Wide) -> (Digit, Digit) {
    let base = as_wide(BASE);
    ((z % base) as Digit, (z / base) as Digit)
}

// SCALAR
// ------

// Digit-to-digit operations, the building-blocks of the buffer operations.

pub(crate) mod scalar {
use super::*;

/// Add two digits and an incoming carry.
///
/// Returns the (digit, carry) components; the carry is 0 or 1.
#[inline]
pub fn add(x: Digit, y: Digit, carry: Digit) -> (Digit, Digit) {
    split_wide(as_wide(x) + as_wide(y) + as_wide(carry))
}

/// Multiply two digits and add an incoming carry.
///
/// Returns the (low, high) components. With `carry <= 8` the high
/// component is at most 8 as well, so the carry can be fed back in.
#[inline]
pub fn mul(x: Digit, y: Digit, carry: Digit) -> (Digit, Digit) {
    split_wide(as_wide(x) * as_wide(y) + as_wide(carry))
}

}   // scalar

// SMALL
// -----

// Buffer-to-digit operations, to modify a big integer by a single digit.

pub(crate) mod small {
use super::*;

// NORMALIZE

/// Normalize the buffer by popping any most-significant zeros.
///
/// An empty buffer becomes the canonical zero, `[0]`.
#[inline]
pub fn normalize(x: &mut DigitVec) {
    while x.len() > 1 && x[x.len() - 1] == 0 {
        x.pop();
    }
    if x.is_empty() {
        x.push(0);
    }
}

/// Check if a normalized buffer is the number zero.
#[inline]
pub fn is_zero(x: &[Digit]) -> bool {
    x == [0]
}

/// Check if a normalized buffer is the number one.
#[inline]
pub fn is_one(x: &[Digit]) -> bool {
    x == [1]
}

/// Check if the buffer holds an odd number.
#[inline]
pub fn is_odd(x: &[Digit]) -> bool {
    x.first().map_or(false, |&d| d % 2 == 1)
}

// ADDITION

/// AddAssign a single digit, carrying as far up as needed.
pub fn iadd(x: &mut DigitVec, y: Digit) {
    let mut carry = y;
    for xi in x.iter_mut() {
        if carry == 0 {
            return;
        }
        let (digit, next) = scalar::add(*xi, carry, 0);
        *xi = digit;
        carry = next;
    }
    if carry != 0 {
        x.push(carry);
    }
}

// MULTIPLICATION

/// MulAssign a single digit.
pub fn imul(x: &mut DigitVec, y: Digit) {
    if y == 0 {
        x.clear();
        x.push(0);
        return;
    }
    let mut carry = 0;
    for xi in x.iter_mut() {
        let (digit, next) = scalar::mul(*xi, y, carry);
        *xi = digit;
        carry = next;
    }
    if carry != 0 {
        x.push(carry);
    }
}

/// Mul a single digit.
#[inline]
pub fn mul(x: &[Digit], y: Digit) -> DigitVec {
    let mut z = x.to_vec();
    imul(&mut z, y);
    z
}

// DIVISION

/// DivAssign a single nonzero digit, returning the remainder.
pub fn idiv(x: &mut DigitVec, y: Digit) -> Digit {
    debug_assert!(y != 0);
    let y = as_wide(y);
    let mut rem: Wide = 0;
    for xi in x.iter_mut().rev() {
        let cur = rem * as_wide(BASE) + as_wide(*xi);
        *xi = (cur / y) as Digit;
        rem = cur % y;
    }
    normalize(x);
    rem as Digit
}

// SHL

/// Shift-left one decimal place, bringing `d` down into the units place.
///
/// This is `x = x * BASE + d`, the "bring down" step of long division.
#[inline]
pub fn ishl_push(x: &mut DigitVec, d: Digit) {
    if is_zero(x) {
        x[0] = d;
    } else {
        x.insert(0, d);
    }
}

}   // small

// LARGE
// -----

// Buffer-to-buffer operations.

pub(crate) mod large {
use super::*;

// RELATIVE OPERATORS

/// Compare `x` to `y`, in little-endian order.
///
/// Both buffers must be normalized, so a longer buffer is a larger number.
#[inline]
pub fn compare(x: &[Digit], y: &[Digit]) -> cmp::Ordering {
    if x.len() > y.len() {
        cmp::Ordering::Greater
    } else if x.len() < y.len() {
        cmp::Ordering::Less
    } else {
        for (xi, yi) in x.iter().rev().zip(y.iter().rev()) {
            if xi != yi {
                return xi.cmp(yi);
            }
        }
        cmp::Ordering::Equal
    }
}

/// Check if x is less than y.
#[inline]
pub fn less(x: &[Digit], y: &[Digit]) -> bool {
    compare(x, y) == cmp::Ordering::Less
}

/// Check if x is greater than or equal to y.
#[inline]
pub fn greater_equal(x: &[Digit], y: &[Digit]) -> bool {
    !less(x, y)
}

// ADDITION

/// AddAssign bigint to bigint.
///
/// Walks both buffers from the least significant digit, treating missing
/// positions of the shorter one as zero, and extends `x` by one digit if a
/// carry is left over.
pub fn iadd(x: &mut DigitVec, y: &[Digit]) {
    if y.len() > x.len() {
        x.resize(y.len(), 0);
    }

    let mut carry = 0;
    for (i, xi) in x.iter_mut().enumerate() {
        let yi = y.get(i).copied().unwrap_or(0);
        if yi == 0 && carry == 0 && i >= y.len() {
            break;
        }
        let (digit, next) = scalar::add(*xi, yi, carry);
        *xi = digit;
        carry = next;
    }

    if carry != 0 {
        x.push(carry);
    }
}

// SUBTRACTION

/// Borrow one unit from the higher places into `x[index]`.
///
/// Finds the nearest nonzero digit above `index`, decrements it, turns the
/// run of zeros in between into `BASE - 1`, and adds `BASE` to `x[index]`:
///
/// ```text
///   index      lender
///     v          v
///   [ 3, 0, 0, 4 ]  ->  [ 13, 9, 9, 3 ]
/// ```
fn borrow(x: &mut [Digit], index: usize) {
    let above = index + 1;
    let lender = match x[above..].iter().position(|&d| d != 0) {
        Some(offset) => above + offset,
        None => unreachable!("subtrahend is larger than minuend"),
    };
    x[lender] -= 1;
    for zero in &mut x[above..lender] {
        *zero = BASE - 1;
    }
    x[index] += BASE;
}

/// SubAssign bigint to bigint.
///
/// Requires `x >= y`.
pub fn isub(x: &mut DigitVec, y: &[Digit]) {
    debug_assert!(greater_equal(x, y));

    for (i, &yi) in y.iter().enumerate() {
        if x[i] < yi {
            borrow(x, i);
        }
        x[i] -= yi;
    }

    small::normalize(x);
}

/// Sub bigint from bigint.
///
/// Requires `x >= y`.
#[inline]
pub fn sub(x: &[Digit], y: &[Digit]) -> DigitVec {
    let mut z = x.to_vec();
    isub(&mut z, y);
    z
}

// MULTIPLICATION

/// Grade-school multiplication algorithm.
///
/// A single accumulation buffer of `x.len() + y.len()` digits receives every
/// partial product at its offset. `x` is the outer, slow digit; for each of
/// its digits the inner loop runs over `y` with two carries: the product
/// carry of `xi * yj`, and the sum carry of adding that product's low digit
/// into the buffer. Whatever is left of both carries after a row lands in
/// the next free slot of the buffer, which no earlier row has written yet.
pub fn long_mul(x: &[Digit], y: &[Digit]) -> DigitVec {
    let mut z: DigitVec = iter::repeat(0).take(x.len() + y.len()).collect();

    for (i, &xi) in x.iter().enumerate() {
        if xi == 0 {
            continue;
        }
        let mut prod_carry = 0;
        let mut sum_carry = 0;
        for (j, &yj) in y.iter().enumerate() {
            let (lo, hi) = scalar::mul(xi, yj, prod_carry);
            prod_carry = hi;
            let (digit, carry) = scalar::add(z[i + j], lo, sum_carry);
            z[i + j] = digit;
            sum_carry = carry;
        }
        // At most 8 + 1, still a single digit.
        z[i + y.len()] = prod_carry + sum_carry;
    }

    small::normalize(&mut z);
    z
}

/// Mul bigint by bigint.
#[inline]
pub fn mul(x: &[Digit], y: &[Digit]) -> DigitVec {
    if y.len() == 1 {
        small::mul(x, y[0])
    } else if x.len() == 1 {
        small::mul(y, x[0])
    } else {
        long_mul(x, y)
    }
}

// DIVISION

/// Long division, returning the truncated (quotient, remainder).
///
/// Brings down one digit of `x` at a time into a running remainder and
/// subtracts `y` from it until it no longer fits, which takes at most nine
/// subtractions per digit. Requires `y != 0`.
pub fn div_rem(x: &[Digit], y: &[Digit]) -> (DigitVec, DigitVec) {
    debug_assert!(!small::is_zero(y));

    if less(x, y) {
        return (vec![0], x.to_vec());
    }
    if y.len() == 1 {
        let mut quotient = x.to_vec();
        let rem = small::idiv(&mut quotient, y[0]);
        return (quotient, vec![rem]);
    }

    let mut quotient: DigitVec = iter::repeat(0).take(x.len()).collect();
    let mut rem: DigitVec = vec![0];
    for i in (0..x.len()).rev() {
        small::ishl_push(&mut rem, x[i]);
        let mut q = 0;
        while greater_equal(&rem, y) {
            isub(&mut rem, y);
            q += 1;
        }
        quotient[i] = q;
    }

    small::normalize(&mut quotient);
    (quotient, rem)
}

// EXPONENTIATION

/// Raise `x` to the power `n`.
///
/// Exponentiation by squaring, halving the exponent's own digit buffer at
/// each step so no general division is involved.
pub fn pow(x: &[Digit], mut n: DigitVec) -> DigitVec {
    let mut result: DigitVec = vec![1];
    if small::is_zero(&n) {
        return result;
    }

    let mut base = x.to_vec();
    loop {
        if small::is_odd(&n) {
            result = mul(&result, &base);
        }
        small::idiv(&mut n, 2);
        if small::is_zero(&n) {
            return result;
        }
        base = mul(&base, &base);
    }
}

}   // large

// TESTS
// -----
