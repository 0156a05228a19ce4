//! Operator overloads for `BigInt`.
//!
//! Every form of a binary operator (owned or borrowed on either side, and
//! the compound assignment) funnels into one by-reference implementation in
//! `bigint.rs`. The `^` operator is exponentiation.

use crate::bigint::BigInt;
use crate::lib::ops::{
    Add, AddAssign, BitXor, BitXorAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign,
    Sub, SubAssign,
};

macro_rules! impl_binop {
    ($imp:ident, $method:ident, $imp_assign:ident, $method_assign:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl<'a> $imp_assign<&'a BigInt> for BigInt {
            #[inline]
            fn $method_assign(&mut self, other: &'a BigInt) {
                let $lhs = self;
                let $rhs = other;
                $body
            }
        }

        impl $imp_assign<BigInt> for BigInt {
            #[inline]
            fn $method_assign(&mut self, other: BigInt) {
                $imp_assign::$method_assign(self, &other);
            }
        }

        impl<'a, 'b> $imp<&'b BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: &'b BigInt) -> BigInt {
                let mut result = self.clone();
                $imp_assign::$method_assign(&mut result, other);
                result
            }
        }

        impl<'a> $imp<BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: BigInt) -> BigInt {
                $imp::$method(self, &other)
            }
        }

        impl<'a> $imp<&'a BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(mut self, other: &'a BigInt) -> BigInt {
                $imp_assign::$method_assign(&mut self, other);
                self
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(mut self, other: BigInt) -> BigInt {
                $imp_assign::$method_assign(&mut self, &other);
                self
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, |lhs, rhs| lhs.iadd(rhs));
impl_binop!(Sub, sub, SubAssign, sub_assign, |lhs, rhs| lhs.isub(rhs));
impl_binop!(Mul, mul, MulAssign, mul_assign, |lhs, rhs| *lhs = lhs.mul_ref(rhs));
impl_binop!(Div, div, DivAssign, div_assign, |lhs, rhs| *lhs = lhs.div_round(rhs));
impl_binop!(Rem, rem, RemAssign, rem_assign, |lhs, rhs| *lhs = lhs.rem_ref(rhs));
impl_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, |lhs, rhs| *lhs = lhs.pow(rhs));

// `i64` on the right-hand side. A single native width keeps an integer
// literal operand unambiguous, so `(n + 1).to_string()` infers.
macro_rules! impl_primitive_binop {
    ($($prim:ty)*) => {
        $(
            impl_primitive_binop!(@op $prim, Add, add, AddAssign, add_assign);
            impl_primitive_binop!(@op $prim, Sub, sub, SubAssign, sub_assign);
            impl_primitive_binop!(@op $prim, Mul, mul, MulAssign, mul_assign);
            impl_primitive_binop!(@op $prim, Div, div, DivAssign, div_assign);
            impl_primitive_binop!(@op $prim, Rem, rem, RemAssign, rem_assign);
            impl_primitive_binop!(@op $prim, BitXor, bitxor, BitXorAssign, bitxor_assign);
        )*
    };
    (@op $prim:ty, $imp:ident, $method:ident, $imp_assign:ident, $method_assign:ident) => {
        impl $imp_assign<$prim> for BigInt {
            #[inline]
            fn $method_assign(&mut self, other: $prim) {
                $imp_assign::$method_assign(self, &BigInt::from(other));
            }
        }

        impl $imp<$prim> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(mut self, other: $prim) -> BigInt {
                $imp_assign::$method_assign(&mut self, &BigInt::from(other));
                self
            }
        }

        impl<'a> $imp<$prim> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: $prim) -> BigInt {
                $imp::$method(self, &BigInt::from(other))
            }
        }
    };
}

impl_primitive_binop!(i64);

impl Neg for BigInt {
    type Output = BigInt;

    /// Flips the sign. Zero and invalid values are returned unchanged.
    #[inline]
    fn neg(mut self) -> BigInt {
        if self.is_valid() && !self.is_zero() {
            self.positive = !self.positive;
        }
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lib::ToString;

    #[test]
    fn forms_agree() {
        let a = BigInt::from(1234);
        let b = BigInt::from(-56);

        let by_ref = &a * &b;
        assert_eq!(by_ref, &a * b.clone());
        assert_eq!(by_ref, a.clone() * &b);
        assert_eq!(by_ref, a.clone() * b.clone());

        let mut assigned = a.clone();
        assigned *= &b;
        assert_eq!(assigned, by_ref);
        assert_eq!(by_ref, -69104);
    }

    #[test]
    fn primitive_rhs() {
        let a = BigInt::from(100);
        assert_eq!(&a + 1, 101);
        assert_eq!(&a - 101i64, -1);
        assert_eq!(&a * 3, 300);
        assert_eq!(&a / 8, 13);
        assert_eq!(&a % 7, 2);
        assert_eq!(a ^ 2, 10000);
    }

    #[test]
    fn literal_rhs_infers() {
        let n = BigInt::from(41);
        assert_eq!((&n + 1).to_string(), "42");
        let q = BigInt::zero() ^ -1;
        assert!(!q.is_valid());
        let mut m = n;
        m *= -2;
        assert_eq!(m.signum(), -1);
    }

    #[test]
    fn neg_keeps_zero_positive() {
        let zero = -BigInt::zero();
        assert!(zero.is_zero());
        assert_eq!(zero.to_string(), "0");
        assert_eq!(-&BigInt::from(5), -5);
        assert_eq!(-BigInt::from(-5), 5);
    }
}
