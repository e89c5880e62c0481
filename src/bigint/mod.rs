use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

mod add;
mod cmp;
mod convert;
mod div;
mod mul;
mod num;
mod pow;
mod sub;

pub use pow::DEFAULT_SQRT_ITERATIONS;

/// An arbitrarily large signed integer stored as decimal digits.
///
/// The magnitude is kept most significant digit first and is always
/// normalized: no leading zeros, and zero is `[0]` with a positive sign.
/// Values never change once built; every operator returns a new value.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BigInteger {
    digits: Vec<u8>,
    negative: bool,
}

pub static NEGATIVE_ONE: LazyLock<BigInteger> =
    LazyLock::new(|| BigInteger::from_parts(vec![1], true));
pub static ZERO: LazyLock<BigInteger> = LazyLock::new(|| BigInteger::from_parts(vec![0], false));
pub static ONE: LazyLock<BigInteger> = LazyLock::new(|| BigInteger::from_parts(vec![1], false));
pub static TWO: LazyLock<BigInteger> = LazyLock::new(|| BigInteger::from_parts(vec![2], false));

impl BigInteger {
    /// Build a value from most-significant-first digits and a sign, stripping
    /// leading zeros and clearing the sign of zero.
    pub(crate) fn from_parts(mut digits: Vec<u8>, negative: bool) -> Self {
        let leading_zeros = digits.iter().take_while(|&&d| d == 0).count();
        digits.drain(..leading_zeros);
        if digits.is_empty() {
            digits.push(0);
        }
        let negative = negative && digits != [0];
        Self { digits, negative }
    }

    /// Decimal digits of the magnitude, most significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Number of decimal digits in the magnitude.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        ZERO.clone()
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({})", self)
    }
}

/// Derive the owned and compound-assignment forms of a binary operator from
/// its `&BigInteger op &BigInteger` implementation.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl $imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, other: BigInteger) -> BigInteger {
                $imp::$method(&self, &other)
            }
        }

        impl $imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, other: &BigInteger) -> BigInteger {
                $imp::$method(&self, other)
            }
        }

        impl $imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, other: BigInteger) -> BigInteger {
                $imp::$method(self, &other)
            }
        }

        impl $assign_imp<&BigInteger> for BigInteger {
            fn $assign_method(&mut self, other: &BigInteger) {
                *self = $imp::$method(&*self, other);
            }
        }

        impl $assign_imp<BigInteger> for BigInteger {
            fn $assign_method(&mut self, other: BigInteger) {
                *self = $imp::$method(&*self, &other);
            }
        }
    };
}

forward_binop!(impl Add, add, AddAssign, add_assign);
forward_binop!(impl Sub, sub, SubAssign, sub_assign);
forward_binop!(impl Mul, mul, MulAssign, mul_assign);
forward_binop!(impl Div, div, DivAssign, div_assign);
forward_binop!(impl Rem, rem, RemAssign, rem_assign);
