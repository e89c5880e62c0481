use std::ops::{Add, Neg};

use crate::bigint::convert::pad_with_zeros;
use crate::bigint::BigInteger;

impl Add<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    /// Compute the sum of two BigIntegers
    fn add(self, other: &BigInteger) -> BigInteger {
        // With differing signs the larger magnitude goes first and the digits
        // are subtracted; the result takes that operand's sign.
        let (first, second, multiplier, negative) = if self.negative == other.negative {
            (&self.digits, &other.digits, 1i8, self.negative)
        } else if self.abs() > other.abs() {
            (&self.digits, &other.digits, -1i8, self.negative)
        } else {
            (&other.digits, &self.digits, -1i8, other.negative)
        };

        let width = first.len().max(second.len());
        let first = pad_with_zeros(first, width);
        let second = pad_with_zeros(second, width);

        let mut digits = Vec::with_capacity(width + 1);
        let mut carry = 0i8;
        for (&a, &b) in first.iter().rev().zip(second.iter().rev()) {
            let mut digit = a as i8 + multiplier * (b as i8 + carry);
            carry = 0;
            if digit > 9 {
                digit -= 10;
                carry = 1;
            } else if digit < 0 {
                digit += 10;
                carry = 1;
            }
            digits.push(digit as u8);
        }
        // only reachable when adding: a borrow never leaves the larger magnitude
        if carry == 1 {
            digits.push(1);
        }

        digits.reverse();
        BigInteger::from_parts(digits, negative)
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        BigInteger::from_parts(self.digits.clone(), !self.negative)
    }
}

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        BigInteger::from_parts(self.digits, !self.negative)
    }
}
