use std::ops::Mul;

use crate::bigint::{BigInteger, ZERO};

impl Mul<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    /// Multiply by adding `self` to an accumulator `|other|` times.
    ///
    /// # Note
    ///
    /// The cost grows with the numeric value of `other`, not with its digit
    /// count. Keep the smaller operand on the right when that is possible.
    fn mul(self, other: &BigInteger) -> BigInteger {
        let multiplier = other.abs();

        let mut result = ZERO.clone();
        let mut i = ZERO.clone();
        while i < multiplier {
            result += self;
            i.increment();
        }

        BigInteger::from_parts(result.digits, self.negative != other.negative)
    }
}
