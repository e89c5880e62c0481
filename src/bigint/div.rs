use std::ops::{Div, Rem};

use crate::bigint::{BigInteger, NEGATIVE_ONE, ONE, ZERO};
use crate::error::Error;

/// Subtract `divisor` from `remainder` for as long as it fits.
///
/// Both values are magnitudes. Returns `(quotient, remainder)`.
fn div_rem_magnitude(mut remainder: BigInteger, divisor: &BigInteger) -> (BigInteger, BigInteger) {
    let mut quotient = ZERO.clone();
    while remainder >= *divisor {
        remainder -= divisor;
        quotient.increment();
    }
    (quotient, remainder)
}

impl BigInteger {
    /// Quotient rounding towards zero and the remainder carrying the sign of
    /// `self`, so that `q * other + r == self`.
    ///
    /// Runs one subtraction per unit of the quotient unless `|other|` is one,
    /// equals `|self|` or exceeds it.
    pub fn try_div_rem(&self, other: &Self) -> Result<(Self, Self), Error> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let number = self.abs();
        let divisor = other.abs();
        let negative = self.negative != other.negative;

        if number < divisor {
            return Ok((ZERO.clone(), self.clone()));
        }
        if divisor == *ONE {
            return Ok((Self::from_parts(number.digits, negative), ZERO.clone()));
        }
        if number == divisor {
            let quotient = if negative { NEGATIVE_ONE.clone() } else { ONE.clone() };
            return Ok((quotient, ZERO.clone()));
        }

        let (quotient, remainder) = div_rem_magnitude(number, &divisor);
        Ok((
            Self::from_parts(quotient.digits, negative),
            Self::from_parts(remainder.digits, self.negative),
        ))
    }

    /// Integer division rounding towards zero.
    pub fn try_div(&self, other: &Self) -> Result<Self, Error> {
        Ok(self.try_div_rem(other)?.0)
    }

    /// Remainder of [`try_div`](Self::try_div); carries the sign of `self`.
    pub fn try_rem(&self, other: &Self) -> Result<Self, Error> {
        Ok(self.try_div_rem(other)?.1)
    }
}

impl Div<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    /// # Panics
    ///
    /// Panics if `other` is zero, like the primitive integer types.
    fn div(self, other: &BigInteger) -> BigInteger {
        self.try_div(other).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Rem<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    /// # Panics
    ///
    /// Panics if `other` is zero, like the primitive integer types.
    fn rem(self, other: &BigInteger) -> BigInteger {
        self.try_rem(other).unwrap_or_else(|err| panic!("{err}"))
    }
}
