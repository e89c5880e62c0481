use crate::bigint::{BigInteger, ONE, TWO, ZERO};
use crate::error::Error;

/// Newton iterations run by [`BigInteger::sqrt`].
pub const DEFAULT_SQRT_ITERATIONS: u32 = 15;

impl BigInteger {
    /// Raise to `exponent` by repeated multiplication.
    ///
    /// A negative exponent gives a value strictly between -1 and 1 (or an
    /// undefined one for a zero base), which truncates to zero.
    pub fn pow(&self, exponent: &Self) -> Self {
        if *exponent < *ZERO {
            return ZERO.clone();
        }
        if *exponent == *ZERO {
            return ONE.clone();
        }
        if *exponent == *ONE {
            return self.clone();
        }

        let mut result = ONE.clone();
        let mut i = ZERO.clone();
        while i < *exponent {
            result *= self;
            i.increment();
        }
        result
    }

    /// Approximate integer square root using [`DEFAULT_SQRT_ITERATIONS`]
    /// steps of Newton's method.
    pub fn sqrt(&self) -> Result<Self, Error> {
        self.sqrt_with_iterations(DEFAULT_SQRT_ITERATIONS)
    }

    /// Approximate integer square root using exactly `iterations` steps of
    /// Newton's method, starting from `self`.
    ///
    /// # Note
    ///
    /// There is no convergence check. Too few iterations overshoot the root,
    /// and for `n = k * k - 1` the estimate alternates between `k - 1` and `k`.
    pub fn sqrt_with_iterations(&self, iterations: u32) -> Result<Self, Error> {
        if self.negative {
            return Err(Error::InvalidArgument {
                arg: "self",
                msg: "cannot take the square root of a negative number",
            });
        }
        if self.is_zero() {
            return Ok(ZERO.clone());
        }
        if iterations == 0 {
            return Err(Error::InvalidArgument {
                arg: "iterations",
                msg: "the number of iterations must be positive",
            });
        }

        let mut current = self.clone();
        for _ in 0..iterations {
            current = (&current + &self.try_div(&current)?).try_div(&TWO)?;
        }
        Ok(current)
    }
}
