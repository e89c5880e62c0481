use std::mem;
use std::ops::Sub;

use crate::bigint::{BigInteger, ONE};

impl Sub<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    /// Compute the difference of two BigIntegers as `a + (-b)`
    fn sub(self, other: &BigInteger) -> BigInteger {
        self + &(-other)
    }
}

impl BigInteger {
    /// Rebind to `self + 1` and return the new value.
    pub fn increment(&mut self) -> &mut Self {
        *self = &*self + &*ONE;
        self
    }

    /// Rebind to `self - 1` and return the new value.
    pub fn decrement(&mut self) -> &mut Self {
        *self = &*self - &*ONE;
        self
    }

    /// Rebind to `self + 1` and return the value held before.
    pub fn post_increment(&mut self) -> Self {
        let next = &*self + &*ONE;
        mem::replace(self, next)
    }

    /// Rebind to `self - 1` and return the value held before.
    pub fn post_decrement(&mut self) -> Self {
        let next = &*self - &*ONE;
        mem::replace(self, next)
    }
}
