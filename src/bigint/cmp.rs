use std::cmp::Ordering;

use crate::bigint::convert::pad_with_zeros;
use crate::bigint::{BigInteger, ZERO};

/// Compare two magnitudes after padding them to the same width.
pub(crate) fn cmp_magnitude(a: &[u8], b: &[u8]) -> Ordering {
    let width = a.len().max(b.len());
    let a = pad_with_zeros(a, width);
    let b = pad_with_zeros(b, width);

    a.iter()
        .zip(b.iter())
        .map(|(x, y)| x.cmp(y))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl BigInteger {
    // return if a > b
    fn greaterthan(&self, other: &Self) -> bool {
        if self.negative != other.negative {
            return other.negative;
        }
        match cmp_magnitude(&self.digits, &other.digits) {
            Ordering::Greater => !self.negative,
            Ordering::Less => self.negative,
            Ordering::Equal => false,
        }
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        if *self >= *ZERO {
            self.clone()
        } else {
            -self
        }
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if self.greaterthan(other) {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
