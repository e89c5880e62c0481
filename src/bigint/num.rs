use num_bigint::{BigInt, Sign};
use num_traits::{CheckedDiv, CheckedRem, Num, One, Pow, Signed, Zero};

use crate::bigint::{BigInteger, NEGATIVE_ONE, ONE, ZERO};
use crate::error::ParseBigIntegerError;

impl Zero for BigInteger {
    fn zero() -> Self {
        ZERO.clone()
    }

    fn is_zero(&self) -> bool {
        BigInteger::is_zero(self)
    }
}

impl One for BigInteger {
    fn one() -> Self {
        ONE.clone()
    }
}

impl Num for BigInteger {
    type FromStrRadixErr = ParseBigIntegerError;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        if radix != 10 {
            return Err(ParseBigIntegerError::UnsupportedRadix(radix));
        }
        Self::parse(s)
    }
}

impl Signed for BigInteger {
    fn abs(&self) -> Self {
        BigInteger::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            ZERO.clone()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        if BigInteger::is_zero(self) {
            ZERO.clone()
        } else if self.negative {
            NEGATIVE_ONE.clone()
        } else {
            ONE.clone()
        }
    }

    fn is_positive(&self) -> bool {
        !self.negative && !BigInteger::is_zero(self)
    }

    fn is_negative(&self) -> bool {
        self.negative
    }
}

impl CheckedDiv for BigInteger {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        self.try_div(v).ok()
    }
}

impl CheckedRem for BigInteger {
    fn checked_rem(&self, v: &Self) -> Option<Self> {
        self.try_rem(v).ok()
    }
}

impl Pow<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn pow(self, exponent: &BigInteger) -> BigInteger {
        BigInteger::pow(self, exponent)
    }
}

impl From<&BigInteger> for BigInt {
    fn from(value: &BigInteger) -> Self {
        let sign = if value.negative { Sign::Minus } else { Sign::Plus };
        // every digit is below the radix, so this never falls back
        BigInt::from_radix_be(sign, &value.digits, 10).unwrap_or_default()
    }
}

impl From<BigInteger> for BigInt {
    fn from(value: BigInteger) -> Self {
        BigInt::from(&value)
    }
}

impl From<&BigInt> for BigInteger {
    fn from(value: &BigInt) -> Self {
        let (sign, digits) = value.to_radix_be(10);
        BigInteger::from_parts(digits, sign == Sign::Minus)
    }
}

impl From<BigInt> for BigInteger {
    fn from(value: BigInt) -> Self {
        BigInteger::from(&value)
    }
}

#[cfg(test)]
mod test {
    use crate::bigint::{BigInteger, ONE, ZERO};
    use crate::error::ParseBigIntegerError;
    use num_bigint::{BigInt, RandomBits};
    use num_traits::{CheckedDiv, CheckedRem, Num, One, Pow, Signed, Zero};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn big(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    // generic code written against num-traits only
    fn sum_of_squares<T: Num + Clone>(values: &[T]) -> T {
        values
            .iter()
            .cloned()
            .fold(T::zero(), |acc, v| acc + v.clone() * v)
    }

    #[test]
    fn test_num_traits() {
        assert_eq!(<BigInteger as Zero>::zero(), *ZERO);
        assert_eq!(BigInteger::one(), *ONE);
        assert!(<BigInteger as One>::is_one(&big("1")));
        assert_eq!(
            BigInteger::from_str_radix("-255", 10).unwrap(),
            big("-255")
        );
        assert_eq!(
            BigInteger::from_str_radix("ff", 16),
            Err(ParseBigIntegerError::UnsupportedRadix(16))
        );

        let values = [big("3"), big("-4"), big("12")];
        assert_eq!(sum_of_squares(&values), big("169"));
    }

    #[test]
    fn test_signed() {
        assert_eq!(Signed::abs(&big("-9")), big("9"));
        assert_eq!(big("-9").signum(), big("-1"));
        assert_eq!(big("0").signum(), big("0"));
        assert_eq!(big("123").signum(), big("1"));
        assert!(Signed::is_positive(&big("5")));
        assert!(!Signed::is_positive(&big("0")));
        assert!(Signed::is_negative(&big("-5")));
        assert_eq!(big("5").abs_sub(&big("8")), *ZERO);
        assert_eq!(big("8").abs_sub(&big("5")), big("3"));
    }

    #[test]
    fn test_checked() {
        assert_eq!(big("9").checked_div(&big("2")), Some(big("4")));
        assert_eq!(big("9").checked_rem(&big("2")), Some(big("1")));
        assert_eq!(big("9").checked_div(&ZERO), None);
        assert_eq!(big("9").checked_rem(&ZERO), None);
        assert_eq!(Pow::pow(&big("3"), &big("4")), big("81"));
    }

    #[test]
    fn test_bigint_conversion() {
        let mut prng = ChaCha20Rng::seed_from_u64(1);

        for _ in 0..100 {
            let a: BigInt = prng.sample(RandomBits::new(400));
            let x = BigInteger::from(&a);
            assert_eq!(x.to_string(), a.to_string());
            assert_eq!(BigInt::from(&x), a);
        }

        assert_eq!(BigInteger::from(BigInt::from(0)), *ZERO);
        assert_eq!(BigInt::from(ZERO.clone()), BigInt::from(0));
        assert_eq!(BigInt::from(big("-7")), BigInt::from(-7));
    }
}
