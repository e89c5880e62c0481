use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use crate::bigint::BigInteger;
use crate::error::ParseBigIntegerError;

impl BigInteger {
    /// Parse an optionally signed decimal string such as `"-123"` or `"+7"`.
    ///
    /// Leading zeros are accepted and dropped, so `"-000"` reads as zero.
    pub fn parse(num: &str) -> Result<Self, ParseBigIntegerError> {
        let (negative, body) = match num.as_bytes().first() {
            None => return Err(ParseBigIntegerError::Empty),
            Some(b'-') => (true, &num[1..]),
            Some(b'+') => (false, &num[1..]),
            Some(_) => (false, num),
        };
        if body.is_empty() {
            return Err(ParseBigIntegerError::MissingDigits);
        }

        let offset = num.len() - body.len();
        let mut digits = Vec::with_capacity(body.len());
        for (i, c) in body.char_indices() {
            match c.to_digit(10) {
                Some(digit) => digits.push(digit as u8),
                None => {
                    return Err(ParseBigIntegerError::InvalidDigit {
                        found: c,
                        position: offset + i,
                    })
                }
            }
        }

        Ok(Self::from_parts(digits, negative))
    }

    /// Build a value from anything whose `Display` output is a decimal integer.
    pub fn from_display<T: fmt::Display + ?Sized>(value: &T) -> Result<Self, ParseBigIntegerError> {
        Self::parse(&value.to_string())
    }

    fn from_magnitude<T: fmt::Display>(magnitude: T, negative: bool) -> Self {
        let digits = magnitude.to_string().bytes().map(|b| b - b'0').collect();
        Self::from_parts(digits, negative)
    }
}

/// Left-pad a digit sequence with zeros up to `width` digits.
pub(crate) fn pad_with_zeros(digits: &[u8], width: usize) -> Vec<u8> {
    let mut padded = vec![0; width.saturating_sub(digits.len())];
    padded.extend_from_slice(digits);
    padded
}

impl FromStr for BigInteger {
    type Err = ParseBigIntegerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for BigInteger {
    type Error = ParseBigIntegerError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BigInteger {
    type Error = ParseBigIntegerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInteger {
                fn from(value: $t) -> Self {
                    Self::from_magnitude(value.unsigned_abs(), value < 0)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInteger {
                fn from(value: $t) -> Self {
                    Self::from_magnitude(value, false)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: String = self.digits.iter().map(|&d| char::from(b'0' + d)).collect();
        f.pad_integral(!self.negative, "", &digits)
    }
}

/// `!x` is `true` exactly when `x` is zero.
impl Not for &BigInteger {
    type Output = bool;

    fn not(self) -> bool {
        self.is_zero()
    }
}

impl Not for BigInteger {
    type Output = bool;

    fn not(self) -> bool {
        self.is_zero()
    }
}

impl From<BigInteger> for String {
    fn from(value: BigInteger) -> String {
        value.to_string()
    }
}

impl From<&BigInteger> for String {
    fn from(value: &BigInteger) -> String {
        value.to_string()
    }
}

#[cfg(test)]
mod test {
    use crate::bigint::convert::pad_with_zeros;
    use crate::bigint::{BigInteger, ZERO};
    use crate::error::ParseBigIntegerError;
    use num_bigint::{BigInt, RandomBits};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_parse() {
        let a = BigInteger::parse("123456789012345678901234567890").unwrap();
        assert_eq!(a.digits().len(), 30);
        assert_eq!(a.digits()[0], 1);
        assert_eq!(a.digits()[29], 0);
        assert!(!a.is_negative());

        let b: BigInteger = "-42".parse().unwrap();
        assert_eq!(b.digits(), &[4, 2]);
        assert!(b.is_negative());

        assert_eq!(BigInteger::parse("+5").unwrap().to_string(), "5");
        assert_eq!(BigInteger::parse("-0").unwrap(), *ZERO);
        assert!(!BigInteger::parse("-0000").unwrap().is_negative());
        assert_eq!(BigInteger::parse("000120").unwrap().to_string(), "120");
        assert_eq!(BigInteger::parse("-007").unwrap().to_string(), "-7");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(BigInteger::parse(""), Err(ParseBigIntegerError::Empty));
        assert_eq!(BigInteger::parse("-"), Err(ParseBigIntegerError::MissingDigits));
        assert_eq!(BigInteger::parse("+"), Err(ParseBigIntegerError::MissingDigits));
        assert_eq!(
            BigInteger::parse("12a3"),
            Err(ParseBigIntegerError::InvalidDigit { found: 'a', position: 2 })
        );
        assert_eq!(
            BigInteger::parse("-1-2"),
            Err(ParseBigIntegerError::InvalidDigit { found: '-', position: 2 })
        );
        assert_eq!(
            BigInteger::parse("--1"),
            Err(ParseBigIntegerError::InvalidDigit { found: '-', position: 1 })
        );
        assert!(BigInteger::parse(" 1").is_err());
        assert!(BigInteger::parse("1 ").is_err());
        assert!(BigInteger::parse("١٢").is_err());
        assert!(BigInteger::try_from("1.5").is_err());
    }

    #[test]
    fn test_round_trip() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..100 {
            let a: BigInt = prng.sample(RandomBits::new(300));
            let s = a.to_string();
            assert_eq!(BigInteger::parse(&s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(BigInteger::from(0u8).to_string(), "0");
        assert_eq!(BigInteger::from(-1i8).to_string(), "-1");
        assert_eq!(BigInteger::from(i64::MIN).to_string(), i64::MIN.to_string());
        assert_eq!(BigInteger::from(i128::MIN).to_string(), i128::MIN.to_string());
        assert_eq!(BigInteger::from(u128::MAX).to_string(), u128::MAX.to_string());
        assert_eq!(BigInteger::from(usize::MAX).to_string(), usize::MAX.to_string());
    }

    #[test]
    fn test_from_display() {
        let big = BigInt::parse_bytes(b"-98765432109876543210", 10).unwrap();
        assert_eq!(BigInteger::from_display(&big).unwrap().to_string(), "-98765432109876543210");
        assert_eq!(BigInteger::from_display("77").unwrap().to_string(), "77");
        assert!(BigInteger::from_display(&1.5f64).is_err());
    }

    #[test]
    fn test_display_flags() {
        let a = BigInteger::from(-42);
        assert_eq!(format!("{}", a), "-42");
        assert_eq!(format!("{:>6}", a), "   -42");
        assert_eq!(format!("{:+}", BigInteger::from(42)), "+42");
        assert_eq!(String::from(&a), "-42");
        assert_eq!(String::from(a), "-42");
    }

    #[test]
    fn test_not() {
        assert!(!BigInteger::from(0));
        assert!(!&BigInteger::parse("-000").unwrap());
        assert!(!(!BigInteger::from(3)));
    }

    #[test]
    fn test_serde() {
        let a = BigInteger::parse("-123456789012345678901234567890").unwrap();
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "\"-123456789012345678901234567890\"");
        let b: BigInteger = serde_json::from_str(&json).unwrap();
        assert_eq!(a, b);
        assert!(serde_json::from_str::<BigInteger>("\"12a\"").is_err());
    }

    #[test]
    fn test_pad_with_zeros() {
        assert_eq!(pad_with_zeros(&[1, 2], 4), vec![0, 0, 1, 2]);
        assert_eq!(pad_with_zeros(&[1, 2], 2), vec![1, 2]);
        assert_eq!(pad_with_zeros(&[1, 2], 1), vec![1, 2]);
    }
}
