pub mod bigint;
pub mod calculator;
pub mod error;

pub use bigint::{BigInteger, DEFAULT_SQRT_ITERATIONS, NEGATIVE_ONE, ONE, TWO, ZERO};
pub use error::{Error, ParseBigIntegerError};
