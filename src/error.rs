/// Failure to read a decimal string as a [`BigInteger`](crate::BigInteger).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBigIntegerError {
    #[error("cannot parse an empty string as an integer")]
    Empty,
    #[error("a sign must be followed by at least one digit")]
    MissingDigits,
    #[error("cannot parse a non-digit character as an integer: {found:?} at position {position}")]
    InvalidDigit { found: char, position: usize },
    #[error("only radix 10 is supported, got {0}")]
    UnsupportedRadix(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseBigIntegerError),
    #[error("cannot divide by zero")]
    DivisionByZero,
    #[error("invalid argument {arg}: {msg}")]
    InvalidArgument { arg: &'static str, msg: &'static str },
}
