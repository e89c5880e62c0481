use std::io::{self, BufRead, Write};

use log::{debug, info};
use strum_macros::{Display, EnumIter, EnumString};

use crate::bigint::BigInteger;
use crate::error::{Error, ParseBigIntegerError};

pub const BANNER: &str = "\
This application supports arithmetic operations on arbitrarily large integer numbers.
Working with huge numbers is much more computationally expensive than staying within 64 bits.
Multiplication and division (and anything built on them, such as ^) are very slow for large operands.
";

#[derive(Debug, thiserror::Error)]
pub enum CalculatorError {
    #[error("Invalid operation: '{0}'")]
    InvalidOperation(String),
    #[error(transparent)]
    Arithmetic(#[from] Error),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl From<ParseBigIntegerError> for CalculatorError {
    fn from(err: ParseBigIntegerError) -> Self {
        CalculatorError::Arithmetic(err.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum Operation {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "%")]
    Rem,
    #[strum(serialize = "^")]
    Pow,
}

impl Operation {
    /// Read an operator token. Anything but exactly one recognized character
    /// is rejected.
    pub fn parse(token: &str) -> Result<Self, CalculatorError> {
        if token.chars().count() != 1 {
            return Err(CalculatorError::InvalidOperation(token.to_string()));
        }
        token
            .parse()
            .map_err(|_| CalculatorError::InvalidOperation(token.to_string()))
    }

    pub fn apply(self, lhs: &BigInteger, rhs: &BigInteger) -> Result<BigInteger, Error> {
        match self {
            Operation::Add => Ok(lhs + rhs),
            Operation::Sub => Ok(lhs - rhs),
            Operation::Mul => Ok(lhs * rhs),
            Operation::Div => lhs.try_div(rhs),
            Operation::Rem => lhs.try_rem(rhs),
            Operation::Pow => Ok(lhs.pow(rhs)),
        }
    }
}

/// Parse both operands, then the operator, and compute the result.
pub fn evaluate(lhs: &str, op: &str, rhs: &str) -> Result<BigInteger, CalculatorError> {
    let lhs = BigInteger::parse(lhs)?;
    let rhs = BigInteger::parse(rhs)?;
    let operation = Operation::parse(op)?;
    debug!(
        "evaluating {}-digit {} {}-digit",
        lhs.digit_count(),
        operation,
        rhs.digit_count()
    );

    Ok(operation.apply(&lhs, &rhs)?)
}

/// Operands and operator known before the session starts; missing ones are
/// prompted for.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub lhs: Option<String>,
    pub op: Option<String>,
    pub rhs: Option<String>,
}

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn write_banner(&mut self) -> Result<(), CalculatorError> {
        writeln!(self.output, "{BANNER}")?;
        Ok(())
    }

    /// Print `message` and read one line, without its line terminator.
    pub fn prompt(&mut self, message: &str) -> Result<String, CalculatorError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Collect the missing inputs, evaluate and print the result.
    pub fn run(&mut self, inputs: Inputs) -> Result<BigInteger, CalculatorError> {
        let lhs = match inputs.lhs {
            Some(lhs) => lhs,
            None => self.prompt("Enter the first number: ")?,
        };
        let rhs = match inputs.rhs {
            Some(rhs) => rhs,
            None => self.prompt("Enter the second number: ")?,
        };
        let op = match inputs.op {
            Some(op) => op,
            None => self.prompt("Enter the operation (+, -, *, /, %, ^): ")?,
        };

        let result = evaluate(&lhs, &op, &rhs)?;
        info!("computed a {}-digit result", result.digit_count());
        writeln!(self.output, "Result: {result}")?;
        Ok(result)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
