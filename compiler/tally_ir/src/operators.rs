//! Binary operators.
//!
//! The operator set is fixed (not user-extensible), so a closed enum with
//! direct pattern matching is used instead of trait objects.

use std::fmt;

/// Priority of the additive tier (`+`, `-`).
pub const ADDITIVE_PRIORITY: u8 = 1;

/// Priority of the multiplicative tier (`*`, `/`).
pub const MULTIPLICATIVE_PRIORITY: u8 = 2;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    /// Real-number quotient.
    FloatDivide,
    /// Quotient floored toward negative infinity (`-10 / 3 == -4`).
    IntegerDivide,
}

/// How `/` behaves. Chosen once, when the registry is built.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum DivisionMode {
    #[default]
    Float,
    Integer,
}

impl DivisionMode {
    /// Map the `use integer division` configuration flag to a mode.
    pub const fn from_flag(use_integer_division: bool) -> Self {
        if use_integer_division {
            DivisionMode::Integer
        } else {
            DivisionMode::Float
        }
    }

    /// The operator registered under `/` for this mode.
    pub const fn operator(self) -> BinaryOp {
        match self {
            DivisionMode::Float => BinaryOp::FloatDivide,
            DivisionMode::Integer => BinaryOp::IntegerDivide,
        }
    }
}

/// Failure of an operator function.
///
/// Carries no position: the reducer attaches the operand and operator spans
/// when it turns this into a positioned error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OperatorError {
    DivisionByZero,
}

impl fmt::Display for OperatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorError::DivisionByZero => write!(f, "cannot divide by zero"),
        }
    }
}

impl std::error::Error for OperatorError {}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::FloatDivide | Self::IntegerDivide => "/",
        }
    }

    /// Returns the priority of this operator.
    ///
    /// Higher number = binds tighter. Operators sharing a priority form one
    /// reduction tier and associate left to right.
    pub const fn priority(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => ADDITIVE_PRIORITY,
            Self::Multiply | Self::FloatDivide | Self::IntegerDivide => MULTIPLICATIVE_PRIORITY,
        }
    }

    /// Apply the operator to two operands.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, OperatorError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::FloatDivide => checked_div(rhs, || lhs / rhs),
            Self::IntegerDivide => checked_div(rhs, || (lhs / rhs).floor()),
        }
    }
}

/// Division with zero guard, shared by both division modes.
#[inline]
fn checked_div(divisor: f64, op: impl FnOnce() -> f64) -> Result<f64, OperatorError> {
    if divisor == 0.0 {
        Err(OperatorError::DivisionByZero)
    } else {
        Ok(op())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
