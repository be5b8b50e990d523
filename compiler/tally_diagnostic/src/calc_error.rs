//! Positioned evaluation errors.
//!
//! `CalcErrorKind` names what went wrong; `CalcError` adds where. Factory
//! functions (e.g. `division_by_zero()`) are the public way to build one, so
//! every kind always arrives with the spans it is documented to carry.

use std::fmt;

use tally_ir::{OperatorError, Span};

use crate::ErrorCode;

/// Result of scanning or evaluating.
pub type CalcResult<T> = Result<T, CalcError>;

/// What the scanner was looking for when it hit an unexpected character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExpectedToken {
    /// `(` or a digit.
    ExpressionStart,
    /// One of the registered operator symbols.
    Operator,
}

/// Typed error category.
///
/// The `Display` impl produces the message API clients receive as
/// `errorMessage`, so the wording is part of the external contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CalcErrorKind {
    // Scanning
    EmptyExpression,
    OperatorNotFollowedByExpression,
    UnexpectedCharacter { found: char, expected: ExpectedToken },
    UnmatchedOpenParentheses,

    // Evaluation
    EmptyParentheses,
    DivisionByZero,
    TooDeeplyNested { limit: usize },
}

impl CalcErrorKind {
    /// The code used for `--explain`.
    pub const fn code(&self) -> ErrorCode {
        match self {
            CalcErrorKind::EmptyExpression => ErrorCode::E0001,
            CalcErrorKind::OperatorNotFollowedByExpression => ErrorCode::E0002,
            CalcErrorKind::UnexpectedCharacter { .. } => ErrorCode::E0003,
            CalcErrorKind::UnmatchedOpenParentheses => ErrorCode::E0004,
            CalcErrorKind::EmptyParentheses => ErrorCode::E1001,
            CalcErrorKind::DivisionByZero => ErrorCode::E1002,
            CalcErrorKind::TooDeeplyNested { .. } => ErrorCode::E1003,
        }
    }
}

impl fmt::Display for CalcErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcErrorKind::EmptyExpression => {
                write!(f, "Expected expression to parse, but found nothing.")
            }
            CalcErrorKind::OperatorNotFollowedByExpression => {
                write!(f, "Expected expression after operator, but input ended.")
            }
            CalcErrorKind::UnexpectedCharacter {
                found,
                expected: ExpectedToken::ExpressionStart,
            } => write!(f, "Expected '(' or number, but instead got '{found}'."),
            CalcErrorKind::UnexpectedCharacter {
                found,
                expected: ExpectedToken::Operator,
            } => write!(
                f,
                "Expected character/s corresponding to an operator, but instead got '{found}'."
            ),
            CalcErrorKind::UnmatchedOpenParentheses => write!(
                f,
                "Following parenthesis doesn't have matching closing parenthesis"
            ),
            CalcErrorKind::EmptyParentheses => write!(f, "Cannot evaluate empty parentheses."),
            CalcErrorKind::DivisionByZero => write!(f, "Cannot divide by zero."),
            CalcErrorKind::TooDeeplyNested { limit } => write!(
                f,
                "Parentheses are nested too deeply (limit is {limit} levels)."
            ),
        }
    }
}

/// An evaluation failure with its location in the original input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalcError {
    pub kind: CalcErrorKind,
    /// Offending part of the input.
    pub span: Option<Span>,
    /// The operator involved, for operator failures and dangling operators.
    pub operator_span: Option<Span>,
}

impl CalcError {
    /// Create an error from a kind, with no position yet.
    pub fn new(kind: CalcErrorKind) -> Self {
        Self {
            kind,
            span: None,
            operator_span: None,
        }
    }

    /// Attach the span of the offending input.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach the span of the operator involved.
    #[must_use]
    pub fn with_operator_span(mut self, span: Span) -> Self {
        self.operator_span = Some(span);
        self
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// The client-facing message.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    #[inline]
    pub fn is_empty_expression(&self) -> bool {
        matches!(self.kind, CalcErrorKind::EmptyExpression)
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for CalcError {}

// Factory functions

/// Nothing to evaluate in `span`.
#[cold]
pub fn empty_expression(span: Span) -> CalcError {
    CalcError::new(CalcErrorKind::EmptyExpression).with_span(span)
}

/// Input ended after the operator at `operator_span`.
#[cold]
pub fn operator_not_followed_by_expression(span: Span, operator_span: Span) -> CalcError {
    CalcError::new(CalcErrorKind::OperatorNotFollowedByExpression)
        .with_span(span)
        .with_operator_span(operator_span)
}

/// `found` is not what the scanner expected at `span`.
#[cold]
pub fn unexpected_character(found: char, expected: ExpectedToken, span: Span) -> CalcError {
    CalcError::new(CalcErrorKind::UnexpectedCharacter { found, expected }).with_span(span)
}

/// The `(` at `span` is never closed.
#[cold]
pub fn unmatched_open_parentheses(span: Span) -> CalcError {
    CalcError::new(CalcErrorKind::UnmatchedOpenParentheses).with_span(span)
}

/// The bracket pair at `span` encloses nothing.
#[cold]
pub fn empty_parentheses(span: Span) -> CalcError {
    CalcError::new(CalcErrorKind::EmptyParentheses).with_span(span)
}

/// Division by zero over `span`, using the operator at `operator_span`.
#[cold]
pub fn division_by_zero(span: Span, operator_span: Span) -> CalcError {
    CalcError::new(CalcErrorKind::DivisionByZero)
        .with_span(span)
        .with_operator_span(operator_span)
}

/// Nesting deeper than `limit` at the bracket pair `span`.
#[cold]
pub fn too_deeply_nested(limit: usize, span: Span) -> CalcError {
    CalcError::new(CalcErrorKind::TooDeeplyNested { limit }).with_span(span)
}

/// Position an operator failure: `span` covers both operands,
/// `operator_span` the operator symbol.
#[cold]
pub fn operator_failure(error: OperatorError, span: Span, operator_span: Span) -> CalcError {
    match error {
        OperatorError::DivisionByZero => division_by_zero(span, operator_span),
    }
}

#[cfg(test)]
mod tests;
