//! Error codes for all evaluation diagnostics.
//!
//! Each code is a unique identifier (e.g. `E1002`) used for `--explain`
//! lookups. The first digit names the stage that produced the error.

use std::fmt;
use std::str::FromStr;

/// Error codes for all evaluation diagnostics.
///
/// Format: E#### where the first digit indicates the stage:
/// - E0xxx: scanning errors (malformed input)
/// - E1xxx: evaluation errors (well-formed input that cannot be computed)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scanning Errors (E0xxx)
    /// Nothing to evaluate
    E0001,
    /// Operator at end of input
    E0002,
    /// Unexpected character
    E0003,
    /// Unclosed parenthesis
    E0004,

    // Evaluation Errors (E1xxx)
    /// Empty parentheses
    E1001,
    /// Division by zero
    E1002,
    /// Nesting limit exceeded
    E1003,
}

impl ErrorCode {
    pub const ALL: &[ErrorCode] = &[
        // Scanning
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        // Evaluation
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
    ];

    /// Get the string representation of this error code.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that is not a known error code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownErrorCode(pub String);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code '{}'", self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    /// Parse a code, case-insensitively (`e1002` is accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownErrorCode(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests;
