//! Diagnostics for Tally.
//!
//! Every evaluation failure is a [`CalcError`]: a typed [`CalcErrorKind`],
//! the span of the offending input and, for operator failures, the span of
//! the operator itself.
//!
//! - Error codes for searchability (`tally --explain E1002`)
//! - Messages stable enough to hand to API clients verbatim
//! - Spans in original character offsets
//! - Terminal rendering that underlines both spans

mod calc_error;
mod error_code;
pub mod errors;
pub mod render;

pub use calc_error::{
    division_by_zero, empty_expression, empty_parentheses, operator_failure,
    operator_not_followed_by_expression, too_deeply_nested, unexpected_character,
    unmatched_open_parentheses, CalcError, CalcErrorKind, CalcResult, ExpectedToken,
};
pub use error_code::{ErrorCode, UnknownErrorCode};
pub use errors::ErrorDocs;
pub use render::render;
