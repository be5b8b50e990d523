//! Evaluator for Tally arithmetic expressions.
//!
//! Evaluation works on flat token queues rather than a parse tree. Each
//! call scans one level of the input, folds operators tier by tier (highest
//! priority first, left to right within a tier) and recurses into
//! parenthesized operands only when their value is needed.
//!
//! Every error carries original character offsets, however deep the
//! recursion that produced it.
//!
//! ```text
//! let value = tally_eval::evaluate("(8 - 3 + 3) / 4", false)?;
//! assert_eq!(value, 2.0);
//! ```

mod config;
mod evaluator;
mod stack;

pub use config::{EvalConfig, DEFAULT_MAX_DEPTH};
pub use evaluator::Evaluator;
pub use stack::ensure_sufficient_stack;

pub use tally_diagnostic::{CalcError, CalcErrorKind, CalcResult};
pub use tally_ir::{DivisionMode, OperatorRegistry};

/// Evaluate `text` with the standard operators.
///
/// `use_integer_division` selects floored division for `/`.
pub fn evaluate(text: &str, use_integer_division: bool) -> CalcResult<f64> {
    let registry = OperatorRegistry::standard(DivisionMode::from_flag(use_integer_division));
    Evaluator::new(registry).evaluate(text)
}
