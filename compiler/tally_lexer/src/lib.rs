//! Token scanner for Tally.
//!
//! One left-to-right pass turns a [`SourceView`] into two queues: operand
//! tokens and the operator tokens between them. Parenthesized groups are
//! kept whole as single operand tokens; the evaluator scans their interior
//! later, on a slice that still carries the original offsets.
//!
//! ```text
//! "8 + (1 - 2) * 3"
//!   expressions: [8] [(1 - 2)] [3]
//!   operators:      [+]      [*]
//! ```

mod queues;
mod scanner;
mod token;

pub use queues::TokenQueues;
pub use scanner::scan;
pub use tally_lexer_core::{SourceBuffer, SourceView};
pub use token::{ExprToken, OperatorToken};

use tally_ir::Span;

/// Convert a view's `[start, end)` offsets into a [`Span`].
#[inline]
pub fn view_span(view: &SourceView<'_>) -> Span {
    let range = view.span();
    Span::new(range.start, range.end)
}
