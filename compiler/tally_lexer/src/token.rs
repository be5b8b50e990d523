//! Expression and operator tokens.

use std::fmt;

use tally_ir::{BinaryOp, Span};
use tally_lexer_core::SourceView;

use crate::view_span;

/// An operand in the token stream.
///
/// Scanning only ever produces `Source` tokens. `Value` tokens appear during
/// reduction, when an operator has been applied and its result replaces the
/// two operands.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ExprToken<'a> {
    /// Not yet evaluated: a digit run or a whole parenthesized group.
    Source {
        view: SourceView<'a>,
        enclosed_in_brackets: bool,
    },
    /// Already evaluated. `span` is the span of the right-hand operand that
    /// produced it, so a later failure on this value points at the most
    /// recent operand rather than the whole folded chain.
    Value { value: f64, span: Span },
}

impl<'a> ExprToken<'a> {
    pub fn unevaluated(view: SourceView<'a>, enclosed_in_brackets: bool) -> Self {
        ExprToken::Source {
            view,
            enclosed_in_brackets,
        }
    }

    pub fn evaluated(value: f64, span: Span) -> Self {
        ExprToken::Value { value, span }
    }

    /// Original `[start, end)` of this token.
    pub fn span(&self) -> Span {
        match self {
            ExprToken::Source { view, .. } => view_span(view),
            ExprToken::Value { span, .. } => *span,
        }
    }

    #[inline]
    pub fn start(&self) -> u32 {
        self.span().start
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.span().end
    }

    /// Evaluated tokens are never bracketed.
    pub fn enclosed_in_brackets(&self) -> bool {
        match self {
            ExprToken::Source {
                enclosed_in_brackets,
                ..
            } => *enclosed_in_brackets,
            ExprToken::Value { .. } => false,
        }
    }

    /// The cached number, for evaluated tokens.
    pub fn cached_value(&self) -> Option<f64> {
        match self {
            ExprToken::Source { .. } => None,
            ExprToken::Value { value, .. } => Some(*value),
        }
    }

    /// The source text, for unevaluated tokens.
    pub fn view(&self) -> Option<SourceView<'a>> {
        match self {
            ExprToken::Source { view, .. } => Some(*view),
            ExprToken::Value { .. } => None,
        }
    }
}

impl fmt::Display for ExprToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprToken::Source { view, .. } => write!(f, "{view}"),
            ExprToken::Value { value, .. } => write!(f, "{value}"),
        }
    }
}

/// A matched operator symbol and where it was found.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OperatorToken {
    pub op: BinaryOp,
    pub span: Span,
}

impl OperatorToken {
    pub fn new(op: BinaryOp, span: Span) -> Self {
        OperatorToken { op, span }
    }

    #[inline]
    pub fn priority(&self) -> u8 {
        self.op.priority()
    }
}

impl fmt::Display for OperatorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.op)
    }
}
