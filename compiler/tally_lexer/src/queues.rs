//! The scanner's output: operand and operator queues.

use std::collections::VecDeque;
use std::fmt::Write as _;

use crate::{ExprToken, OperatorToken};

/// Operands and the operators between them.
///
/// Holds N expression tokens and N-1 operator tokens: operator `i` sits
/// between expressions `i` and `i + 1`. The reducer keeps that pairing
/// through every priority tier.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenQueues<'a> {
    pub expressions: VecDeque<ExprToken<'a>>,
    pub operators: VecDeque<OperatorToken>,
}

impl<'a> TokenQueues<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn expression_count(&self) -> usize {
        self.expressions.len()
    }

    #[inline]
    pub fn operator_count(&self) -> usize {
        self.operators.len()
    }

    /// Returns `true` if the queues hold one operand and no operators.
    pub fn is_single(&self) -> bool {
        self.expressions.len() == 1 && self.operators.is_empty()
    }

    /// Returns `true` if the pairing invariant holds.
    pub fn is_well_formed(&self) -> bool {
        self.expressions.len() == self.operators.len() + 1
    }

    pub fn into_parts(self) -> (VecDeque<ExprToken<'a>>, VecDeque<OperatorToken>) {
        (self.expressions, self.operators)
    }

    /// Human-readable listing of both queues, interleaved in source order.
    ///
    /// ```text
    /// expr  0..1   8
    /// op    2..3   +
    /// expr  4..11  (1 - 2) [bracketed]
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut operators = self.operators.iter();
        for expr in &self.expressions {
            let span = expr.span().to_string();
            let _ = write!(out, "expr  {span:<6} {expr}");
            if expr.enclosed_in_brackets() {
                out.push_str(" [bracketed]");
            }
            if expr.cached_value().is_some() {
                out.push_str(" [evaluated]");
            }
            out.push('\n');
            if let Some(op) = operators.next() {
                let span = op.span.to_string();
                let _ = writeln!(out, "op    {span:<6} {op}");
            }
        }
        out
    }
}
