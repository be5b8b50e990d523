//! Tier-by-tier reduction.
//!
//! `eval` scans one level of a view. A lone operand is either a digit run
//! (parsed directly) or a bracketed group (stripped and evaluated one level
//! down). Otherwise operators are folded one priority tier at a time, and
//! each operand is resolved only when an operator consumes it.

use std::collections::VecDeque;

use tally_diagnostic::{
    empty_expression, empty_parentheses, operator_failure, too_deeply_nested, CalcResult,
};
use tally_ir::{OperatorRegistry, Span};
use tally_lexer::{scan, view_span, ExprToken, OperatorToken, SourceBuffer, SourceView};
use tracing::{debug, trace};

use crate::{ensure_sufficient_stack, EvalConfig};

/// Evaluates expressions against one operator registry.
///
/// Holds no per-evaluation state, so a single evaluator can serve any
/// number of callers, concurrently if shared by reference.
#[derive(Clone, Debug)]
pub struct Evaluator {
    registry: OperatorRegistry,
    config: EvalConfig,
}

impl Evaluator {
    pub fn new(registry: OperatorRegistry) -> Self {
        Self::with_config(registry, EvalConfig::default())
    }

    pub fn with_config(registry: OperatorRegistry, config: EvalConfig) -> Self {
        Evaluator { registry, config }
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    pub fn config(&self) -> EvalConfig {
        self.config
    }

    /// Evaluate a complete input string.
    pub fn evaluate(&self, text: &str) -> CalcResult<f64> {
        let buffer = SourceBuffer::new(text);
        let result = self.eval(buffer.view());
        match &result {
            Ok(value) => debug!(input = text, value, "evaluated"),
            Err(err) => debug!(
                input = text,
                code = %err.code(),
                span = ?err.span,
                "evaluation failed"
            ),
        }
        result
    }

    /// Evaluate a view as a top-level expression.
    pub fn eval(&self, view: SourceView<'_>) -> CalcResult<f64> {
        self.eval_at_depth(view, 0)
    }

    /// `depth` counts the bracket layers already stripped above `view`.
    fn eval_at_depth(&self, view: SourceView<'_>, depth: usize) -> CalcResult<f64> {
        ensure_sufficient_stack(|| {
            let queues = scan(view, &self.registry)?;
            if queues.is_single() {
                let (mut expressions, _) = queues.into_parts();
                return match expressions.pop_front() {
                    Some(token) => self.eval_single(token, depth),
                    None => Err(empty_expression(view_span(&view))),
                };
            }
            let (expressions, operators) = queues.into_parts();
            self.reduce(view, expressions, operators, depth)
        })
    }

    /// A lone operand produced by scanning.
    fn eval_single(&self, token: ExprToken<'_>, depth: usize) -> CalcResult<f64> {
        match token {
            ExprToken::Source {
                view,
                enclosed_in_brackets: true,
            } => self.eval_group(view, depth),
            ExprToken::Source {
                view,
                enclosed_in_brackets: false,
            } => Ok(parse_digits(view)),
            ExprToken::Value { value, .. } => Ok(value),
        }
    }

    /// Strip one layer of brackets from `group` and evaluate the interior.
    fn eval_group(&self, group: SourceView<'_>, depth: usize) -> CalcResult<f64> {
        let span = view_span(&group);
        let depth = depth + 1;
        if depth > self.config.max_depth {
            return Err(too_deeply_nested(self.config.max_depth, span));
        }

        let interior = group.slice(1, group.len().saturating_sub(1));
        trace!(depth, %span, "entering group");
        match self.eval_at_depth(interior, depth) {
            Err(err) if err.is_empty_expression() => Err(empty_parentheses(span)),
            result => result,
        }
    }

    /// Numeric value of an operand, evaluating it if needed.
    fn resolve(&self, token: &ExprToken<'_>, depth: usize) -> CalcResult<f64> {
        match token {
            ExprToken::Value { value, .. } => Ok(*value),
            ExprToken::Source { view, .. } => self.eval_at_depth(*view, depth),
        }
    }

    /// Fold all tiers, highest priority first, down to one operand.
    fn reduce<'a>(
        &self,
        view: SourceView<'a>,
        mut expressions: VecDeque<ExprToken<'a>>,
        mut operators: VecDeque<OperatorToken>,
        depth: usize,
    ) -> CalcResult<f64> {
        for &priority in self.registry.priorities_descending() {
            if operators.is_empty() {
                break;
            }
            (expressions, operators) = self.apply_tier(priority, expressions, operators, depth)?;
        }
        debug_assert!(operators.is_empty());
        match expressions.front() {
            Some(token) => self.resolve(token, depth),
            None => Err(empty_expression(view_span(&view))),
        }
    }

    /// Apply every operator of `priority`, left to right.
    ///
    /// Operators of other priorities are carried over in order together with
    /// the operand to their left, so the result is again a well-formed pair
    /// of queues.
    fn apply_tier<'a>(
        &self,
        priority: u8,
        mut expressions: VecDeque<ExprToken<'a>>,
        operators: VecDeque<OperatorToken>,
        depth: usize,
    ) -> CalcResult<(VecDeque<ExprToken<'a>>, VecDeque<OperatorToken>)> {
        let mut next_expressions = VecDeque::with_capacity(expressions.len());
        let mut next_operators = VecDeque::with_capacity(operators.len());

        let Some(mut front) = expressions.pop_front() else {
            return Ok((next_expressions, operators));
        };
        for (operator, rhs) in operators.into_iter().zip(expressions) {
            if operator.priority() == priority {
                front = self.apply(&front, operator, &rhs, depth)?;
            } else {
                next_expressions.push_back(front);
                next_operators.push_back(operator);
                front = rhs;
            }
        }
        next_expressions.push_back(front);

        trace!(
            priority,
            remaining = next_operators.len(),
            "tier reduced"
        );
        Ok((next_expressions, next_operators))
    }

    /// Apply one operator. The result carries the right operand's span.
    fn apply<'a>(
        &self,
        lhs: &ExprToken<'a>,
        operator: OperatorToken,
        rhs: &ExprToken<'a>,
        depth: usize,
    ) -> CalcResult<ExprToken<'a>> {
        let left = self.resolve(lhs, depth)?;
        let right = self.resolve(rhs, depth)?;
        let value = operator.op.apply(left, right).map_err(|err| {
            operator_failure(err, Span::new(lhs.start(), rhs.end()), operator.span)
        })?;
        Ok(ExprToken::evaluated(value, rhs.span()))
    }
}

/// Value of a digit run. Non-digits cannot reach here; the scanner only
/// emits unbracketed operands made of ASCII digits.
fn parse_digits(view: SourceView<'_>) -> f64 {
    view.chars().iter().fold(0.0, |acc, c| {
        acc * 10.0 + f64::from(c.to_digit(10).unwrap_or(0))
    })
}
