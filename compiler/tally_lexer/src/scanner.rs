//! Single-pass scanner.
//!
//! A two-state machine over a [`Cursor`]: it alternates between expecting
//! an operand and expecting an operator (or the end). It never backtracks
//! and never looks inside a parenthesized group beyond finding its match.

use tally_diagnostic::{
    empty_expression, operator_not_followed_by_expression, unexpected_character,
    unmatched_open_parentheses, CalcError, CalcResult, ExpectedToken,
};
use tally_ir::{OperatorRegistry, Span};
use tally_lexer_core::{Cursor, SourceView};
use tracing::trace;

use crate::{view_span, ExprToken, OperatorToken, TokenQueues};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    ExpectExpression,
    ExpectOperatorOrEnd,
    Done,
}

/// Scan `view` into operand and operator queues.
///
/// On success the queues satisfy [`TokenQueues::is_well_formed`]. The first
/// malformed construct aborts the scan with a positioned error.
pub fn scan<'a>(view: SourceView<'a>, registry: &OperatorRegistry) -> CalcResult<TokenQueues<'a>> {
    let mut scanner = Scanner {
        cursor: view.cursor(),
        registry,
        queues: TokenQueues::new(),
    };
    let mut state = State::ExpectExpression;
    while state != State::Done {
        state = match state {
            State::ExpectExpression => scanner.expect_expression()?,
            State::ExpectOperatorOrEnd => scanner.expect_operator_or_end()?,
            State::Done => State::Done,
        };
    }
    trace!(
        expressions = scanner.queues.expression_count(),
        operators = scanner.queues.operator_count(),
        span = %view_span(&view),
        "scanned"
    );
    Ok(scanner.queues)
}

struct Scanner<'a, 'r> {
    cursor: Cursor<'a>,
    registry: &'r OperatorRegistry,
    queues: TokenQueues<'a>,
}

impl<'a> Scanner<'a, '_> {
    fn expect_expression(&mut self) -> CalcResult<State> {
        self.cursor.eat_whitespace();

        let Some(current) = self.cursor.current() else {
            return Err(self.end_while_expecting_expression());
        };

        let start = self.cursor.pos();
        let enclosed_in_brackets = if current == '(' {
            self.skip_to_matching_close()?;
            true
        } else if current.is_ascii_digit() {
            self.cursor.eat_while(|c| c.is_ascii_digit());
            false
        } else {
            return Err(unexpected_character(
                current,
                ExpectedToken::ExpressionStart,
                self.point_here(),
            ));
        };

        let view = self.cursor.view().slice(start, self.cursor.pos());
        self.queues
            .expressions
            .push_back(ExprToken::unevaluated(view, enclosed_in_brackets));
        Ok(State::ExpectOperatorOrEnd)
    }

    fn expect_operator_or_end(&mut self) -> CalcResult<State> {
        self.cursor.eat_whitespace();

        let Some(current) = self.cursor.current() else {
            return Ok(State::Done);
        };

        let registry = self.registry;
        let start = self.cursor.original_pos();
        for symbol in registry.symbols_by_descending_length() {
            if !self.cursor.starts_with(symbol) {
                continue;
            }
            let Some(op) = registry.lookup(symbol) else {
                continue;
            };
            let len = symbol.chars().count();
            let end = start.saturating_add(u32::try_from(len).unwrap_or(u32::MAX));
            self.cursor.advance_n(len);
            self.queues
                .operators
                .push_back(OperatorToken::new(op, Span::new(start, end)));
            return Ok(State::ExpectExpression);
        }

        Err(unexpected_character(
            current,
            ExpectedToken::Operator,
            self.point_here(),
        ))
    }

    /// Advance past the `)` matching the `(` under the cursor.
    fn skip_to_matching_close(&mut self) -> CalcResult<()> {
        let open = self.point_here();
        let mut depth = 1usize;
        self.cursor.advance();
        while let Some(c) = self.cursor.current() {
            match c {
                ')' => depth -= 1,
                '(' => depth += 1,
                _ => {}
            }
            self.cursor.advance();
            if depth == 0 {
                return Ok(());
            }
        }
        Err(unmatched_open_parentheses(open))
    }

    /// Input ran out where an operand was required.
    fn end_while_expecting_expression(&self) -> CalcError {
        match self.queues.operators.back() {
            None => empty_expression(view_span(&self.cursor.view())),
            Some(op) => operator_not_followed_by_expression(
                Span::new(op.span.start, op.span.end.saturating_add(1)),
                op.span,
            ),
        }
    }

    /// One-character span at the cursor.
    fn point_here(&self) -> Span {
        let pos = self.cursor.original_pos();
        Span::new(pos, pos.saturating_add(1))
    }
}
