//! The `lex` command: show how the top level of an expression is scanned.

use std::fmt::Write;

use tally_diagnostic::render;
use tally_lexer::{scan, SourceBuffer};

use super::Outcome;
use crate::config::Config;

/// Dump the operand and operator queues for `expression`, followed by the
/// operator set they were scanned against.
///
/// Only the top level is scanned; parenthesized groups appear whole.
pub fn lex_expression(expression: &str, config: &Config) -> Outcome {
    let evaluator = config.evaluator();
    let registry = evaluator.registry();
    let buffer = SourceBuffer::new(expression);
    match scan(buffer.view(), registry) {
        Ok(queues) => {
            let mut out = queues.dump();
            out.push_str("registry");
            for op in registry.iter() {
                let _ = write!(out, " {}={op:?}", op.symbol());
            }
            out.push('\n');
            Outcome::success(out)
        }
        Err(err) => Outcome::failure(render(&err, expression)),
    }
}
