//! The `eval` command: evaluate one expression.

use tally_diagnostic::render;
use tally_eval::Evaluator;

use super::{line, Outcome};

/// Evaluate `expression`, printing the value or a rendered diagnostic.
pub fn eval_expression(expression: &str, evaluator: &Evaluator) -> Outcome {
    match evaluator.evaluate(expression) {
        Ok(value) => Outcome::success(line(value.to_string())),
        Err(err) => Outcome::failure(render(&err, expression)),
    }
}
