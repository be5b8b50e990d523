//! The `json` command: show the response a request would get.

use tally_eval::Evaluator;

use super::{line, Outcome};
use crate::response::ApiResponse;

/// Print the response body for `expression` (absent models a request
/// without the parameter). Non-200 statuses are reported on stderr and exit
/// with 1.
pub fn json_response(expression: Option<&str>, evaluator: &Evaluator) -> Outcome {
    let response = ApiResponse::from_query(expression, evaluator);
    let body = response.body_json();
    let stdout = if body.is_empty() { body } else { line(body) };
    if response.status.is_success() {
        Outcome::success(stdout)
    } else {
        Outcome {
            stdout,
            stderr: line(format!("status: {}", response.status.code())),
            exit_code: 1,
        }
    }
}
