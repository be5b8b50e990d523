//! The `explain` command: display documentation for error codes.

use tally_diagnostic::{ErrorCode, ErrorDocs};

use super::{line, Outcome};

/// Documentation for the error code `code_str`.
pub fn explain_error(code_str: &str) -> Outcome {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        let known: Vec<&str> = ErrorDocs::all_codes().map(ErrorCode::as_str).collect();
        return Outcome::failure(format!(
            "Unknown error code: {code_str}\n\nKnown codes: {}\n",
            known.join(", ")
        ));
    };

    match ErrorDocs::get(code) {
        Some(doc) => Outcome::success(line(doc)),
        None => Outcome::failure(format!("No documentation available for {code}\n")),
    }
}
