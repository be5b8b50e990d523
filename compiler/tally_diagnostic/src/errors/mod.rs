//! Long-form explanations served by `tally --explain`.
//!
//! One markdown page per [`ErrorCode`], headed `# EXXXX: Title`, compiled
//! into the binary so the CLI needs no data files at runtime.

use crate::ErrorCode;

/// Lookup over the embedded explanation pages.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Markdown page for `code`, if one is embedded.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Codes that have a page, in table order.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Raised while scanning
    (ErrorCode::E0001, include_str!("E0001.md")),
    (ErrorCode::E0002, include_str!("E0002.md")),
    (ErrorCode::E0003, include_str!("E0003.md")),
    (ErrorCode::E0004, include_str!("E0004.md")),
    // Raised while reducing
    (ErrorCode::E1001, include_str!("E1001.md")),
    (ErrorCode::E1002, include_str!("E1002.md")),
    (ErrorCode::E1003, include_str!("E1003.md")),
];

#[cfg(test)]
mod tests;
