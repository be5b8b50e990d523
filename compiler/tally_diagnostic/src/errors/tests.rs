#![allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn division_page_is_embedded() {
    let doc = ErrorDocs::get(ErrorCode::E1002);
    assert!(doc.is_some());
    assert!(doc.unwrap().contains("Division By Zero"));
}

#[test]
fn every_code_has_a_page() {
    for code in ErrorCode::ALL {
        assert!(ErrorDocs::get(*code).is_some(), "{code} has no documentation");
    }
}

/// Every page starts with its own code as the heading.
#[test]
fn page_headings_match_codes() {
    for code in ErrorDocs::all_codes() {
        let doc = ErrorDocs::get(code).unwrap();
        assert!(
            doc.starts_with(&format!("# {code}:")),
            "{code} doc has wrong heading"
        );
    }
}

#[test]
fn table_lists_each_code_once_in_order() {
    let codes: Vec<_> = ErrorDocs::all_codes().collect();
    assert_eq!(codes, ErrorCode::ALL.to_vec());
}
