use super::*;
use crate::{division_by_zero, empty_expression, operator_not_followed_by_expression};
use tally_ir::Span;

#[test]
fn render_includes_code_and_message() {
    let err = division_by_zero(Span::new(0, 5), Span::new(2, 3));
    let out = render(&err, "4 / 0");
    assert!(out.contains("E1002"), "{out}");
    assert!(out.contains("Cannot divide by zero."), "{out}");
    assert!(out.contains("4 / 0"), "{out}");
    assert!(out.contains("operator"), "{out}");
}

#[test]
fn render_clamps_span_past_end() {
    let err = operator_not_followed_by_expression(Span::new(2, 4), Span::new(2, 3));
    let out = render(&err, "5 +");
    assert!(out.contains("E0002"), "{out}");
    assert!(out.contains("5 +"), "{out}");
}

#[test]
fn render_empty_input() {
    let err = empty_expression(Span::new(0, 0));
    let out = render(&err, "");
    assert!(out.contains("E0001"), "{out}");
    assert!(out.contains("found nothing"), "{out}");
}

#[test]
fn render_without_spans() {
    let err = crate::CalcError::new(crate::CalcErrorKind::EmptyParentheses);
    let out = render(&err, "()");
    assert!(out.contains("E1001"), "{out}");
}
