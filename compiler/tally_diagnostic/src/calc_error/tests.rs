use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages_match_client_contract() {
    let cases = [
        (
            CalcErrorKind::EmptyExpression,
            "Expected expression to parse, but found nothing.",
        ),
        (
            CalcErrorKind::OperatorNotFollowedByExpression,
            "Expected expression after operator, but input ended.",
        ),
        (
            CalcErrorKind::UnexpectedCharacter {
                found: 'x',
                expected: ExpectedToken::ExpressionStart,
            },
            "Expected '(' or number, but instead got 'x'.",
        ),
        (
            CalcErrorKind::UnexpectedCharacter {
                found: ')',
                expected: ExpectedToken::Operator,
            },
            "Expected character/s corresponding to an operator, but instead got ')'.",
        ),
        (
            CalcErrorKind::UnmatchedOpenParentheses,
            "Following parenthesis doesn't have matching closing parenthesis",
        ),
        (
            CalcErrorKind::EmptyParentheses,
            "Cannot evaluate empty parentheses.",
        ),
        (CalcErrorKind::DivisionByZero, "Cannot divide by zero."),
        (
            CalcErrorKind::TooDeeplyNested { limit: 4 },
            "Parentheses are nested too deeply (limit is 4 levels).",
        ),
    ];
    for (kind, expected) in cases {
        assert_eq!(kind.to_string(), expected);
    }
}

#[test]
fn codes_per_kind() {
    assert_eq!(CalcErrorKind::EmptyExpression.code(), ErrorCode::E0001);
    assert_eq!(
        CalcErrorKind::OperatorNotFollowedByExpression.code(),
        ErrorCode::E0002
    );
    assert_eq!(CalcErrorKind::UnmatchedOpenParentheses.code(), ErrorCode::E0004);
    assert_eq!(CalcErrorKind::EmptyParentheses.code(), ErrorCode::E1001);
    assert_eq!(CalcErrorKind::DivisionByZero.code(), ErrorCode::E1002);
    assert_eq!(
        CalcErrorKind::TooDeeplyNested { limit: 1 }.code(),
        ErrorCode::E1003
    );
}

#[test]
fn factories_attach_spans() {
    let err = division_by_zero(Span::new(0, 5), Span::new(2, 3));
    assert_eq!(err.kind, CalcErrorKind::DivisionByZero);
    assert_eq!(err.span, Some(Span::new(0, 5)));
    assert_eq!(err.operator_span, Some(Span::new(2, 3)));

    let err = empty_parentheses(Span::new(4, 7));
    assert_eq!(err.span, Some(Span::new(4, 7)));
    assert_eq!(err.operator_span, None);
}

#[test]
fn operator_failure_is_positioned() {
    let err = operator_failure(
        OperatorError::DivisionByZero,
        Span::new(5, 10),
        Span::new(7, 8),
    );
    assert_eq!(err, division_by_zero(Span::new(5, 10), Span::new(7, 8)));
    assert_eq!(err.code(), ErrorCode::E1002);
}

#[test]
fn display_is_message() {
    let err = empty_expression(Span::new(0, 0));
    assert_eq!(err.to_string(), err.message());
    assert!(err.is_empty_expression());
    assert!(!empty_parentheses(Span::new(0, 2)).is_empty_expression());
}

#[test]
fn unpositioned_error() {
    let err = CalcError::new(CalcErrorKind::EmptyParentheses);
    assert_eq!(err.span, None);
    assert_eq!(err.operator_span, None);
}
