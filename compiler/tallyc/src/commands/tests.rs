use super::*;
use crate::config::Config;
use pretty_assertions::assert_eq;

fn float() -> tally_eval::Evaluator {
    Config::default().evaluator()
}

// === eval ===

#[test]
fn eval_prints_value() {
    assert_eq!(
        eval_expression("8 + 5 - 2 * 2", &float()),
        Outcome::success("9\n")
    );
    assert_eq!(eval_expression("7 / 2", &float()), Outcome::success("3.5\n"));
}

#[test]
fn eval_renders_errors() {
    let outcome = eval_expression("10 / 5 / 0", &float());
    assert!(!outcome.is_success());
    assert!(outcome.stdout.is_empty());
    assert!(outcome.stderr.contains("E1002"), "{}", outcome.stderr);
    assert!(outcome.stderr.contains("10 / 5 / 0"), "{}", outcome.stderr);
}

// === json ===

#[test]
fn json_success() {
    assert_eq!(
        json_response(Some("(1 + 1) - 4"), &float()),
        Outcome::success("{\"result\":-2}\n")
    );
}

#[test]
fn json_missing_parameter() {
    let outcome = json_response(None, &float());
    assert_eq!(outcome.exit_code, 1);
    assert_eq!(outcome.stderr, "status: 400\n");
    assert!(outcome.stdout.contains("mandatory"));
}

#[test]
fn json_evaluation_error() {
    let outcome = json_response(Some("5  +    "), &float());
    assert_eq!(outcome.stderr, "status: 422\n");
    assert_eq!(
        outcome.stdout,
        "{\"errorMessage\":\"Expected expression after operator, but input ended.\",\"errorStartPos\":3,\"errorEndPos\":5,\"errorOpStartPos\":3,\"errorOpEndPos\":4}\n"
    );
}

// === lex ===

#[test]
fn lex_dumps_queues() {
    let outcome = lex_expression("8 + (1 - 2)", &Config::default());
    assert_eq!(
        outcome,
        Outcome::success(
            "expr  0..1   8\nop    2..3   +\nexpr  4..11  (1 - 2) [bracketed]\n\
             registry /=FloatDivide -=Subtract +=Add *=Multiply\n"
        )
    );
}

#[test]
fn lex_lists_configured_division() {
    let config = Config {
        use_integer_division: true,
        ..Config::default()
    };
    let outcome = lex_expression("9 / 2", &config);
    assert!(outcome.is_success());
    assert!(
        outcome.stdout.ends_with("registry /=IntegerDivide -=Subtract +=Add *=Multiply\n"),
        "{}",
        outcome.stdout
    );
}

#[test]
fn lex_reports_scan_errors() {
    let outcome = lex_expression("1 +", &Config::default());
    assert!(outcome.stderr.contains("E0002"), "{}", outcome.stderr);
}

// === explain ===

#[test]
fn explain_known_code() {
    let outcome = explain_error("E1001");
    assert!(outcome.is_success());
    assert!(outcome.stdout.starts_with("# E1001: Empty Parentheses"));
}

#[test]
fn explain_unknown_code() {
    let outcome = explain_error("E4242");
    assert_eq!(outcome.exit_code, 1);
    assert!(outcome.stderr.contains("Unknown error code: E4242"));
    assert!(outcome.stderr.contains("E0001, E0002"));
}

#[test]
fn line_adds_single_newline() {
    assert_eq!(line("a"), "a\n");
    assert_eq!(line("a\n"), "a\n");
}
