use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    std::iter::once("tally")
        .chain(list.iter().copied())
        .map(String::from)
        .collect()
}

#[test]
fn no_arguments_is_help() {
    assert_eq!(parse_args(&args(&[])), Ok(Command::Help));
}

#[test]
fn eval_with_flag_in_any_position() {
    let expected = Ok(Command::Eval {
        expression: "7 / 2".to_string(),
        integer_division: true,
    });
    assert_eq!(parse_args(&args(&["eval", "7 / 2", "--integer-division"])), expected);
    assert_eq!(parse_args(&args(&["eval", "-i", "7 / 2"])), expected);
}

#[test]
fn eval_requires_expression() {
    assert!(matches!(
        parse_args(&args(&["eval"])),
        Err(CliError::MissingArgument { .. })
    ));
}

#[test]
fn eval_rejects_extra_arguments() {
    assert_eq!(
        parse_args(&args(&["eval", "1", "2"])),
        Err(CliError::UnknownOption("2".to_string()))
    );
}

#[test]
fn json_expression_is_optional() {
    assert_eq!(
        parse_args(&args(&["json"])),
        Ok(Command::Json { expression: None })
    );
    assert_eq!(
        parse_args(&args(&["json", ""])),
        Ok(Command::Json {
            expression: Some(String::new())
        })
    );
}

#[test]
fn explain_aliases() {
    let expected = Ok(Command::Explain {
        code: "E1002".to_string(),
    });
    assert_eq!(parse_args(&args(&["--explain", "E1002"])), expected);
    assert_eq!(parse_args(&args(&["explain", "E1002"])), expected);
}

#[test]
fn unknown_command() {
    let err = parse_args(&args(&["frobnicate"]));
    assert_eq!(err, Err(CliError::UnknownCommand("frobnicate".to_string())));
    assert!(CliError::UnknownCommand(String::new()).wants_usage());
}

#[test]
fn usage_lists_commands() {
    let text = usage();
    for command in ["eval", "json", "lex", "--explain", "help", "version"] {
        assert!(text.contains(command), "usage is missing {command}");
    }
}
