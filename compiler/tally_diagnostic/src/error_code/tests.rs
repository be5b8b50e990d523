use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_prints_code() {
    assert_eq!(ErrorCode::E0001.to_string(), "E0001");
    assert_eq!(ErrorCode::E1002.as_str(), "E1002");
}

#[test]
fn parse_accepts_any_case_and_padding() {
    assert_eq!("E1002".parse::<ErrorCode>(), Ok(ErrorCode::E1002));
    assert_eq!("e0004".parse::<ErrorCode>(), Ok(ErrorCode::E0004));
    assert_eq!(" E1003 ".parse::<ErrorCode>(), Ok(ErrorCode::E1003));
}

#[test]
fn parse_rejects_unknown_code() {
    assert_eq!(
        "E9999".parse::<ErrorCode>(),
        Err(UnknownErrorCode("E9999".to_string()))
    );
    assert_eq!(
        UnknownErrorCode("x".to_string()).to_string(),
        "unknown error code 'x'"
    );
}

#[test]
fn every_code_parses_from_its_text() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
}
