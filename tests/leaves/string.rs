use schema_rail::{extract_error, ErrorDict, ErrorKind, SchemaError, Str, Validator, Value};

#[test]
fn accepts_non_blank_strings() {
    assert_eq!(Str::new().check(&Value::from("foo")), Ok(Value::from("foo")));
    assert_eq!(extract_error(&Str::new(), &Value::from("")), Err(ErrorDict::from("blank value is not allowed")));
    assert_eq!(extract_error(&Str::new(), &Value::from(1)), Err(ErrorDict::from("value is not a string")));
}

#[test]
fn blank_can_be_allowed() {
    let blank = Str::new().allow_blank();
    assert_eq!(blank.check(&Value::from("")), Ok(Value::from("")));
    assert_eq!(blank.display().to_string(), "<String(blank)>");
    assert_eq!(Str::new().display().to_string(), "<String>");
}

#[test]
fn length_is_counted_in_characters() {
    let bounded = Str::new().min_length(2).max_length(6);
    assert_eq!(bounded.check(&Value::from("123")), Ok(Value::from("123")));
    assert_eq!(bounded.check(&Value::from("héllo")), Ok(Value::from("héllo")));
    assert_eq!(
        extract_error(&bounded, &Value::from("1")),
        Err(ErrorDict::from("String is shorter than 2 characters"))
    );
    assert_eq!(
        extract_error(&bounded, &Value::from("1234567")),
        Err(ErrorDict::from("String is longer than 6 characters"))
    );
    assert_eq!(
        Str::new().max_length(4).check(&Value::from("ééééé")).unwrap_err().kind(),
        Some(ErrorKind::LengthViolation)
    );
}

#[test]
fn pattern_returns_the_matched_prefix() {
    let word = Str::new().pattern(r"\w+").unwrap();
    assert_eq!(word.check(&Value::from("wqerwqer")), Ok(Value::from("wqerwqer")));
    assert_eq!(word.check(&Value::from("wqe rwqer")), Ok(Value::from("wqe")));
}

#[test]
fn pattern_must_match_at_the_start() {
    let digits = Str::new().pattern(r"\d+").unwrap();
    let err = digits.check(&Value::from("abc123")).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::PatternMismatch));

    let full = Str::new().pattern(r"^\w+$").unwrap();
    assert_eq!(
        extract_error(&full, &Value::from("wqe rwqer")),
        Err(ErrorDict::from(r"value 'wqe rwqer' does not match pattern: ^\w+$"))
    );
}

#[test]
fn invalid_pattern_is_a_schema_error() {
    match Str::new().pattern("(") {
        Err(SchemaError::InvalidPattern { pattern, reason }) => {
            assert_eq!(pattern, "(");
            assert!(!reason.is_empty());
        }
        other => panic!("expected invalid pattern, got {other:?}"),
    }
}
