pub mod string;

use schema_rail::{
    extract_error, list, Any, Atom, Bool, Call, Check, DataError, Enum, ErrorDict, ErrorKind, Null,
    StrBool, Validator, Value,
};

#[test]
fn any_accepts_everything() {
    for value in [Value::Null, Value::from(1), list![1, "a"]] {
        assert_eq!(Any.check(&value), Ok(value.clone()));
    }
    assert_eq!(Any::new().display().to_string(), "<Any>");
}

#[test]
fn null_accepts_only_null() {
    assert_eq!(Null::new().check(&Value::Null), Ok(Value::Null));
    assert_eq!(extract_error(&Null::new(), &Value::from(1)), Err(ErrorDict::from("value should be null")));
}

#[test]
fn bool_accepts_only_booleans() {
    assert_eq!(Bool::new().check(&Value::from(true)), Ok(Value::from(true)));
    assert_eq!(Bool::new().check(&Value::from(false)), Ok(Value::from(false)));
    assert_eq!(
        extract_error(&Bool::new(), &Value::from(1)),
        Err(ErrorDict::from("value 1 should be true or false"))
    );
}

#[test]
fn str_bool_coerces_common_spellings() {
    let truthy = [Value::from(1), Value::from("y"), Value::from("1"), Value::from("YeS"), Value::from(" on "), Value::from(true)];
    for value in truthy {
        assert_eq!(StrBool::new().check(&value), Ok(Value::from(true)), "{value}");
    }

    let falsy = [Value::from(0), Value::from("n"), Value::Null, Value::from("0"), Value::from("No"), Value::from("none"), Value::from(false)];
    for value in falsy {
        assert_eq!(StrBool::new().check(&value), Ok(Value::from(false)), "{value}");
    }
}

#[test]
fn str_bool_rejects_other_values() {
    assert_eq!(
        extract_error(&StrBool::new(), &Value::from("aloha")),
        Err(ErrorDict::from("value aloha can't be converted to Bool"))
    );
    assert!(StrBool::new().check(&Value::from(2)).is_err());
    assert!(StrBool::new().check(&list![]).is_err());
}

#[test]
fn atom_matches_one_exact_value() {
    let atom = Atom::new("atom");
    assert_eq!(atom.check(&Value::from("atom")), Ok(Value::from("atom")));
    assert_eq!(
        extract_error(&atom, &Value::from("molecule")),
        Err(ErrorDict::from("value is not exactly 'atom'"))
    );
    assert_eq!(atom.display().to_string(), r#"<Atom("atom")>"#);
}

#[test]
fn enum_matches_any_variant() {
    let variants = Enum::new(["foo", "bar"]).variant(1);

    assert!(variants.check(&Value::from("foo")).is_ok());
    assert!(variants.check(&Value::from(1)).is_ok());
    assert_eq!(variants.variants().len(), 3);

    let err = variants.check(&Value::from(2)).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::InvalidValue));
    assert_eq!(err.to_string(), "value doesn't match any variant");
}

#[test]
fn call_returns_function_output() {
    let only_foo = Call::new(|v| match v.as_str() {
        Some("foo") => Ok(Value::from("FOO")),
        _ => Err(DataError::custom("I want only foo!")),
    });

    assert_eq!(only_foo.check(&Value::from("foo")), Ok(Value::from("FOO")));
    assert_eq!(extract_error(&only_foo, &Value::from("bar")), Err(ErrorDict::from("I want only foo!")));
    assert_eq!(only_foo.display().to_string(), "<Call>");
    assert_eq!(only_foo.named("only_foo").display().to_string(), "<Call(only_foo)>");
}

#[test]
fn check_returns_input_unchanged() {
    let positive = Check::new(|v| match v.as_f64() {
        Some(x) if x > 0.0 => Ok(()),
        _ => Err(DataError::custom("value is not positive")),
    })
    .named("positive");

    assert_eq!(positive.check(&Value::from(2.5)), Ok(Value::from(2.5)));
    assert_eq!(positive.check(&Value::from(3)), Ok(Value::from(3)));
    assert!(positive.check(&Value::from(-1)).is_err());
    assert_eq!(positive.display().to_string(), "<Check(positive)>");
}
