use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use schema_rail::{
    CheckResult, DataError, Int, IntoValidator, List, Or, SharedValidator, Str, Validator,
    ValidatorExt, Value,
};

struct Even;

impl Validator for Even {
    fn check(&self, value: &Value) -> CheckResult {
        match value.as_i64() {
            Some(i) if i % 2 == 0 => Ok(value.clone()),
            _ => Err(DataError::custom("value is not even")),
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<Even>")
    }
}

#[test]
fn user_validators_compose_with_builtin_ones() {
    let evens = List::new(Even);
    assert_eq!(evens.check(&Value::from(vec![2, 4])), Ok(Value::from(vec![2, 4])));

    let err = evens.check(&Value::from(vec![2, 3])).unwrap_err();
    assert_eq!(err.to_string(), "1: value is not even");
}

#[test]
fn display_goes_through_describe() {
    assert_eq!(Even.display().to_string(), "<Even>");

    let shared: SharedValidator = Even.shared();
    assert_eq!(shared.to_string(), "<Even>");
    assert_eq!(format!("{shared:?}"), "<Even>");
}

#[test]
fn shared_validators_are_reused_not_copied() {
    let int = Int::new().into_validator();
    let ints = List::new(&int);
    let pair = Or::new().or_else(int.clone()).or_else(Str::new());

    assert_eq!(Arc::strong_count(&int), 3);
    assert!(ints.check(&Value::from(vec![1])).is_ok());
    assert!(pair.check(&Value::from("a")).is_ok());
}

#[test]
fn or_else_builds_alternation_in_order() {
    let either = Int::new().or_else(Str::new());

    assert_eq!(either.branches().len(), 2);
    assert_eq!(either.display().to_string(), "<Or(<Int>, <String>)>");
}

#[test]
fn converters_run_in_order_after_success() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let pipeline = Int::new()
        .map(move |v| {
            counter.fetch_add(1, Ordering::SeqCst);
            Value::from(v.as_i64().unwrap_or(0) + 1)
        })
        .then(|v| Ok(Value::from(v.as_i64().unwrap_or(0) * 10)));

    assert_eq!(pipeline.len(), 2);
    assert_eq!(pipeline.check(&Value::from(1)), Ok(Value::from(20)));
    assert!(pipeline.check(&Value::from("x")).is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn failing_converter_becomes_the_result() {
    let pipeline = Int::new()
        .append(|_| Err(DataError::custom("rejected by converter")))
        .map(|_| Value::from("unreachable"));

    let err = pipeline.check(&Value::from(1)).unwrap_err();
    assert_eq!(err.to_string(), "rejected by converter");
}

#[test]
fn pipeline_describes_as_its_inner_validator() {
    let pipeline = Int::new().gte(1).map(|v| v);
    assert_eq!(pipeline.display().to_string(), "<Int(gte=1)>");
}

#[test]
#[should_panic(expected = "converter blew up")]
fn panicking_converter_is_not_caught() {
    let pipeline = Int::new().map(|_| panic!("converter blew up"));
    let _ = pipeline.check(&Value::from(1));
}
