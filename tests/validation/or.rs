use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use schema_rail::{
    extract_error, Check, ErrorKind, Forward, Int, Null, Or, Str, Validator, Value,
};

#[test]
fn first_success_is_returned_unmodified() {
    let schema = Or::new().or_else(Int::new()).or_else(Str::new());

    assert_eq!(schema.check(&Value::from("5")), Ok(Value::from(5)));
    assert_eq!(schema.check(&Value::from("five")), Ok(Value::from("five")));
}

#[test]
fn later_branches_are_not_evaluated_after_success() {
    let evaluated = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&evaluated);
    let probe = Check::new(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    let schema = Or::new().or_else(Null::new()).or_else(probe);
    assert_eq!(schema.check(&Value::Null), Ok(Value::Null));
    assert_eq!(evaluated.load(Ordering::SeqCst), 0);

    assert_eq!(schema.check(&Value::from(1)), Ok(Value::from(1)));
    assert_eq!(evaluated.load(Ordering::SeqCst), 1);
}

#[test]
fn all_failures_are_keyed_by_branch_index() {
    let schema = Or::new().or_else(Str::new()).or_else(Null::new());
    let err = extract_error(&schema, &Value::from(1)).unwrap_err();

    assert_eq!(err.keys().len(), 2);
    assert_eq!(err.at(0usize).and_then(|e| e.as_message()), Some("value is not a string"));
    assert_eq!(err.at(1usize).and_then(|e| e.as_message()), Some("value should be null"));
}

#[test]
fn empty_alternation_rejects_with_empty_error() {
    let err = Or::new().check(&Value::Null).unwrap_err();
    assert_eq!(err.node().leaf_count(), 0);
}

#[test]
fn fatal_branch_error_stops_alternation() {
    let unbound = Forward::new();
    let schema = Or::new().or_else(unbound).or_else(Null::new());

    let err = schema.check(&Value::Null).unwrap_err();
    assert!(err.is_fatal());
    assert!(err.node().contains_kind(ErrorKind::UnconfiguredForward));
    assert!(err.get(0usize).is_some());
}

#[test]
fn or_collects_from_iterator() {
    let schema: Or = vec![Int::new(), Int::new().gte(10)].into_iter().collect();
    assert_eq!(schema.display().to_string(), "<Or(<Int>, <Int(gte=10)>)>");
}
