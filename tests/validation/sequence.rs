use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use schema_rail::{
    extract_error, list, Check, ErrorDict, ErrorKind, Int, List, Str, Tuple, Validator, Value,
};

#[test]
fn list_converts_every_item() {
    let schema = List::new(Int::new());
    assert_eq!(schema.check(&list![1, "2", 3.0]), Ok(list![1, 2, 3]));
    assert_eq!(schema.check(&list![]), Ok(list![]));
}

#[test]
fn list_reports_failing_items_by_index() {
    let err = extract_error(&List::new(Int::new()), &list![1, 2, "x"]).unwrap_err();

    assert_eq!(err.keys().len(), 1);
    assert_eq!(
        err.at(2usize).and_then(ErrorDict::as_message),
        Some("value x can't be converted to int")
    );
}

#[test]
fn list_aggregates_all_failures() {
    let err = List::new(Int::new()).check(&list!["a", 1, "b", Value::Null]).unwrap_err();
    assert_eq!(err.node().leaf_count(), 3);
    assert_eq!(
        err.to_string(),
        "0: value a can't be converted to int; 2: value b can't be converted to int; 3: value null is not int"
    );
}

#[test]
fn length_bounds_fail_before_items_are_checked() {
    let checked = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&checked);
    let item = Check::new(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });
    let schema = List::new(item).min_length(1).max_length(2);

    let err = schema.check(&list![]).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::LengthViolation));
    assert_eq!(err.to_string(), "list length is less than 1");

    let err = schema.check(&list![1, 2, 3]).unwrap_err();
    assert_eq!(err.to_string(), "list length is greater than 2");
    assert_eq!(checked.load(Ordering::SeqCst), 0);

    assert!(schema.check(&list![1, 2]).is_ok());
    assert_eq!(checked.load(Ordering::SeqCst), 2);
}

#[test]
fn list_rejects_non_lists() {
    let err = List::new(Int::new()).check(&Value::from("1, 2")).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::TypeMismatch));
    assert_eq!(err.to_string(), "value is not a list");
}

#[test]
fn nested_lists_keep_full_paths() {
    let schema = List::new(List::new(Int::new()));
    let err = schema.check(&list![list![1], list![2, "x"]]).unwrap_err();
    assert_eq!(err.to_string(), "1.1: value x can't be converted to int");
}

#[test]
fn list_describe_shows_bounds() {
    assert_eq!(List::new(Int::new()).display().to_string(), "<List(<Int>)>");
    assert_eq!(
        List::new(Int::new()).min_length(1).max_length(10).display().to_string(),
        "<List(min_length=1, max_length=10 | <Int>)>"
    );
}

#[test]
fn tuple_checks_each_position() {
    let schema = Tuple::new().item(Int::new()).item(Int::new()).item(Str::new());
    assert_eq!(schema.arity(), 3);
    assert_eq!(schema.check(&list!["3", 4, "5"]), Ok(list![3, 4, "5"]));

    let err = extract_error(&schema, &list!["a", "b", 3]).unwrap_err();
    assert_eq!(err.keys().len(), 3);
    assert_eq!(err.at(2usize).and_then(ErrorDict::as_message), Some("value is not a string"));
}

#[test]
fn tuple_rejects_wrong_arity_with_one_message() {
    let schema = Tuple::new().item(Int::new()).item(Int::new()).item(Int::new());

    for input in [list![], list!["x", "y"], list![1, 2, 3, 4]] {
        let err = schema.check(&input).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::ArityMismatch));
        assert_eq!(err.to_string(), "value must contain exact 3 items");
    }
}

#[test]
fn tuple_rejects_non_lists() {
    let schema: Tuple = [Int::new(), Int::new()].into_iter().collect();
    let err = schema.check(&Value::from(1)).unwrap_err();
    assert_eq!(err.to_string(), "value must be convertable to tuple");
    assert_eq!(schema.display().to_string(), "<Tuple(<Int>, <Int>)>");
}
