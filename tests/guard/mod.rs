use std::error::Error;

use schema_rail::{
    map, Call, Dict, ErrorDict, ErrorKind, Forward, GuardError, Guarded, Int, Location, Map, Str,
    Value,
};

fn describe(args: Map) -> (String, i64, String) {
    let text = |name: &str| args.get(name).and_then(Value::as_str).unwrap_or_default().to_owned();
    let b = args.get("b").and_then(Value::as_i64).unwrap_or_default();
    (text("a"), b, text("c"))
}

fn guarded() -> Guarded<fn(Map) -> (String, i64, String)> {
    Guarded::new(describe as fn(Map) -> (String, i64, String))
        .param("a", Str::new())
        .param("b", Int::new())
        .param_with_default("c", Str::new(), "default")
}

fn as_map(value: Value) -> Map {
    match value {
        Value::Map(map) => map,
        _ => Map::new(),
    }
}

#[test]
fn positional_arguments_bind_in_order_and_defaults_fill_in() {
    let result = guarded().call([Value::from("foo"), Value::from(1)], Map::new());
    assert_eq!(result, Ok(("foo".to_owned(), 1, "default".to_owned())));
}

#[test]
fn arguments_are_converted_before_the_call() {
    let result = guarded().call([Value::from("foo"), Value::from("7")], as_map(map! { "c" => "given" }));
    assert_eq!(result, Ok(("foo".to_owned(), 7, "given".to_owned())));
}

#[test]
fn keyword_arguments_take_precedence() {
    let result = guarded().call([Value::from("foo"), Value::from(1)], as_map(map! { "a" => "bar" }));
    assert_eq!(result, Ok(("bar".to_owned(), 1, "default".to_owned())));
}

#[test]
fn failed_parameters_are_identified() {
    let err = guarded().call([Value::from("foo"), Value::from(1), Value::from(2)], Map::new()).unwrap_err();
    assert_eq!(err.failed_params(), vec![&Location::from("c")]);
    assert_eq!(err.as_dict().at("c"), Some(&ErrorDict::from("value is not a string")));

    let err = guarded().call([Value::from("foo")], Map::new()).unwrap_err();
    assert_eq!(err.as_dict().at("b"), Some(&ErrorDict::from("is required")));
}

#[test]
fn unknown_and_surplus_arguments_are_rejected() {
    let err = guarded()
        .call(
            [Value::from("foo"), Value::from(1), Value::from("c"), Value::from("extra")],
            as_map(map! { "d" => 1 }),
        )
        .unwrap_err();

    assert_eq!(err.failed_params(), vec![&Location::from(3usize), &Location::from("d")]);
    assert_eq!(err.as_dict().at("d"), Some(&ErrorDict::from("d is not allowed key")));
}

#[test]
fn function_is_not_called_on_failure() {
    let calls = std::cell::Cell::new(0);
    let counted = Guarded::new(|_: Map| calls.set(calls.get() + 1)).param("x", Int::new());

    assert!(counted.call([Value::from("x")], Map::new()).is_err());
    assert_eq!(calls.get(), 0);
    assert!(counted.call([Value::from(1)], Map::new()).is_ok());
    assert_eq!(calls.get(), 1);
}

#[test]
fn guard_error_displays_and_exposes_source() {
    let err: GuardError = guarded().call([], Map::new()).unwrap_err();

    assert_eq!(err.to_string(), "invalid arguments: a: is required; b: is required");
    assert!(err.source().is_some());
    assert_eq!(err.error().node().leaf_count(), 2);
}

#[test]
fn existing_schema_defines_parameter_order() {
    let schema = Dict::new().field("x", Int::new()).field("y", Int::new());
    let sum = Guarded::with_schema(schema, |args: Map| {
        args.values().filter_map(Value::as_i64).sum::<i64>()
    });

    assert_eq!(sum.params().collect::<Vec<_>>(), vec!["x", "y"]);
    assert_eq!(sum.call([Value::from(1), Value::from("2")], Map::new()), Ok(3));
    assert_eq!(format!("{sum:?}"), "guarded with <Dict(x=<Int>, y=<Int>)>");
}

#[test]
fn forward_bound_to_a_dict_guards_arguments() {
    let args = Forward::new();
    let guarded = Guarded::with_validator(["x", "y"], args.clone(), |args: Map| {
        args.values().filter_map(Value::as_i64).product::<i64>()
    });
    args.bind(Dict::new().field("x", Int::new()).field("y", Int::new())).unwrap();

    assert_eq!(guarded.params().collect::<Vec<_>>(), vec!["x", "y"]);
    assert_eq!(guarded.call([Value::from("3"), Value::from(4)], Map::new()), Ok(12));

    let err = guarded.call([Value::from(3)], Map::new()).unwrap_err();
    assert_eq!(err.failed_params(), vec![&Location::from("y")]);
    assert_eq!(format!("{guarded:?}"), "guarded with <Forward(<Dict(x=<Int>, y=<Int>)>)>");
}

#[test]
fn validator_not_producing_a_map_is_rejected() {
    let guarded = Guarded::with_validator(["x"], Call::new(|_| Ok(Value::Null)), |_: Map| ());

    let err = guarded.call([Value::from(1)], Map::new()).unwrap_err();
    assert_eq!(err.error().kind(), Some(ErrorKind::TypeMismatch));
    assert_eq!(err.error().to_string(), "arguments converted to null, which is not a dict");
}
