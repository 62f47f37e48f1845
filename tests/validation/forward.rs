use std::fmt::{self, Write};
use std::thread;

use schema_rail::{
    extract_error, list, map, Dict, ErrorDict, ErrorKind, Forward, List, SchemaError, Str,
    Validator, Value,
};

fn tree() -> Forward {
    let node = Forward::new();
    node.bind(Dict::new().field("name", Str::new()).field("children", List::new(node.clone())))
        .unwrap();
    node
}

#[test]
fn recursive_schema_validates_nested_trees() {
    let node = tree();
    let input = map! {
        "name" => "a",
        "children" => list![map! { "name" => "b", "children" => list![] }],
    };

    assert_eq!(node.check(&input), Ok(input.clone()));
}

#[test]
fn recursive_schema_reports_nested_locations() {
    let node = tree();
    let err = extract_error(&node, &map! { "name" => "a", "children" => list![1] }).unwrap_err();

    assert_eq!(
        err.at("children").and_then(|children| children.at(0usize)),
        Some(&ErrorDict::from("value 1 is not a dict"))
    );

    let deep = map! {
        "name" => "a",
        "children" => list![map! { "name" => "b", "children" => list![map! { "children" => list![] }] }],
    };
    let err = node.check(&deep).unwrap_err();
    assert_eq!(err.to_string(), "children.0.children.0.name: is required");
}

#[test]
fn binding_twice_is_a_schema_error() {
    let node = tree();
    assert!(node.is_bound());
    assert_eq!(node.bind(Str::new()), Err(SchemaError::ForwardAlreadyBound));
    assert_eq!(
        SchemaError::ForwardAlreadyBound.to_string(),
        "validator for Forward is already specified"
    );
}

#[test]
fn unbound_forward_fails_fatally() {
    let node = Forward::new();
    assert!(!node.is_bound());

    let err = node.check(&Value::from("something")).unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(err.kind(), Some(ErrorKind::UnconfiguredForward));
    assert_eq!(err.to_string(), "forward reference is not bound yet");
}

#[test]
fn clones_share_the_binding() {
    let node = Forward::new();
    let early = node.clone();
    node.bind(Str::new()).unwrap();

    assert!(early.is_bound());
    assert_eq!(early.check(&Value::from("x")), Ok(Value::from("x")));
}

#[test]
fn describe_guards_against_recursion() {
    assert_eq!(
        tree().display().to_string(),
        "<Forward(<Dict(children=<List(<recur>)>, name=<String>)>)>"
    );
    assert_eq!(Forward::new().display().to_string(), "<Forward(unbound)>");

    let plain = Forward::new();
    plain.bind(Str::new()).unwrap();
    let twice = List::new(plain.clone());
    assert_eq!(
        Dict::new().field("a", plain).field("b", twice).display().to_string(),
        "<Dict(a=<Forward(<String>)>, b=<List(<Forward(<String>)>)>)>"
    );
}

#[test]
fn bound_schema_validates_from_many_threads() {
    let node = tree();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let node = node.clone();
            thread::spawn(move || {
                let input = map! { "name" => format!("n{i}"), "children" => list![] };
                node.check(&input).is_ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

struct FailAfter(usize);

impl fmt::Write for FailAfter {
    fn write_str(&mut self, _: &str) -> fmt::Result {
        if self.0 == 0 {
            return Err(fmt::Error);
        }
        self.0 -= 1;
        Ok(())
    }
}

#[test]
fn failed_write_leaves_later_descriptions_intact() {
    let node = Forward::new();
    node.bind(Dict::new().field("name", Str::new())).unwrap();
    let expected = "<Forward(<Dict(name=<String>)>)>";

    for budget in 0..4 {
        assert!(write!(FailAfter(budget), "{}", node.display()).is_err());
        assert_eq!(node.display().to_string(), expected);
    }
}
