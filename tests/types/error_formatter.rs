use schema_rail::{DataError, ErrorFormatConfig, ErrorFormatter, ErrorKind, ErrorNode, Location};

fn sample() -> DataError {
    DataError::from(ErrorNode::nested([
        (
            Location::from("children"),
            ErrorNode::nested([(
                0usize,
                ErrorNode::message(ErrorKind::TypeMismatch, "value 1 is not a dict"),
            )]),
        ),
        (
            Location::from("name"),
            ErrorNode::message(ErrorKind::RequiredFieldMissing, "is required"),
        ),
    ]))
}

#[test]
fn default_display_is_flat_and_path_qualified() {
    assert_eq!(sample().to_string(), "children.0: value 1 is not a dict; name: is required");
}

#[test]
fn alternate_display_renders_an_indented_tree() {
    assert_eq!(
        format!("{:#}", sample()),
        "children:\n  0: value 1 is not a dict\nname: is required"
    );
}

#[test]
fn builder_overrides_separators() {
    let err = sample();
    let rendered = err.fmt().with_separator(" / ").with_path_separator("[]").to_string();
    assert_eq!(rendered, "children[]0: value 1 is not a dict / name: is required");
}

#[test]
fn compact_preset_uses_pipes() {
    assert_eq!(
        sample().fmt().compact().to_string(),
        "children.0: value 1 is not a dict | name: is required"
    );
}

#[test]
fn kinds_can_be_shown() {
    let rendered = sample().format_with(|b| b.with_config(ErrorFormatConfig::with_kinds()));
    assert_eq!(
        rendered,
        "children.0: value 1 is not a dict [type_mismatch]; name: is required [required_field_missing]"
    );
}

#[test]
fn terminal_error_renders_without_path() {
    let err = DataError::type_mismatch("value is not a list");
    assert_eq!(err.to_string(), "value is not a list");
    assert_eq!(format!("{err:#}"), "value is not a list");
}

#[test]
fn custom_formatter_uses_trait_defaults() {
    struct Arrow;

    impl ErrorFormatter for Arrow {
        fn path_separator(&self) -> &str {
            " -> "
        }

        fn separator(&self) -> &str {
            "\n"
        }
    }

    let err = sample();
    assert_eq!(
        Arrow.format_tree(err.node()),
        "children -> 0: value 1 is not a dict\nname: is required"
    );
}
