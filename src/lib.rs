//! Composable schemas for dynamically shaped data.
//!
//! A schema is a tree of [`Validator`]s. Leaves check scalars, composites
//! ([`Or`], [`List`], [`Tuple`], [`Dict`], [`Mapping`], [`Forward`]) combine
//! them. Checking a [`Value`] either returns the converted value or a
//! [`DataError`] whose [`ErrorNode`] tree holds every failure under its exact
//! location, so one call reports everything that is wrong.
//!
//! # Examples
//!
//! ## Validating a record
//!
//! ```
//! use schema_rail::{extract_error, list, map, Dict, Int, Key, List, Str, Validator};
//!
//! let user = Dict::new()
//!     .field("name", Str::new())
//!     .key(Key::new("age").default(18).validator(Int::new().gte(0)))
//!     .field("tags", List::new(Str::new()));
//!
//! let ok = user.check(&map! { "name" => "ann", "tags" => list!["admin"] });
//! assert_eq!(ok, Ok(map! { "name" => "ann", "age" => 18, "tags" => list!["admin"] }));
//!
//! let err = extract_error(&user, &map! { "age" => -1, "tags" => list![1] }).unwrap_err();
//! assert_eq!(err.at("name").and_then(|e| e.as_message()), Some("is required"));
//! assert_eq!(err.at("age").and_then(|e| e.as_message()), Some("value -1 is less than 0"));
//! assert!(err.at("tags").and_then(|e| e.at(0usize)).is_some());
//! ```
//!
//! ## Recursive schemas
//!
//! ```
//! use schema_rail::{list, map, Dict, Forward, List, Str, Validator};
//!
//! let node = Forward::new();
//! node.bind(Dict::new().field("name", Str::new()).field("children", List::new(node.clone())))
//!     .unwrap();
//!
//! assert_eq!(
//!     node.display().to_string(),
//!     "<Forward(<Dict(children=<List(<recur>)>, name=<String>)>)>",
//! );
//! assert!(node.check(&map! { "name" => "root", "children" => list![] }).is_ok());
//! ```
//!
//! ## Rendering errors
//!
//! ```
//! use schema_rail::{map, Dict, Int, Validator};
//!
//! let err = Dict::new().field("port", Int::new()).check(&map! { "port" => "http" }).unwrap_err();
//! assert_eq!(err.to_string(), "port: value http can't be converted to int");
//! ```

/// `map!`, `list!` and internal event macros
pub mod macros;
/// Argument validation for plain functions
pub mod guard;
/// Scalar leaf validators
pub mod leaves;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The validator contract and composition traits
pub mod traits;
/// Error tree, error kinds, collector and formatting
pub mod types;
/// Composite validators
pub mod validation;
/// The dynamic data model
pub mod value;

pub use guard::{GuardError, Guarded};
pub use leaves::*;
pub use traits::*;
pub use types::{
    CheckResult, DataError, ErrorChildren, ErrorCollector, ErrorDict, ErrorFormatBuilder,
    ErrorFormatConfig, ErrorFormatter, ErrorKind, ErrorNode, Leaf, Leaves, Location, SchemaError,
};
pub use validation::*;
pub use value::{Map, Value};
