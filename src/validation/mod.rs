//! Composite validators built from smaller validators.
//!
//! - [`Or`] - first successful branch wins; errors keyed by branch index
//! - [`List`] - homogeneous sequence with length bounds
//! - [`Tuple`] - fixed arity, one validator per position
//! - [`Dict`] / [`Key`] - named fields with defaults, renames and an extra-key policy
//! - [`Mapping`] - open-ended map validating every key and value
//! - [`Forward`] - deferred reference for recursive schemas
//! - [`Pipeline`] - validator followed by converters
//!
//! Every composite validates all of its children before failing, so one
//! call reports every problem at its level. Type, length and arity checks
//! are the exception and fail fast.
//!
//! # Examples
//!
//! ```
//! use schema_rail::{extract_error, list, map, Dict, List, Str};
//!
//! let schema = Dict::new().field("name", Str::new()).field("tags", List::new(Str::new()));
//!
//! let err = extract_error(&schema, &map! { "tags" => list!["a", 1] }).unwrap_err();
//! assert_eq!(err.at("name").and_then(|e| e.as_message()), Some("is required"));
//! assert_eq!(
//!     err.at("tags").and_then(|e| e.at(1usize)).and_then(|e| e.as_message()),
//!     Some("value is not a string"),
//! );
//! ```
mod dict;
mod forward;
mod key;
mod list;
mod mapping;
mod or;
mod pipeline;
mod tuple;

pub use self::dict::{Dict, ExtraKeyAction, ExtraKeys, ANY_KEY};
pub use self::forward::Forward;
pub use self::key::{Key, KeyDefault};
pub use self::list::List;
pub use self::mapping::Mapping;
pub use self::or::Or;
pub use self::pipeline::{ignore, Converter, Pipeline};
pub use self::tuple::Tuple;

use crate::traits::Validator;
use crate::types::ErrorDict;
use crate::Value;

/// Runs `validator` and projects a failure into an [`ErrorDict`].
///
/// # Examples
///
/// ```
/// use schema_rail::{extract_error, ErrorDict, Int, Value};
///
/// assert_eq!(extract_error(&Int::new(), &Value::from("5")), Ok(Value::from(5)));
/// assert_eq!(
///     extract_error(&Int::new(), &Value::from("five")),
///     Err(ErrorDict::from("value five can't be converted to int")),
/// );
/// ```
pub fn extract_error<V>(validator: &V, value: &Value) -> Result<Value, ErrorDict>
where
    V: Validator + ?Sized,
{
    validator.check(value).map_err(|error| error.as_dict())
}
