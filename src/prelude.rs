//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use schema_rail::prelude::*;
//!
//! let point = Dict::new().field("x", Int::new()).field("y", Int::new());
//! assert!(point.check(&map! { "x" => 1, "y" => "2" }).is_ok());
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`map!`], [`list!`]
//! - **Data**: [`Value`], [`Map`]
//! - **Schemas**: every leaf and composite, plus [`Key`]
//! - **Errors**: [`DataError`], [`ErrorDict`], [`CheckResult`]
//! - **Traits**: [`Validator`], [`ValidatorExt`], [`IntoValidator`]

// Macros
pub use crate::{list, map};

// Data model
pub use crate::value::{Map, Value};

// Schemas
pub use crate::leaves::{Any, Atom, Bool, Call, Check, Enum, Float, Int, Null, Str, StrBool};
pub use crate::validation::{extract_error, ignore, Dict, Forward, Key, List, Mapping, Or, Tuple};

// Errors
pub use crate::types::{CheckResult, DataError, ErrorDict};

// Traits
pub use crate::traits::{IntoValidator, Validator, ValidatorExt};
