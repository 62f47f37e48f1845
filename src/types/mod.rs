//! Error types and utilities.
//!
//! This module provides the error tree produced by every validator, the
//! collector composites use to aggregate child failures, and the formatter
//! that renders a tree for humans.
//!
//! # Examples
//!
//! ```
//! use schema_rail::{DataError, ErrorCollector, ErrorKind};
//!
//! let mut errors = ErrorCollector::new();
//! errors.record("age", DataError::new(ErrorKind::RangeViolation, "value 3 is less than 18")).unwrap();
//! errors.record("name", DataError::required()).unwrap();
//!
//! let err = errors.finish(()).unwrap_err();
//! assert_eq!(err.to_string(), "age: value 3 is less than 18; name: is required");
//! ```
pub mod accumulator;
pub mod data_error;
pub mod error_formatter;
pub mod error_node;
pub mod location;
pub mod projection;

pub use accumulator::ErrorCollector;
pub use data_error::{DataError, SchemaError};
pub use error_formatter::{ErrorFormatBuilder, ErrorFormatConfig, ErrorFormatter};
pub use error_node::{ErrorChildren, ErrorKind, ErrorNode, Leaf, Leaves};
pub use location::Location;
pub use projection::ErrorDict;

/// Result alias returned by every validator.
pub type CheckResult<T = crate::Value> = Result<T, DataError>;
