//! The contract every schema node implements.
//!
//! A [`Validator`] takes a borrowed [`Value`] and either returns the converted
//! value or a [`DataError`](crate::DataError) carrying the full error tree.
//! Validators are immutable once built and are shared between composites as
//! [`SharedValidator`].
//!
//! # Examples
//!
//! ```
//! use schema_rail::{CheckResult, DataError, Validator, Value};
//! use std::fmt;
//!
//! struct Even;
//!
//! impl Validator for Even {
//!     fn check(&self, value: &Value) -> CheckResult {
//!         match value.as_i64() {
//!             Some(i) if i % 2 == 0 => Ok(value.clone()),
//!             _ => Err(DataError::custom("value is not even")),
//!         }
//!     }
//!
//!     fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("<Even>")
//!     }
//! }
//!
//! assert!(Even.check(&Value::from(4)).is_ok());
//! assert_eq!(Even.display().to_string(), "<Even>");
//! ```
use std::fmt;
use std::sync::Arc;

use crate::types::CheckResult;
use crate::Value;

/// Polymorphic schema node.
///
/// `Send + Sync` so that a finished schema can validate from many threads at
/// once without locking.
pub trait Validator: Send + Sync {
    /// Validates `value`, returning the converted value or the error tree.
    fn check(&self, value: &Value) -> CheckResult;

    /// Writes the textual representation of this node, e.g. `<List(<Int>)>`.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Adapter implementing `Display` through [`describe`](Validator::describe).
    #[inline]
    fn display(&self) -> Described<'_, Self>
    where
        Self: Sized,
    {
        Described(self)
    }
}

/// Type-erased validator shared between schema nodes.
pub type SharedValidator = Arc<dyn Validator>;

/// `Display` adapter returned by [`Validator::display`].
pub struct Described<'a, V: ?Sized>(pub &'a V);

impl<V: Validator + ?Sized> fmt::Display for Described<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.describe(f)
    }
}

impl fmt::Debug for dyn Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe(f)
    }
}

impl fmt::Display for dyn Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe(f)
    }
}
