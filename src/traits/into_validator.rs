//! Trait for converting types into a shared schema node.
//!
//! Composite constructors accept `impl IntoValidator`, so a child can be given
//! as a concrete validator, an already shared one, or a plain function wrapped
//! in [`Call`](crate::Call) / [`Check`](crate::Check).
//!
//! # Examples
//!
//! ```
//! use schema_rail::{Call, Int, IntoValidator, List, Value};
//!
//! let int = Int::new().into_validator();
//! let doubled = Call::new(|v: &Value| Ok(Value::from(v.as_i64().unwrap_or(0) * 2)));
//!
//! let ints = List::new(int.clone());
//! let doubles = List::new(doubled);
//! # let _ = (ints, doubles);
//! ```
use std::sync::Arc;

use crate::traits::{SharedValidator, Validator};

/// Converts a type into a [`SharedValidator`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a schema node",
    label = "this type does not implement `Validator`",
    note = "implement `Validator`, or wrap a function with `Call::new` or `Check::new`"
)]
pub trait IntoValidator {
    /// Converts `self` into a [`SharedValidator`].
    fn into_validator(self) -> SharedValidator;
}

impl<V: Validator + 'static> IntoValidator for V {
    /// Moves a concrete validator behind an `Arc`.
    #[inline]
    fn into_validator(self) -> SharedValidator {
        Arc::new(self)
    }
}

impl IntoValidator for SharedValidator {
    /// Identity conversion for shared validators (no-op).
    #[inline]
    fn into_validator(self) -> SharedValidator {
        self
    }
}

impl IntoValidator for &SharedValidator {
    #[inline]
    fn into_validator(self) -> SharedValidator {
        Arc::clone(self)
    }
}
