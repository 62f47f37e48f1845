//! Builder methods available on every concrete validator.
//!
//! These replace operator-style composition: alternation is spelled
//! [`or_else`](ValidatorExt::or_else) and conversion chains are spelled
//! [`append`](ValidatorExt::append) / [`then`](ValidatorExt::then) /
//! [`map`](ValidatorExt::map).
//!
//! # Examples
//!
//! ```
//! use schema_rail::{Int, Null, Str, Validator, ValidatorExt, Value};
//!
//! let nullable_name = Str::new().or_else(Null::new());
//! assert_eq!(nullable_name.check(&Value::Null), Ok(Value::Null));
//!
//! let doubled = Int::new().map(|v| Value::from(v.as_i64().unwrap_or(0) * 2));
//! assert_eq!(doubled.check(&Value::from(21)), Ok(Value::from(42)));
//! ```
use std::sync::Arc;

use crate::traits::{IntoValidator, SharedValidator, Validator};
use crate::types::CheckResult;
use crate::validation::{Or, Pipeline};
use crate::Value;

/// Extension trait for composing validators fluently.
pub trait ValidatorExt: Validator + Sized + 'static {
    /// Builds an alternation trying `self` first, then `other`.
    #[inline]
    fn or_else<V: IntoValidator>(self, other: V) -> Or {
        Or::new().or_else(self).or_else(other)
    }

    /// Attaches a fallible converter run after a successful check.
    #[inline]
    fn append<F>(self, converter: F) -> Pipeline<Self>
    where
        F: Fn(Value) -> CheckResult + Send + Sync + 'static,
    {
        Pipeline::new(self).append(converter)
    }

    /// Alias for `append`.
    #[inline]
    fn then<F>(self, converter: F) -> Pipeline<Self>
    where
        F: Fn(Value) -> CheckResult + Send + Sync + 'static,
    {
        self.append(converter)
    }

    /// Attaches an infallible converter run after a successful check.
    #[inline]
    fn map<F>(self, f: F) -> Pipeline<Self>
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Pipeline::new(self).map(f)
    }

    /// Moves the validator behind an `Arc` so it can be reused by several parents.
    #[inline]
    fn shared(self) -> SharedValidator {
        Arc::new(self)
    }
}

impl<V: Validator + 'static> ValidatorExt for V {}
