use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::traits::Validator;
use crate::types::CheckResult;
use crate::Value;

/// A post-validation conversion step.
pub type Converter = Arc<dyn Fn(Value) -> CheckResult + Send + Sync>;

/// A validator followed by an ordered chain of converters.
///
/// `Pipeline` allows you to:
/// - Run converters only after the wrapped validator succeeded
/// - Feed each converter the previous stage's output
/// - Stop at the first converter returning `Err`, which becomes the result
///
/// Converters are append-only. A converter that panics is not caught.
///
/// # Examples
///
/// ```
/// use schema_rail::{Int, Validator, ValidatorExt, Value};
///
/// let stacked = Int::new()
///     .map(|v| Value::from(v.as_i64().unwrap_or(0) * 2))
///     .map(|v| Value::from(v.as_i64().unwrap_or(0) * 3));
///
/// assert_eq!(stacked.check(&Value::from(1)), Ok(Value::from(6)));
/// ```
#[must_use]
pub struct Pipeline<V> {
    inner: V,
    converters: SmallVec<[Converter; 2]>,
}

impl<V> Pipeline<V> {
    /// Wraps `inner` with an empty converter chain.
    #[inline]
    pub fn new(inner: V) -> Self {
        Self { inner, converters: SmallVec::new() }
    }

    /// Appends a fallible converter.
    #[inline]
    pub fn append<F>(mut self, converter: F) -> Self
    where
        F: Fn(Value) -> CheckResult + Send + Sync + 'static,
    {
        self.converters.push(Arc::new(converter));
        self
    }

    /// Alias for `append`.
    #[inline]
    pub fn then<F>(self, converter: F) -> Self
    where
        F: Fn(Value) -> CheckResult + Send + Sync + 'static,
    {
        self.append(converter)
    }

    /// Appends an infallible converter.
    #[inline]
    pub fn map<F>(self, f: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.append(move |value| Ok(f(value)))
    }

    /// Returns a reference to the wrapped validator.
    #[inline]
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Number of registered converters.
    #[inline]
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl<V: Validator> Validator for Pipeline<V> {
    fn check(&self, value: &Value) -> CheckResult {
        let checked = self.inner.check(value)?;
        self.converters.iter().try_fold(checked, |acc, converter| converter(acc))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.describe(f)
    }
}

impl<V: Clone> Clone for Pipeline<V> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone(), converters: self.converters.clone() }
    }
}

/// Converter discarding the checked value, replacing it with `Null`.
///
/// # Examples
///
/// ```
/// use schema_rail::{ignore, Int, Validator, ValidatorExt, Value};
///
/// assert_eq!(Int::new().then(ignore).check(&Value::from(7)), Ok(Value::Null));
/// ```
#[inline]
pub fn ignore(_: Value) -> CheckResult {
    Ok(Value::Null)
}
