use std::fmt;

use crate::traits::{IntoValidator, SharedValidator, Validator};
use crate::types::{CheckResult, DataError, ErrorCollector, ErrorKind};
use crate::Value;

/// Fixed-arity sequence with one validator per position.
///
/// An input whose length differs from the number of positions is rejected
/// with a single arity message, independent of element validity.
///
/// # Examples
///
/// ```
/// use schema_rail::{extract_error, list, Int, Str, Tuple, Validator};
///
/// let point = Tuple::new().item(Int::new()).item(Int::new()).item(Str::new());
/// assert_eq!(point.check(&list![3, 4, "5"]), Ok(list![3, 4, "5"]));
///
/// let err = extract_error(&point, &list![3, 4, 5]).unwrap_err();
/// assert_eq!(err.at(2usize).and_then(|e| e.as_message()), Some("value is not a string"));
/// ```
#[derive(Clone, Default)]
pub struct Tuple {
    items: Vec<SharedValidator>,
}

impl Tuple {
    /// Creates an empty tuple; it accepts only the empty list.
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends the validator for the next position.
    #[inline]
    pub fn item<V: IntoValidator>(mut self, item: V) -> Self {
        self.items.push(item.into_validator());
        self
    }

    /// Number of positions.
    #[inline]
    pub fn arity(&self) -> usize {
        self.items.len()
    }
}

impl Validator for Tuple {
    fn check(&self, value: &Value) -> CheckResult {
        let Value::List(values) = value else {
            return Err(DataError::type_mismatch("value must be convertable to tuple"));
        };
        if values.len() != self.items.len() {
            return Err(DataError::new(
                ErrorKind::ArityMismatch,
                format!("value must contain exact {} items", self.items.len()),
            ));
        }

        let mut errors = ErrorCollector::new();
        let mut converted = Vec::with_capacity(values.len());
        for (index, (item, validator)) in values.iter().zip(&self.items).enumerate() {
            if let Some(checked) = errors.collect(index, validator.check(item))? {
                converted.push(checked);
            }
        }
        errors.finish(Value::List(converted))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<Tuple(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.describe(f)?;
        }
        f.write_str(")>")
    }
}

impl<V: IntoValidator> FromIterator<V> for Tuple {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self { items: iter.into_iter().map(IntoValidator::into_validator).collect() }
    }
}
