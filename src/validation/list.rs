use std::fmt;

use crate::macros::rail_event;
use crate::traits::{IntoValidator, SharedValidator, Validator};
use crate::types::{CheckResult, DataError, ErrorCollector, ErrorKind};
use crate::Value;

/// Homogeneous sequence with length bounds.
///
/// The type and length checks fail fast with a single message. Elements are
/// then all validated, failures are keyed by index, and the converted list is
/// returned only when every element passed.
///
/// # Examples
///
/// ```
/// use schema_rail::{extract_error, list, Int, List, Validator};
///
/// let ints = List::new(Int::new()).min_length(1);
/// assert_eq!(ints.check(&list![1, 2, 3]), Ok(list![1, 2, 3]));
///
/// let err = extract_error(&ints, &list![1, 2, "x"]).unwrap_err();
/// assert_eq!(err.keys().len(), 1);
/// assert_eq!(err.at(2usize).and_then(|e| e.as_message()), Some("value x can't be converted to int"));
/// ```
#[derive(Clone)]
pub struct List {
    item: SharedValidator,
    min_length: usize,
    max_length: Option<usize>,
}

impl List {
    /// Creates an unbounded list of `item`.
    #[inline]
    pub fn new<V: IntoValidator>(item: V) -> Self {
        Self { item: item.into_validator(), min_length: 0, max_length: None }
    }

    #[inline]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    #[inline]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    #[inline]
    pub fn item(&self) -> &SharedValidator {
        &self.item
    }
}

impl Validator for List {
    fn check(&self, value: &Value) -> CheckResult {
        let Value::List(items) = value else {
            return Err(DataError::type_mismatch("value is not a list"));
        };
        if items.len() < self.min_length {
            return Err(DataError::new(
                ErrorKind::LengthViolation,
                format!("list length is less than {}", self.min_length),
            ));
        }
        if let Some(max) = self.max_length.filter(|max| items.len() > *max) {
            return Err(DataError::new(
                ErrorKind::LengthViolation,
                format!("list length is greater than {max}"),
            ));
        }

        rail_event!(trace, len = items.len(), "checking list items");
        let mut errors = ErrorCollector::new();
        let mut converted = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if let Some(checked) = errors.collect(index, self.item.check(item))? {
                converted.push(checked);
            }
        }
        errors.finish(Value::List(converted))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<List(")?;
        let mut options = Vec::new();
        if self.min_length > 0 {
            options.push(format!("min_length={}", self.min_length));
        }
        if let Some(max) = self.max_length {
            options.push(format!("max_length={max}"));
        }
        if !options.is_empty() {
            write!(f, "{} | ", options.join(", "))?;
        }
        self.item.describe(f)?;
        f.write_str(")>")
    }
}
