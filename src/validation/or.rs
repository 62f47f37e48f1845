use std::fmt;

use smallvec::SmallVec;

use crate::macros::rail_event;
use crate::traits::{IntoValidator, SharedValidator, Validator};
use crate::types::{CheckResult, ErrorCollector};
use crate::Value;

/// Alternation: tries each branch in order and returns the first success.
///
/// The successful branch's value is returned unmodified and later branches
/// are never evaluated. When every branch fails, the error maps each branch
/// index to that branch's own error tree.
///
/// # Examples
///
/// ```
/// use schema_rail::{extract_error, Null, Or, Str, Validator, Value};
///
/// let null_string = Or::new().or_else(Str::new()).or_else(Null::new());
/// assert_eq!(null_string.check(&Value::from("test")), Ok(Value::from("test")));
///
/// let err = extract_error(&null_string, &Value::from(1)).unwrap_err();
/// assert_eq!(err.at(0usize).and_then(|e| e.as_message()), Some("value is not a string"));
/// assert_eq!(err.at(1usize).and_then(|e| e.as_message()), Some("value should be null"));
/// ```
#[derive(Clone, Default)]
pub struct Or {
    branches: SmallVec<[SharedValidator; 4]>,
}

impl Or {
    /// Creates an alternation without branches; it rejects every value.
    #[inline]
    pub fn new() -> Self {
        Self { branches: SmallVec::new() }
    }

    /// Appends a branch, tried after all existing ones.
    #[inline]
    pub fn or_else<V: IntoValidator>(mut self, branch: V) -> Self {
        self.branches.push(branch.into_validator());
        self
    }

    #[inline]
    pub fn branches(&self) -> &[SharedValidator] {
        &self.branches
    }
}

impl Validator for Or {
    fn check(&self, value: &Value) -> CheckResult {
        let mut errors = ErrorCollector::new();
        for (index, branch) in self.branches.iter().enumerate() {
            match branch.check(value) {
                Ok(converted) => return Ok(converted),
                Err(error) => errors.record(index, error)?,
            }
        }
        rail_event!(debug, branches = self.branches.len(), "no alternative matched");
        Err(errors.into_error())
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<Or(")?;
        for (i, branch) in self.branches.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            branch.describe(f)?;
        }
        f.write_str(")>")
    }
}

impl<V: IntoValidator> FromIterator<V> for Or {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self { branches: iter.into_iter().map(IntoValidator::into_validator).collect() }
    }
}
