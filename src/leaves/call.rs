use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::traits::Validator;
use crate::types::{CheckResult, DataError};
use crate::Value;

type CallFn = Arc<dyn Fn(&Value) -> CheckResult + Send + Sync>;
type CheckFn = Arc<dyn Fn(&Value) -> Result<(), DataError> + Send + Sync>;

/// Transforming leaf built from a function.
///
/// The function's `Ok` value becomes the converted value.
///
/// # Examples
///
/// ```
/// use schema_rail::{extract_error, Call, DataError, ErrorDict, Validator, Value};
///
/// let only_foo = Call::new(|v: &Value| match v.as_str() {
///     Some("foo") => Ok(Value::from("foo")),
///     _ => Err(DataError::custom("I want only foo!")),
/// })
/// .named("only_foo");
///
/// assert_eq!(only_foo.check(&Value::from("foo")), Ok(Value::from("foo")));
/// assert_eq!(extract_error(&only_foo, &Value::from("bar")), Err(ErrorDict::from("I want only foo!")));
/// assert_eq!(only_foo.display().to_string(), "<Call(only_foo)>");
/// ```
#[derive(Clone)]
pub struct Call {
    f: CallFn,
    name: Cow<'static, str>,
}

impl Call {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> CheckResult + Send + Sync + 'static,
    {
        Self { f: Arc::new(f), name: Cow::Borrowed("") }
    }

    /// Sets the name shown by `describe`.
    #[inline]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }
}

impl Validator for Call {
    #[inline]
    fn check(&self, value: &Value) -> CheckResult {
        (self.f)(value)
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        describe_fn("Call", &self.name, f)
    }
}

/// Predicate leaf built from a function; returns the input unchanged.
///
/// # Examples
///
/// ```
/// use schema_rail::{Check, DataError, Validator, Value};
///
/// let even = Check::new(|v: &Value| match v.as_i64() {
///     Some(i) if i % 2 == 0 => Ok(()),
///     _ => Err(DataError::custom("value is not even")),
/// });
///
/// assert_eq!(even.check(&Value::from(4)), Ok(Value::from(4)));
/// assert!(even.check(&Value::from(3)).is_err());
/// ```
#[derive(Clone)]
pub struct Check {
    f: CheckFn,
    name: Cow<'static, str>,
}

impl Check {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<(), DataError> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f), name: Cow::Borrowed("") }
    }

    #[inline]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }
}

impl Validator for Check {
    fn check(&self, value: &Value) -> CheckResult {
        (self.f)(value)?;
        Ok(value.clone())
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        describe_fn("Check", &self.name, f)
    }
}

fn describe_fn(kind: &str, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if name.is_empty() {
        write!(f, "<{kind}>")
    } else {
        write!(f, "<{kind}({name})>")
    }
}
