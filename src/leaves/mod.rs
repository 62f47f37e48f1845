//! Leaf validators for scalar values.
//!
//! Leaves check a single value and contribute no aggregation logic. Each one
//! fails with a single message; composites decide where that message goes.
//!
//! | Leaf | Accepts | Converts to |
//! |------|---------|-------------|
//! | [`Any`] | everything | the input |
//! | [`Null`] | `null` | `null` |
//! | [`Bool`] | booleans | the input |
//! | [`StrBool`] | booleans, `0`/`1`, `null` and yes/no words | `Bool` |
//! | [`Int`] / [`Float`] | numbers and numeric strings | `Int` / `Float` |
//! | [`Str`] | strings | the input, or the pattern match |
//! | [`Atom`] / [`Enum`] | one or several exact values | the input |
//! | [`Call`] / [`Check`] | whatever the function decides | function output / the input |
use std::fmt;

use crate::traits::Validator;
use crate::types::{CheckResult, DataError, ErrorKind};
use crate::Value;

mod call;
mod number;
mod string;

pub use self::call::{Call, Check};
pub use self::number::{Float, Int};
pub use self::string::Str;

/// Accepts every value unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Any;

impl Any {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl Validator for Any {
    #[inline]
    fn check(&self, value: &Value) -> CheckResult {
        Ok(value.clone())
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<Any>")
    }
}

/// Accepts only `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Null;

impl Null {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl Validator for Null {
    fn check(&self, value: &Value) -> CheckResult {
        if value.is_null() {
            Ok(Value::Null)
        } else {
            Err(DataError::type_mismatch("value should be null"))
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<Null>")
    }
}

/// Accepts only `true` and `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bool;

impl Bool {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl Validator for Bool {
    fn check(&self, value: &Value) -> CheckResult {
        match value {
            Value::Bool(_) => Ok(value.clone()),
            _ => Err(DataError::type_mismatch(format!("value {value} should be true or false"))),
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<Bool>")
    }
}

/// Boolean coerced from common textual and numeric spellings.
///
/// `t`, `true`, `y`, `yes`, `on` and `1` mean true; `false`, `n`, `no`, `0`
/// and `none` mean false. Matching ignores case and surrounding whitespace.
/// `null` converts to false.
///
/// # Examples
///
/// ```
/// use schema_rail::{StrBool, Validator, Value};
///
/// assert_eq!(StrBool::new().check(&Value::from("YeS")), Ok(Value::from(true)));
/// assert_eq!(StrBool::new().check(&Value::from(0)), Ok(Value::from(false)));
/// assert_eq!(StrBool::new().check(&Value::Null), Ok(Value::from(false)));
/// assert!(StrBool::new().check(&Value::from("aloha")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrBool;

impl StrBool {
    const TRUTHY: [&'static str; 6] = ["t", "true", "y", "yes", "on", "1"];
    const FALSY: [&'static str; 5] = ["false", "n", "no", "0", "none"];

    #[inline]
    pub fn new() -> Self {
        Self
    }

    fn parse(text: &str) -> Option<bool> {
        let text = text.trim().to_lowercase();
        if Self::TRUTHY.contains(&text.as_str()) {
            Some(true)
        } else if Self::FALSY.contains(&text.as_str()) {
            Some(false)
        } else {
            None
        }
    }
}

impl Validator for StrBool {
    fn check(&self, value: &Value) -> CheckResult {
        let parsed = match value {
            Value::Null => Some(false),
            Value::Bool(b) => Some(*b),
            Value::Int(i) => Self::parse(&i.to_string()),
            Value::Str(s) => Self::parse(s),
            _ => None,
        };
        parsed.map(Value::Bool).ok_or_else(|| {
            DataError::new(ErrorKind::InvalidValue, format!("value {value} can't be converted to Bool"))
        })
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<StrBool>")
    }
}

/// Accepts exactly one value.
///
/// # Examples
///
/// ```
/// use schema_rail::{extract_error, Atom, ErrorDict, Validator, Value};
///
/// let atom = Atom::new("atom");
/// assert_eq!(atom.check(&Value::from("atom")), Ok(Value::from("atom")));
/// assert_eq!(
///     extract_error(&atom, &Value::from("molecule")),
///     Err(ErrorDict::from("value is not exactly 'atom'")),
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    value: Value,
}

impl Atom {
    #[inline]
    pub fn new(value: impl Into<Value>) -> Self {
        Self { value: value.into() }
    }
}

impl Validator for Atom {
    fn check(&self, value: &Value) -> CheckResult {
        if *value == self.value {
            Ok(value.clone())
        } else {
            Err(DataError::new(ErrorKind::InvalidValue, format!("value is not exactly '{}'", self.value)))
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<Atom(")?;
        self.value.fmt_nested(f)?;
        f.write_str(")>")
    }
}

/// Accepts any of a fixed set of values.
///
/// # Examples
///
/// ```
/// use schema_rail::{Enum, Validator, Value};
///
/// let variant = Enum::new(["foo", "bar"]).variant(1);
/// assert_eq!(variant.display().to_string(), r#"<Enum("foo", "bar", 1)>"#);
/// assert!(variant.check(&Value::from(1)).is_ok());
/// assert!(variant.check(&Value::from(2)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Enum {
    variants: Vec<Value>,
}

impl Enum {
    pub fn new<I, T>(variants: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self { variants: variants.into_iter().map(Into::into).collect() }
    }

    /// Adds one more accepted value.
    #[inline]
    pub fn variant(mut self, variant: impl Into<Value>) -> Self {
        self.variants.push(variant.into());
        self
    }

    #[inline]
    pub fn variants(&self) -> &[Value] {
        &self.variants
    }
}

impl Validator for Enum {
    fn check(&self, value: &Value) -> CheckResult {
        if self.variants.contains(value) {
            Ok(value.clone())
        } else {
            Err(DataError::new(ErrorKind::InvalidValue, "value doesn't match any variant"))
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<Enum(")?;
        for (i, variant) in self.variants.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            variant.fmt_nested(f)?;
        }
        f.write_str(")>")
    }
}
