use std::fmt;
use std::sync::Arc;

use crate::leaves::Any;
use crate::traits::{IntoValidator, SharedValidator};
use crate::types::{CheckResult, DataError};
use crate::{Map, Value};

/// Default for an absent [`Key`]: a literal or a generator called per check.
#[derive(Clone)]
pub enum KeyDefault {
    Value(Value),
    Generator(Arc<dyn Fn() -> Value + Send + Sync>),
}

impl KeyDefault {
    /// Produces the raw default, calling the generator if there is one.
    #[inline]
    pub fn produce(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Generator(generate) => generate(),
        }
    }
}

impl fmt::Debug for KeyDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

/// Per-field configuration of a [`Dict`](crate::Dict).
///
/// A key reads `name` from the input, validates it, and writes the converted
/// value under `to_name` (or `name`). A configured default makes the field
/// satisfiable even when it is not optional. Failures are always reported
/// under the source name.
///
/// # Examples
///
/// ```
/// use schema_rail::{map, Dict, Int, Key, Validator};
///
/// let schema = Dict::new().key(Key::new("a").to_name("b").default(1).validator(Int::new()));
///
/// assert_eq!(schema.check(&map! {}), Ok(map! { "b" => 1 }));
/// assert_eq!(schema.check(&map! { "a" => 5 }), Ok(map! { "b" => 5 }));
/// ```
#[derive(Clone)]
pub struct Key {
    name: String,
    to_name: Option<String>,
    default: Option<KeyDefault>,
    optional: bool,
    validator: SharedValidator,
}

impl Key {
    /// Creates a required key accepting any value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            to_name: None,
            default: None,
            optional: false,
            validator: Arc::new(Any),
        }
    }

    /// Renames the field in the output.
    #[inline]
    pub fn to_name(mut self, name: impl Into<String>) -> Self {
        self.to_name = Some(name.into());
        self
    }

    /// Uses `value` when the field is absent.
    #[inline]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(KeyDefault::Value(value.into()));
        self
    }

    /// Calls `generate` for a fresh default every time the field is absent.
    #[inline]
    pub fn default_with<F>(mut self, generate: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.default = Some(KeyDefault::Generator(Arc::new(generate)));
        self
    }

    /// Lets the field be absent without error.
    #[inline]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[inline]
    pub fn validator<V: IntoValidator>(mut self, validator: V) -> Self {
        self.validator = validator.into_validator();
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name used in the output: the rename if any, else the source name.
    #[inline]
    pub fn target_name(&self) -> &str {
        self.to_name.as_deref().unwrap_or(&self.name)
    }

    #[inline]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    #[inline]
    pub fn default_value(&self) -> Option<&KeyDefault> {
        self.default.as_ref()
    }

    #[inline]
    pub fn validator_ref(&self) -> &SharedValidator {
        &self.validator
    }

    pub(crate) fn set_optional(&mut self) {
        self.optional = true;
    }

    /// Consumes this key's field from `data` and validates it.
    ///
    /// The field is removed whenever it is present or defaulted. Returns
    /// `None` when an optional field is absent and has no default.
    pub(crate) fn extract(&self, data: &mut Map) -> Option<CheckResult> {
        let raw = match data.remove(&self.name) {
            Some(value) => value,
            None => match &self.default {
                Some(default) => default.produce(),
                None if self.optional => return None,
                None => return Some(Err(DataError::required())),
            },
        };
        Some(self.validator.check(&raw))
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Key {:?}", self.name)?;
        if let Some(to_name) = &self.to_name {
            write!(f, " to {to_name:?}")?;
        }
        f.write_str(">")
    }
}
