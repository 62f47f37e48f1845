//! Argument validation for plain functions.
//!
//! [`Guarded`] pairs a function taking its arguments as a [`Map`] with a
//! [`Dict`] describing those arguments. Calls go through
//! [`Guarded::call`], which maps positional arguments onto parameter names,
//! validates everything at once and only then invokes the function.
//!
//! # Example
//!
//! ```
//! use schema_rail::guard::Guarded;
//! use schema_rail::{Int, Map, Str, Value};
//!
//! let greet = Guarded::new(|args: Map| format!("{} x{}", args["name"], args["times"]))
//!     .param("name", Str::new())
//!     .param_with_default("times", Int::new(), 1);
//!
//! assert_eq!(greet.call([Value::from("hi")], Map::new()).unwrap(), "hi x1");
//! assert_eq!(greet.call([Value::from("hi"), Value::from("3")], Map::new()).unwrap(), "hi x3");
//!
//! let err = greet.call([], Map::new()).unwrap_err();
//! assert_eq!(err.failed_params().len(), 1);
//! ```
use std::error::Error;
use std::fmt;

use crate::macros::rail_event;
use crate::traits::{IntoValidator, SharedValidator, Validator};
use crate::types::{DataError, ErrorCollector, ErrorDict, ErrorKind, ErrorNode, Location};
use crate::validation::{Dict, Key};
use crate::{Map, Value};

/// A function whose arguments are validated by a [`Dict`] before each call.
///
/// Any other validator producing a map, such as a [`Forward`](crate::Forward)
/// bound to a `Dict`, can stand in via [`Guarded::with_validator`].
#[derive(Clone)]
pub struct Guarded<F> {
    params: Vec<String>,
    schema: ArgSchema,
    f: F,
}

#[derive(Clone)]
enum ArgSchema {
    Fields(Dict),
    Shared(SharedValidator),
}

impl<F> Guarded<F> {
    /// Wraps `f` with no declared parameters.
    #[inline]
    pub fn new(f: F) -> Self {
        Self { params: Vec::new(), schema: ArgSchema::Fields(Dict::new()), f }
    }

    /// Wraps `f` with an existing record schema; parameters follow its key order.
    pub fn with_schema(schema: Dict, f: F) -> Self {
        let params = schema.keys_names().map(str::to_owned).collect();
        Self { params, schema: ArgSchema::Fields(schema), f }
    }

    /// Wraps `f` with any validator whose output is a map.
    ///
    /// `params` gives the positional order. The validator sees the merged
    /// argument map and alone decides what is required or allowed.
    pub fn with_validator<I, S, V>(params: I, validator: V, f: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        V: IntoValidator,
    {
        let params = params.into_iter().map(Into::into).collect();
        Self { params, schema: ArgSchema::Shared(validator.into_validator()), f }
    }

    /// Declares the next parameter, described by `key`.
    ///
    /// On a guard built with [`with_validator`](Guarded::with_validator)
    /// only the positional name is recorded.
    pub fn key(mut self, key: Key) -> Self {
        self.params.push(key.name().to_owned());
        self.schema = match self.schema {
            ArgSchema::Fields(dict) => ArgSchema::Fields(dict.key(key)),
            shared => shared,
        };
        self
    }

    /// Declares a required parameter.
    #[inline]
    pub fn param<V: IntoValidator>(self, name: impl Into<String>, validator: V) -> Self {
        self.key(Key::new(name).validator(validator))
    }

    /// Declares a parameter filled with `default` when not passed.
    ///
    /// The default goes through `validator` like a passed argument.
    #[inline]
    pub fn param_with_default<V: IntoValidator>(
        self,
        name: impl Into<String>,
        validator: V,
        default: impl Into<Value>,
    ) -> Self {
        self.key(Key::new(name).default(default).validator(validator))
    }

    /// Parameter names in positional order.
    pub fn params(&self) -> impl Iterator<Item = &str> + '_ {
        self.params.iter().map(String::as_str)
    }

    /// The validator run over the argument map.
    #[inline]
    pub fn schema(&self) -> &dyn Validator {
        match &self.schema {
            ArgSchema::Fields(dict) => dict,
            ArgSchema::Shared(validator) => &**validator,
        }
    }

    /// Validates the arguments and invokes the function with the converted map.
    ///
    /// Positional arguments bind to parameters in declaration order; a
    /// keyword argument with the same name takes precedence.
    ///
    /// # Errors
    ///
    /// [`GuardError`] naming every failed parameter. Surplus positional
    /// arguments are reported under their index.
    pub fn call<R, I>(&self, positional: I, keyword: Map) -> Result<R, GuardError>
    where
        F: Fn(Map) -> R,
        I: IntoIterator<Item = Value>,
    {
        let mut args = Map::new();
        let mut surplus = ErrorCollector::new();
        for (index, value) in positional.into_iter().enumerate() {
            match self.params.get(index) {
                Some(name) => {
                    args.insert(name.clone(), value);
                }
                None => surplus.push(
                    index,
                    DataError::new(ErrorKind::ArityMismatch, "unexpected positional argument").into_node(),
                ),
            }
        }
        args.extend(keyword);

        match self.schema().check(&Value::Map(args)) {
            Ok(Value::Map(converted)) if surplus.is_empty() => Ok((self.f)(converted)),
            Ok(Value::Map(_)) => Err(GuardError::new(surplus.into_error())),
            Ok(other) => Err(GuardError::new(DataError::type_mismatch(format!(
                "arguments converted to {other}, which is not a dict"
            )))),
            Err(error) => Err(GuardError::new(merge(surplus, error))),
        }
    }
}

fn merge(surplus: ErrorCollector, error: DataError) -> DataError {
    if surplus.is_empty() || error.is_fatal() {
        return error;
    }
    match error.into_node() {
        ErrorNode::Nested(fields) => {
            let mut children = surplus.into_inner();
            children.extend(fields);
            DataError::nested(children)
        }
        node => DataError::from(node),
    }
}

impl<F> fmt::Debug for Guarded<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("guarded with ")?;
        self.schema().describe(f)
    }
}

/// Raised by [`Guarded::call`] when the arguments do not validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardError {
    error: DataError,
}

impl GuardError {
    fn new(error: DataError) -> Self {
        rail_event!(debug, error = %error, "guarded call rejected");
        Self { error }
    }

    /// Locations of the failed arguments: names, or indices for surplus positionals.
    pub fn failed_params(&self) -> Vec<&Location> {
        self.error.node().children().map(|children| children.keys().collect()).unwrap_or_default()
    }

    #[inline]
    pub fn error(&self) -> &DataError {
        &self.error
    }

    #[inline]
    pub fn into_inner(self) -> DataError {
        self.error
    }

    #[inline]
    pub fn as_dict(&self) -> ErrorDict {
        self.error.as_dict()
    }
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid arguments: {}", self.error)
    }
}

impl Error for GuardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
