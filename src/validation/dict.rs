use std::collections::BTreeSet;
use std::fmt;

use crate::macros::rail_event;
use crate::traits::{IntoValidator, Validator};
use crate::types::{CheckResult, DataError, ErrorCollector};
use crate::validation::Key;
use crate::{Map, Value};

/// Wildcard accepted by [`Dict::allow_extra`], [`Dict::ignore_extra`] and
/// [`Dict::make_optional`].
pub const ANY_KEY: &str = "*";

/// What happens to an input key that no [`Key`] consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraKeyAction {
    /// Dropped silently.
    Ignore,
    /// Copied into the output unvalidated.
    Capture,
    /// Reported as a not-allowed key.
    Reject,
}

/// Policy for keys present in the input but not declared on the [`Dict`].
///
/// Ignoring is evaluated before capturing, so a name that is both ignored
/// and allowed is dropped.
///
/// # Examples
///
/// ```
/// use schema_rail::{ExtraKeyAction, ExtraKeys};
///
/// let extras = ExtraKeys::new().allow("eggs").ignore("fooz");
/// assert_eq!(extras.classify("eggs"), ExtraKeyAction::Capture);
/// assert_eq!(extras.classify("fooz"), ExtraKeyAction::Ignore);
/// assert_eq!(extras.classify("spam"), ExtraKeyAction::Reject);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraKeys {
    allowed: BTreeSet<String>,
    allow_any: bool,
    ignored: BTreeSet<String>,
    ignore_any: bool,
}

impl ExtraKeys {
    /// Policy rejecting every extra key.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures `name` unvalidated. `"*"` captures every extra key.
    pub fn allow(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if name == ANY_KEY {
            self.allow_any = true;
        } else {
            self.allowed.insert(name);
        }
        self
    }

    #[inline]
    pub fn allow_any(mut self) -> Self {
        self.allow_any = true;
        self
    }

    /// Drops `name` silently. `"*"` drops every extra key.
    pub fn ignore(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if name == ANY_KEY {
            self.ignore_any = true;
        } else {
            self.ignored.insert(name);
        }
        self
    }

    #[inline]
    pub fn ignore_any(mut self) -> Self {
        self.ignore_any = true;
        self
    }

    /// Decides the fate of the undeclared key `name`.
    pub fn classify(&self, name: &str) -> ExtraKeyAction {
        if self.ignore_any || self.ignored.contains(name) {
            ExtraKeyAction::Ignore
        } else if self.allow_any || self.allowed.contains(name) {
            ExtraKeyAction::Capture
        } else {
            ExtraKeyAction::Reject
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut options = Vec::new();
        if self.allow_any {
            options.push("any".to_owned());
        }
        if self.ignore_any {
            options.push("ignore_any".to_owned());
        }
        if !self.ignored.is_empty() {
            options.push(format!("ignore=({})", join(&self.ignored)));
        }
        if !self.allowed.is_empty() {
            options.push(format!("extras=({})", join(&self.allowed)));
        }
        if options.is_empty() {
            return Ok(());
        }
        write!(f, "{} | ", options.join(", "))
    }
}

fn join(names: &BTreeSet<String>) -> String {
    names.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Record schema: a set of named fields plus an extra-key policy.
///
/// Every declared key is processed, then every leftover input key. All
/// failures are aggregated under the source field name; the converted map
/// is returned only when nothing failed.
///
/// # Examples
///
/// ```
/// use schema_rail::{extract_error, map, Dict, Int, Str, Validator};
///
/// let user = Dict::new().field("name", Str::new()).field("age", Int::new());
/// assert_eq!(
///     user.check(&map! { "name" => "alice", "age" => "42" }),
///     Ok(map! { "name" => "alice", "age" => 42 }),
/// );
///
/// let err = extract_error(&user, &map! { "age" => "x", "admin" => true }).unwrap_err();
/// assert_eq!(err.at("name").and_then(|e| e.as_message()), Some("is required"));
/// assert_eq!(err.at("admin").and_then(|e| e.as_message()), Some("admin is not allowed key"));
/// assert!(err.at("age").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dict {
    keys: Vec<Key>,
    extras: ExtraKeys,
}

impl Dict {
    /// Creates a record with no fields that rejects every key.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record of required fields accepting any value.
    pub fn keys_only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(Self::new(), |dict, name| dict.key(Key::new(name)))
    }

    /// Declares a field described by `key`.
    #[inline]
    pub fn key(mut self, key: Key) -> Self {
        self.keys.push(key);
        self
    }

    /// Declares a required field checked by `validator`.
    #[inline]
    pub fn field<V: IntoValidator>(self, name: impl Into<String>, validator: V) -> Self {
        self.key(Key::new(name).validator(validator))
    }

    /// Replaces the extra-key policy.
    #[inline]
    pub fn with_extras(mut self, extras: ExtraKeys) -> Self {
        self.extras = extras;
        self
    }

    /// Returns a copy capturing the given extra keys; `"*"` captures all.
    pub fn allow_extra<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extras = names.into_iter().fold(self.extras, ExtraKeys::allow);
        self
    }

    /// Returns a copy dropping the given extra keys; `"*"` drops all.
    pub fn ignore_extra<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extras = names.into_iter().fold(self.extras, ExtraKeys::ignore);
        self
    }

    /// Returns a copy in which the named fields are optional; `"*"` marks all.
    ///
    /// Names that match no declared field are ignored.
    pub fn make_optional<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        let all = names.iter().any(|name| name.as_ref() == ANY_KEY);
        for key in &mut self.keys {
            if all || names.iter().any(|name| name.as_ref() == key.name()) {
                key.set_optional();
            }
        }
        self
    }

    /// Source names of the declared fields, in declaration order.
    pub fn keys_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys.iter().map(Key::name)
    }

    #[inline]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    #[inline]
    pub fn extras(&self) -> &ExtraKeys {
        &self.extras
    }
}

impl Validator for Dict {
    fn check(&self, value: &Value) -> CheckResult {
        let Value::Map(input) = value else {
            return Err(DataError::type_mismatch(format!("value {value} is not a dict")));
        };

        let mut data = input.clone();
        let mut output = Map::new();
        let mut errors = ErrorCollector::new();

        for key in &self.keys {
            match key.extract(&mut data) {
                Some(Ok(converted)) => {
                    output.insert(key.target_name().to_owned(), converted);
                }
                Some(Err(error)) => errors.record(key.name(), error)?,
                None => {}
            }
        }

        for (name, raw) in data {
            match self.extras.classify(&name) {
                ExtraKeyAction::Ignore => {}
                ExtraKeyAction::Capture => {
                    output.insert(name, raw);
                }
                ExtraKeyAction::Reject => {
                    let error = DataError::not_allowed(&name);
                    errors.record(name, error)?;
                }
            }
        }

        if !errors.is_empty() {
            rail_event!(debug, failed = errors.len(), "dict validation failed");
        }
        errors.finish(Value::Map(output))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<Dict(")?;
        self.extras.describe(f)?;
        let mut keys: Vec<&Key> = self.keys.iter().collect();
        keys.sort_by(|a, b| a.name().cmp(b.name()));
        for (i, key) in keys.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}=", key.name())?;
            key.validator_ref().describe(f)?;
        }
        f.write_str(")>")
    }
}
