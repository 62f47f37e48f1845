use std::collections::BTreeSet;
use std::fmt;

use crate::macros::rail_event;
use crate::traits::{IntoValidator, SharedValidator, Validator};
use crate::types::{CheckResult, DataError, ErrorCollector, ErrorKind};
use crate::{Map, Value};

/// Open-ended map with one validator for keys and one for values.
///
/// Both sides of every entry are checked, so an entry can report a `key`
/// error and a `value` error together. Entry failures are keyed by the
/// original input key. Two entries whose keys convert to the same output key
/// are reported as [`ErrorKind::AmbiguousKey`] on the later entry, even when
/// the earlier entry's value failed.
///
/// # Examples
///
/// ```
/// use schema_rail::{extract_error, map, Int, Mapping, Str, Validator};
///
/// let scores = Mapping::new(Str::new(), Int::new());
/// assert_eq!(scores.check(&map! { "foo" => 1 }), Ok(map! { "foo" => 1 }));
///
/// let err = extract_error(&scores, &map! { "foo" => 1, "bar" => "x" }).unwrap_err();
/// let entry = err.at("bar").unwrap();
/// assert!(entry.at("key").is_none());
/// assert_eq!(entry.at("value").and_then(|e| e.as_message()), Some("value x can't be converted to int"));
/// ```
#[derive(Clone)]
pub struct Mapping {
    key: SharedValidator,
    value: SharedValidator,
}

impl Mapping {
    pub fn new<K: IntoValidator, V: IntoValidator>(key: K, value: V) -> Self {
        Self { key: key.into_validator(), value: value.into_validator() }
    }

    #[inline]
    pub fn key_validator(&self) -> &SharedValidator {
        &self.key
    }

    #[inline]
    pub fn value_validator(&self) -> &SharedValidator {
        &self.value
    }

    fn check_key(&self, raw: &str) -> Result<String, DataError> {
        let converted = self.key.check(&Value::from(raw))?;
        converted.to_key().ok_or_else(|| {
            DataError::type_mismatch(format!("converted key {converted} can't be used as a key"))
        })
    }
}

impl Validator for Mapping {
    fn check(&self, value: &Value) -> CheckResult {
        let Value::Map(input) = value else {
            return Err(DataError::type_mismatch(format!("value {value} is not a dict")));
        };

        rail_event!(trace, len = input.len(), "checking mapping entries");
        let mut output = Map::new();
        let mut seen = BTreeSet::new();
        let mut errors = ErrorCollector::new();

        for (raw_key, raw_value) in input {
            let under_entry = |error: DataError| error.located(raw_key.as_str());
            let mut entry = ErrorCollector::new();
            let key = entry.collect("key", self.check_key(raw_key)).map_err(under_entry)?;
            let value = entry.collect("value", self.value.check(raw_value)).map_err(under_entry)?;

            // a converted key is claimed even when its value failed
            match key {
                Some(key) if seen.contains(&key) => {
                    rail_event!(debug, key = key.as_str(), "mapping key collision");
                    let collision = DataError::new(
                        ErrorKind::AmbiguousKey,
                        format!("key {key} collides with another entry"),
                    );
                    entry.push("key", collision.into_node());
                }
                Some(key) => {
                    seen.insert(key.clone());
                    if let Some(value) = value {
                        output.insert(key, value);
                    }
                }
                None => {}
            }

            if !entry.is_empty() {
                errors.push(raw_key, entry.into_error().into_node());
            }
        }

        errors.finish(Value::Map(output))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<Mapping(")?;
        self.key.describe(f)?;
        f.write_str(" => ")?;
        self.value.describe(f)?;
        f.write_str(")>")
    }
}
