use std::fmt;

use regex::Regex;

use crate::traits::Validator;
use crate::types::{CheckResult, DataError, ErrorKind, SchemaError};
use crate::Value;

/// String leaf with blank policy, length bounds in characters and an
/// optional pattern.
///
/// The pattern is matched at the start of the string and the matched text
/// becomes the converted value. Anchor it with `$` to require a full match.
///
/// # Examples
///
/// ```
/// use schema_rail::{extract_error, ErrorDict, Str, Validator, Value};
///
/// let word = Str::new().pattern(r"\w+").unwrap();
/// assert_eq!(word.check(&Value::from("hello world")), Ok(Value::from("hello")));
///
/// assert_eq!(extract_error(&Str::new(), &Value::from("")), Err(ErrorDict::from("blank value is not allowed")));
/// assert_eq!(
///     extract_error(&Str::new().max_length(3), &Value::from("long")),
///     Err(ErrorDict::from("String is longer than 3 characters")),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Str {
    allow_blank: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
}

impl Str {
    /// Creates a leaf accepting any non-empty string.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts the empty string.
    #[inline]
    pub fn allow_blank(mut self) -> Self {
        self.allow_blank = true;
        self
    }

    #[inline]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    #[inline]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Compiles and attaches `pattern`.
    ///
    /// # Errors
    ///
    /// [`SchemaError::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn pattern(self, pattern: &str) -> Result<Self, SchemaError> {
        let regex = Regex::new(pattern).map_err(|err| SchemaError::InvalidPattern {
            pattern: pattern.to_owned(),
            reason: err.to_string(),
        })?;
        Ok(self.with_regex(regex))
    }

    /// Attaches an already compiled pattern.
    #[inline]
    pub fn with_regex(mut self, regex: Regex) -> Self {
        self.pattern = Some(regex);
        self
    }
}

impl Validator for Str {
    fn check(&self, value: &Value) -> CheckResult {
        let Value::Str(s) = value else {
            return Err(DataError::type_mismatch("value is not a string"));
        };
        if !self.allow_blank && s.is_empty() {
            return Err(DataError::new(ErrorKind::LengthViolation, "blank value is not allowed"));
        }

        let chars = s.chars().count();
        if let Some(min) = self.min_length.filter(|min| chars < *min) {
            return Err(DataError::new(
                ErrorKind::LengthViolation,
                format!("String is shorter than {min} characters"),
            ));
        }
        if let Some(max) = self.max_length.filter(|max| chars > *max) {
            return Err(DataError::new(
                ErrorKind::LengthViolation,
                format!("String is longer than {max} characters"),
            ));
        }

        let Some(regex) = &self.pattern else {
            return Ok(value.clone());
        };
        match regex.find(s) {
            Some(found) if found.start() == 0 => Ok(Value::from(found.as_str())),
            _ => Err(DataError::new(
                ErrorKind::PatternMismatch,
                format!("value '{s}' does not match pattern: {}", regex.as_str()),
            )),
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.allow_blank {
            f.write_str("<String(blank)>")
        } else {
            f.write_str("<String>")
        }
    }
}
