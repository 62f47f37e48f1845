use std::fmt;
use std::ops::{Bound, RangeBounds};

use crate::traits::Validator;
use crate::types::{CheckResult, DataError, ErrorKind};
use crate::Value;

/// Inclusive and exclusive bounds shared by [`Int`] and [`Float`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Bounds<T> {
    gte: Option<T>,
    lte: Option<T>,
    gt: Option<T>,
    lt: Option<T>,
}

impl<T: Copy + PartialOrd + fmt::Display> Bounds<T> {
    fn with_range<R: RangeBounds<T>>(mut self, range: R) -> Self {
        match range.start_bound() {
            Bound::Included(start) => self.gte = Some(*start),
            Bound::Excluded(start) => self.gt = Some(*start),
            Bound::Unbounded => {}
        }
        match range.end_bound() {
            Bound::Included(end) => self.lte = Some(*end),
            Bound::Excluded(end) => self.lt = Some(*end),
            Bound::Unbounded => {}
        }
        self
    }

    fn check(&self, value: T, shown: &Value) -> Result<(), DataError> {
        let violation = |message: String| Err(DataError::new(ErrorKind::RangeViolation, message));
        if let Some(gte) = self.gte.filter(|gte| value < *gte) {
            return violation(format!("value {shown} is less than {gte}"));
        }
        if let Some(lte) = self.lte.filter(|lte| value > *lte) {
            return violation(format!("value {shown} is greater than {lte}"));
        }
        if let Some(lt) = self.lt.filter(|lt| value >= *lt) {
            return violation(format!("value {shown} should be less than {lt}"));
        }
        if let Some(gt) = self.gt.filter(|gt| value <= *gt) {
            return violation(format!("value {shown} should be greater than {gt}"));
        }
        Ok(())
    }

    fn describe(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options: Vec<String> = [("gte", self.gte), ("lte", self.lte), ("gt", self.gt), ("lt", self.lt)]
            .into_iter()
            .filter_map(|(param, bound)| bound.map(|bound| format!("{param}={bound}")))
            .collect();
        if options.is_empty() {
            write!(f, "<{name}>")
        } else {
            write!(f, "<{name}({})>", options.join(", "))
        }
    }
}

macro_rules! bound_setters {
    ($ty:ty) => {
        /// Requires `value >= bound`.
        #[inline]
        pub fn gte(mut self, bound: $ty) -> Self {
            self.bounds.gte = Some(bound);
            self
        }

        /// Requires `value <= bound`.
        #[inline]
        pub fn lte(mut self, bound: $ty) -> Self {
            self.bounds.lte = Some(bound);
            self
        }

        /// Requires `value > bound`.
        #[inline]
        pub fn gt(mut self, bound: $ty) -> Self {
            self.bounds.gt = Some(bound);
            self
        }

        /// Requires `value < bound`.
        #[inline]
        pub fn lt(mut self, bound: $ty) -> Self {
            self.bounds.lt = Some(bound);
            self
        }

        /// Sets bounds from a range expression; `1..=10` means `gte=1, lte=10`.
        #[inline]
        pub fn with_range<R: RangeBounds<$ty>>(mut self, range: R) -> Self {
            self.bounds = self.bounds.with_range(range);
            self
        }
    };
}

/// Integer leaf with optional bounds.
///
/// Accepts integers, integral floats and strings that parse as integers.
///
/// # Examples
///
/// ```
/// use schema_rail::{extract_error, ErrorDict, Int, Validator, Value};
///
/// let percent = Int::new().with_range(0..=100);
/// assert_eq!(percent.check(&Value::from("42")), Ok(Value::from(42)));
/// assert_eq!(percent.display().to_string(), "<Int(gte=0, lte=100)>");
/// assert_eq!(
///     extract_error(&percent, &Value::from(101)),
///     Err(ErrorDict::from("value 101 is greater than 100")),
/// );
/// assert_eq!(extract_error(&Int::new(), &Value::from(1.5)), Err(ErrorDict::from("value 1.5 is not int")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Int {
    bounds: Bounds<i64>,
}

impl Int {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    bound_setters!(i64);

    fn coerce(value: &Value) -> Result<i64, DataError> {
        let not_int = || DataError::type_mismatch(format!("value {value} is not int"));
        match value {
            Value::Int(i) => Ok(*i),
            Value::Float(x) if x.fract() == 0.0 && x.abs() < i64::MAX as f64 => Ok(*x as i64),
            Value::Float(_) => Err(not_int()),
            Value::Str(s) => s.trim().parse().map_err(|_| {
                DataError::new(ErrorKind::InvalidValue, format!("value {value} can't be converted to int"))
            }),
            _ => Err(not_int()),
        }
    }
}

impl Validator for Int {
    fn check(&self, value: &Value) -> CheckResult {
        let int = Self::coerce(value)?;
        let converted = Value::Int(int);
        self.bounds.check(int, &converted)?;
        Ok(converted)
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.bounds.describe("Int", f)
    }
}

/// Floating point leaf with optional bounds.
///
/// Accepts floats, integers and strings that parse as floats.
///
/// # Examples
///
/// ```
/// use schema_rail::{extract_error, ErrorDict, Float, Validator, Value};
///
/// assert_eq!(Float::new().check(&Value::from("5.0")), Ok(Value::from(5.0)));
/// assert_eq!(Float::new().check(&Value::from(1)), Ok(Value::from(1.0)));
/// assert_eq!(
///     extract_error(&Float::new().gte(2.0), &Value::from(1.0)),
///     Err(ErrorDict::from("value 1.0 is less than 2")),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Float {
    bounds: Bounds<f64>,
}

impl Float {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    bound_setters!(f64);

    fn coerce(value: &Value) -> Result<f64, DataError> {
        match value {
            Value::Float(x) => Ok(*x),
            Value::Int(i) => Ok(*i as f64),
            Value::Str(s) => s.trim().parse().map_err(|_| {
                DataError::new(ErrorKind::InvalidValue, format!("value {value} can't be converted to float"))
            }),
            _ => Err(DataError::type_mismatch(format!("value {value} is not float"))),
        }
    }
}

impl Validator for Float {
    fn check(&self, value: &Value) -> CheckResult {
        let float = Self::coerce(value)?;
        let converted = Value::Float(float);
        self.bounds.check(float, &converted)?;
        Ok(converted)
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.bounds.describe("Float", f)
    }
}
