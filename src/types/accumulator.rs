use crate::types::{DataError, ErrorChildren, ErrorNode, Location};

/// Collects per-child failures of a composite validator into one flat level.
///
/// Composites record every failed child and keep going; once the pass is
/// over, [`finish`](ErrorCollector::finish) returns either the converted
/// value or a single nested [`DataError`]. Fatal child errors are not
/// collected: [`record`](ErrorCollector::record) hands them back, relocated
/// under the child's position, so callers propagate them with `?`.
///
/// # Examples
///
/// ```
/// use schema_rail::{DataError, ErrorCollector};
///
/// let mut errors = ErrorCollector::new();
/// errors.record(1usize, DataError::custom("bad")).unwrap();
/// assert_eq!(errors.len(), 1);
///
/// let err = errors.finish(()).unwrap_err();
/// assert_eq!(err.get(1usize).and_then(|n| n.text()), Some("bad"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorCollector {
    children: ErrorChildren,
}

impl ErrorCollector {
    /// Creates a new empty collector.
    #[inline]
    pub fn new() -> Self {
        Self { children: ErrorChildren::new() }
    }

    /// Records a child failure at `loc`.
    ///
    /// Returns `Err` with the relocated error when it is fatal.
    #[inline]
    pub fn record(&mut self, loc: impl Into<Location>, error: DataError) -> Result<(), DataError> {
        if error.is_fatal() {
            return Err(error.located(loc));
        }
        self.children.insert(loc.into(), error.into_node());
        Ok(())
    }

    /// Records a prebuilt node at `loc`.
    #[inline]
    pub fn push(&mut self, loc: impl Into<Location>, node: ErrorNode) {
        self.children.insert(loc.into(), node);
    }

    /// Records the error side of `result` and passes the success side through.
    ///
    /// The outer `Result` carries fatal errors only.
    #[inline]
    pub fn collect<T>(
        &mut self,
        loc: impl Into<Location>,
        result: Result<T, DataError>,
    ) -> Result<Option<T>, DataError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(error) => self.record(loc, error).map(|()| None),
        }
    }

    #[inline]
    pub fn contains(&self, loc: &Location) -> bool {
        self.children.contains_key(loc)
    }

    /// Returns true if no failure was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of failed children.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Consumes the collector, returning the recorded children.
    #[inline]
    pub fn into_inner(self) -> ErrorChildren {
        self.children
    }

    /// Converts the collector into a nested error regardless of its contents.
    #[inline]
    pub fn into_error(self) -> DataError {
        DataError::nested(self.children)
    }

    /// Returns `value` if nothing failed, otherwise the aggregated error.
    #[inline]
    pub fn finish<T>(self, value: T) -> Result<T, DataError> {
        if self.children.is_empty() {
            Ok(value)
        } else {
            Err(self.into_error())
        }
    }
}

impl<L: Into<Location>> FromIterator<(L, ErrorNode)> for ErrorCollector {
    fn from_iter<I: IntoIterator<Item = (L, ErrorNode)>>(iter: I) -> Self {
        Self { children: iter.into_iter().map(|(loc, node)| (loc.into(), node)).collect() }
    }
}

impl From<ErrorChildren> for ErrorCollector {
    fn from(children: ErrorChildren) -> Self {
        Self { children }
    }
}
