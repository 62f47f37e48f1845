//! Validation and schema-construction errors.
//!
//! [`DataError`] is what every `check` returns on failure: a whole
//! [`ErrorNode`] tree plus a fatal flag. [`SchemaError`] is raised while a
//! schema is being assembled and never from `check`.
use std::error::Error;
use std::fmt;

use crate::types::error_formatter::ErrorFormatBuilder;
use crate::types::{ErrorDict, ErrorKind, ErrorNode, Location};

/// Validation failure carrying a location-aware error tree.
///
/// # Examples
///
/// ```
/// use schema_rail::{DataError, ErrorKind};
///
/// let err = DataError::new(ErrorKind::TypeMismatch, "value is not a list");
/// assert_eq!(err.kind(), Some(ErrorKind::TypeMismatch));
/// assert_eq!(err.to_string(), "value is not a list");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataError {
    pub(crate) node: ErrorNode,
    pub(crate) fatal: bool,
}

impl DataError {
    /// Creates a terminal error. The fatal flag follows [`ErrorKind::is_fatal`].
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { node: ErrorNode::message(kind, message), fatal: kind.is_fatal() }
    }

    /// Shorthand for an [`ErrorKind::Custom`] error, for user leaves and converters.
    #[inline]
    pub fn custom(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Custom, message)
    }

    #[inline]
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeMismatch, message)
    }

    #[inline]
    pub fn required() -> Self {
        Self::new(ErrorKind::RequiredFieldMissing, "is required")
    }

    #[inline]
    pub fn not_allowed(name: &str) -> Self {
        Self::new(ErrorKind::NotAllowedKey, format!("{name} is not allowed key"))
    }

    #[inline]
    pub fn unconfigured_forward() -> Self {
        Self::new(ErrorKind::UnconfiguredForward, "forward reference is not bound yet")
    }

    /// Wraps an already aggregated child map.
    #[inline]
    pub fn nested(children: crate::types::ErrorChildren) -> Self {
        Self { node: ErrorNode::Nested(children), fatal: false }
    }

    #[inline]
    pub fn node(&self) -> &ErrorNode {
        &self.node
    }

    #[inline]
    pub fn into_node(self) -> ErrorNode {
        self.node
    }

    /// Kind of a terminal error; `None` when the error is nested.
    #[inline]
    pub fn kind(&self) -> Option<ErrorKind> {
        self.node.kind()
    }

    /// Fatal errors bypass aggregation and alternation fallback.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    /// Direct child at `loc`.
    #[inline]
    pub fn get(&self, loc: impl Into<Location>) -> Option<&ErrorNode> {
        self.node.get(&loc.into())
    }

    /// Re-roots this error one level deeper, under `loc`.
    pub fn located(self, loc: impl Into<Location>) -> Self {
        let mut children = crate::types::ErrorChildren::new();
        children.insert(loc.into(), self.node);
        Self { node: ErrorNode::Nested(children), fatal: self.fatal }
    }

    /// Projects the tree into a plain nested mapping of messages.
    #[must_use]
    pub fn as_dict(&self) -> ErrorDict {
        ErrorDict::from(&self.node)
    }

    /// Returns a builder for customizing how the tree is rendered.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> ErrorFormatBuilder<'_> {
        ErrorFormatBuilder::new(&self.node)
    }

    /// Renders the tree using a closure to configure the builder.
    #[must_use]
    pub fn format_with<F>(&self, f: F) -> String
    where
        F: FnOnce(ErrorFormatBuilder<'_>) -> ErrorFormatBuilder<'_>,
    {
        f(self.fmt()).to_string()
    }
}

impl From<ErrorNode> for DataError {
    fn from(node: ErrorNode) -> Self {
        let fatal = node.kind().is_some_and(ErrorKind::is_fatal);
        Self { node, fatal }
    }
}

/// Flat path-qualified form by default, indented tree with `{:#}`.
impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let builder = ErrorFormatBuilder::new(&self.node);
        if f.alternate() {
            write!(f, "{}", builder.pretty())
        } else {
            write!(f, "{builder}")
        }
    }
}

impl Error for DataError {}

/// Misconfiguration detected while assembling a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// [`Forward::bind`](crate::Forward::bind) was called on an already bound reference.
    ForwardAlreadyBound,
    /// A string pattern failed to compile.
    InvalidPattern { pattern: String, reason: String },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForwardAlreadyBound => f.write_str("validator for Forward is already specified"),
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "invalid pattern {pattern:?}: {reason}")
            }
        }
    }
}

impl Error for SchemaError {}
