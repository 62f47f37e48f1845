//! Recursive, location-keyed error tree.
//!
//! An [`ErrorNode`] is either a terminal message tagged with an [`ErrorKind`],
//! or a mapping from [`Location`] to child nodes. Composite validators build the
//! nested form; leaves produce messages.
use std::collections::BTreeMap;
use std::fmt;

use crate::types::Location;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Children of a nested [`ErrorNode`], ordered by location.
pub type ErrorChildren = BTreeMap<Location, ErrorNode>;

/// Classification of a terminal validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// The value has the wrong shape (not a list, not a dict, not a string ...).
    TypeMismatch,
    /// A required dict field is absent and has no default.
    RequiredFieldMissing,
    /// A dict received a field outside its key set and extra-key policy.
    NotAllowedKey,
    /// A number is outside its configured bounds.
    RangeViolation,
    /// A list or string is shorter or longer than allowed.
    LengthViolation,
    /// A tuple received the wrong number of items.
    ArityMismatch,
    /// A string does not match its pattern.
    PatternMismatch,
    /// The value is well-typed but not one of the accepted values.
    InvalidValue,
    /// Two mapping entries converted to the same key.
    AmbiguousKey,
    /// A forward reference was checked before being bound.
    UnconfiguredForward,
    /// Raised by user supplied leaves and converters.
    Custom,
}

impl ErrorKind {
    /// Fatal kinds are never aggregated with sibling failures.
    #[inline]
    pub fn is_fatal(self) -> bool {
        matches!(self, Self::UnconfiguredForward)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::RequiredFieldMissing => "required_field_missing",
            Self::NotAllowedKey => "not_allowed_key",
            Self::RangeViolation => "range_violation",
            Self::LengthViolation => "length_violation",
            Self::ArityMismatch => "arity_mismatch",
            Self::PatternMismatch => "pattern_mismatch",
            Self::InvalidValue => "invalid_value",
            Self::AmbiguousKey => "ambiguous_key",
            Self::UnconfiguredForward => "unconfigured_forward",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A terminal message or a location-keyed mapping of nested errors.
///
/// # Examples
///
/// ```
/// use schema_rail::{ErrorKind, ErrorNode, Location};
///
/// let node = ErrorNode::nested([
///     (Location::from("name"), ErrorNode::message(ErrorKind::RequiredFieldMissing, "is required")),
/// ]);
///
/// let leaf = node.get(&Location::from("name")).unwrap();
/// assert_eq!(leaf.text(), Some("is required"));
/// assert_eq!(node.leaf_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum ErrorNode {
    Message { kind: ErrorKind, message: String },
    Nested(ErrorChildren),
}

impl ErrorNode {
    #[inline]
    pub fn message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Message { kind, message: message.into() }
    }

    pub fn nested<I, L>(children: I) -> Self
    where
        I: IntoIterator<Item = (L, ErrorNode)>,
        L: Into<Location>,
    {
        Self::Nested(children.into_iter().map(|(loc, node)| (loc.into(), node)).collect())
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Message { .. })
    }

    /// Kind of a terminal node; `None` for nested nodes.
    #[inline]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Message { kind, .. } => Some(*kind),
            Self::Nested(_) => None,
        }
    }

    /// Message of a terminal node; `None` for nested nodes.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Message { message, .. } => Some(message),
            Self::Nested(_) => None,
        }
    }

    #[inline]
    pub fn children(&self) -> Option<&ErrorChildren> {
        match self {
            Self::Message { .. } => None,
            Self::Nested(children) => Some(children),
        }
    }

    /// Direct child at `loc`.
    pub fn get(&self, loc: &Location) -> Option<&ErrorNode> {
        self.children().and_then(|children| children.get(loc))
    }

    /// Follows `path` from this node.
    pub fn find<'a, I>(&self, path: I) -> Option<&ErrorNode>
    where
        I: IntoIterator<Item = &'a Location>,
    {
        path.into_iter().try_fold(self, |node, loc| node.get(loc))
    }

    /// Number of terminal messages in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Message { .. } => 1,
            Self::Nested(children) => children.values().map(ErrorNode::leaf_count).sum(),
        }
    }

    /// Returns `true` if any terminal message has the given kind.
    pub fn contains_kind(&self, kind: ErrorKind) -> bool {
        self.leaves().any(|leaf| leaf.kind == kind)
    }

    /// Depth-first iterator over terminal messages with their full paths.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![(Vec::new(), self)] }
    }
}

/// A terminal message yielded by [`ErrorNode::leaves`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<'a> {
    pub path: Vec<&'a Location>,
    pub kind: ErrorKind,
    pub message: &'a str,
}

/// Iterator over the terminal messages of an [`ErrorNode`], in location order.
pub struct Leaves<'a> {
    stack: Vec<(Vec<&'a Location>, &'a ErrorNode)>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = Leaf<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            match node {
                ErrorNode::Message { kind, message } => {
                    return Some(Leaf { path, kind: *kind, message });
                }
                ErrorNode::Nested(children) => {
                    // reversed so the smallest location is popped first
                    for (loc, child) in children.iter().rev() {
                        let mut child_path = path.clone();
                        child_path.push(loc);
                        self.stack.push((child_path, child));
                    }
                }
            }
        }
        None
    }
}
