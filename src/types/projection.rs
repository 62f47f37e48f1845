use std::collections::BTreeMap;

use crate::types::{ErrorNode, Location};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Plain projection of an [`ErrorNode`]: messages and nested maps only.
///
/// This is the shape handed to clients. With the `serde` feature it
/// serializes to `"message"` or `{"field": ..., "0": ...}`.
///
/// # Examples
///
/// ```
/// use schema_rail::{ErrorDict, ErrorKind, ErrorNode};
///
/// let node = ErrorNode::nested([(2usize, ErrorNode::message(ErrorKind::TypeMismatch, "value is not int"))]);
/// let dict = ErrorDict::from(&node);
///
/// assert_eq!(dict.at(2usize).and_then(ErrorDict::as_message), Some("value is not int"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
pub enum ErrorDict {
    Message(String),
    Map(BTreeMap<Location, ErrorDict>),
}

impl ErrorDict {
    #[inline]
    pub fn as_message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            Self::Map(_) => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&BTreeMap<Location, ErrorDict>> {
        match self {
            Self::Message(_) => None,
            Self::Map(map) => Some(map),
        }
    }

    /// Child at `loc` when this is a map.
    pub fn at(&self, loc: impl Into<Location>) -> Option<&ErrorDict> {
        self.as_map().and_then(|map| map.get(&loc.into()))
    }

    /// Locations present at this level, in order.
    pub fn keys(&self) -> Vec<&Location> {
        self.as_map().map(|map| map.keys().collect()).unwrap_or_default()
    }
}

impl From<&ErrorNode> for ErrorDict {
    fn from(node: &ErrorNode) -> Self {
        match node {
            ErrorNode::Message { message, .. } => Self::Message(message.clone()),
            ErrorNode::Nested(children) => Self::Map(
                children.iter().map(|(loc, child)| (loc.clone(), Self::from(child))).collect(),
            ),
        }
    }
}

impl From<ErrorNode> for ErrorDict {
    fn from(node: ErrorNode) -> Self {
        Self::from(&node)
    }
}

impl From<&str> for ErrorDict {
    #[inline]
    fn from(message: &str) -> Self {
        Self::Message(message.to_owned())
    }
}
