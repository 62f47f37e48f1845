use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize, Serializer};

/// Position of a failure inside its parent: a field name or a zero-based index.
///
/// Indices order before names, so sequence errors list in element order.
///
/// # Examples
///
/// ```
/// use schema_rail::Location;
///
/// assert_eq!(Location::from(2usize).to_string(), "2");
/// assert_eq!(Location::from("name").to_string(), "name");
/// assert!(Location::from(10usize) < Location::from("a"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(untagged))]
pub enum Location {
    Index(usize),
    Key(String),
}

impl Location {
    #[inline]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Key(_) => None,
        }
    }

    #[inline]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Key(k) => Some(k),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Key(k) => f.write_str(k),
        }
    }
}

// Serialized as a plain number or string so it can be used as a map key.
#[cfg(feature = "serde")]
impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Index(i) => serializer.serialize_u64(*i as u64),
            Self::Key(k) => serializer.serialize_str(k),
        }
    }
}

impl From<usize> for Location {
    #[inline]
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

impl From<&str> for Location {
    #[inline]
    fn from(k: &str) -> Self {
        Self::Key(k.to_owned())
    }
}

impl From<String> for Location {
    #[inline]
    fn from(k: String) -> Self {
        Self::Key(k)
    }
}

impl From<&String> for Location {
    #[inline]
    fn from(k: &String) -> Self {
        Self::Key(k.clone())
    }
}
