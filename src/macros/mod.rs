//! Ergonomic macros for building [`Value`](crate::Value) literals.
//!
//! - [`macro@crate::map`] - Builds a `Value::Map` from `key => value` pairs.
//! - [`macro@crate::list`] - Builds a `Value::List` from a comma separated list.
//!
//! # Examples
//!
//! ```
//! use schema_rail::{list, map, Value};
//!
//! let node = map! {
//!     "name" => "root",
//!     "children" => list![map! { "name" => "leaf", "children" => list![] }],
//! };
//!
//! assert_eq!(node.get("name"), Some(&Value::from("root")));
//! ```

/// Builds a [`Value::Map`](crate::Value::Map) from `key => value` pairs.
///
/// Keys are converted with `String::from`, values with `Value::from`.
///
/// # Examples
///
/// ```
/// use schema_rail::{map, Value};
///
/// let value = map! { "a" => 1, "b" => Value::Null };
/// assert_eq!(value.as_map().map(|m| m.len()), Some(2));
/// ```
#[macro_export]
macro_rules! map {
    () => {
        $crate::Value::Map($crate::Map::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Map::new();
        $(
            map.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        $crate::Value::Map(map)
    }};
}

/// Builds a [`Value::List`](crate::Value::List) from its elements.
///
/// # Examples
///
/// ```
/// use schema_rail::{list, Value};
///
/// let value = list![1, "two", Value::Null];
/// assert_eq!(value.as_list().map(|items| items.len()), Some(3));
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::Value::List(::std::vec::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Value::List(::std::vec![$($crate::Value::from($item)),+])
    };
}

// Structured events from composites. Compiles to nothing without `tracing`.
#[cfg(feature = "tracing")]
macro_rules! rail_event {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!(target: "schema_rail", $($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rail_event {
    ($level:ident, $($arg:tt)+) => {{}};
}

pub(crate) use rail_event;
