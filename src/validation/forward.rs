use std::cell::RefCell;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::macros::rail_event;
use crate::traits::{IntoValidator, SharedValidator, Validator};
use crate::types::{CheckResult, DataError, SchemaError};
use crate::Value;

thread_local! {
    // Targets currently being described on this thread.
    static DESCRIBING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Deferred reference used to build self-referential schemas.
///
/// Clones share the same target, so a schema can embed a clone of the
/// reference before the reference itself is bound to that schema. Binding
/// is single-assignment.
///
/// A bound recursive schema holds a reference cycle through `Arc` and is
/// never freed. Build such schemas once and reuse them.
///
/// # Examples
///
/// ```
/// use schema_rail::{extract_error, list, map, Dict, Forward, List, Str, Validator};
///
/// let node = Forward::new();
/// node.bind(Dict::new().field("name", Str::new()).field("children", List::new(node.clone())))
///     .unwrap();
///
/// let tree = map! { "name" => "a", "children" => list![map! { "name" => "b", "children" => list![] }] };
/// assert_eq!(node.check(&tree), Ok(tree.clone()));
///
/// let err = extract_error(&node, &map! { "name" => "a", "children" => list![1] }).unwrap_err();
/// assert!(err.at("children").and_then(|e| e.at(0usize)).is_some());
/// assert!(node.bind(Str::new()).is_err());
/// ```
#[derive(Clone, Default)]
pub struct Forward {
    target: Arc<OnceLock<SharedValidator>>,
}

impl Forward {
    /// Creates an unbound reference.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target validator.
    ///
    /// # Errors
    ///
    /// [`SchemaError::ForwardAlreadyBound`] if a target was already set.
    pub fn bind<V: IntoValidator>(&self, validator: V) -> Result<(), SchemaError> {
        self.target.set(validator.into_validator()).map_err(|_| SchemaError::ForwardAlreadyBound)
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.target.get().is_some()
    }

    #[inline]
    pub fn target(&self) -> Option<&SharedValidator> {
        self.target.get()
    }

    fn id(&self) -> usize {
        Arc::as_ptr(&self.target) as usize
    }
}

impl Validator for Forward {
    fn check(&self, value: &Value) -> CheckResult {
        match self.target.get() {
            Some(target) => target.check(value),
            None => {
                rail_event!(warn, "checked an unbound forward reference");
                Err(DataError::unconfigured_forward())
            }
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(target) = self.target.get() else {
            return f.write_str("<Forward(unbound)>");
        };
        let Some(_guard) = DescribeGuard::enter(self.id()) else {
            return f.write_str("<recur>");
        };
        f.write_str("<Forward(")?;
        target.describe(f)?;
        f.write_str(")>")
    }
}

// Marks a target as being described on this thread until dropped.
struct DescribeGuard {
    id: usize,
}

impl DescribeGuard {
    fn enter(id: usize) -> Option<Self> {
        DESCRIBING.with(|stack| {
            let mut stack = stack.borrow_mut();
            if stack.contains(&id) {
                None
            } else {
                stack.push(id);
                Some(Self { id })
            }
        })
    }
}

impl Drop for DescribeGuard {
    fn drop(&mut self) {
        DESCRIBING.with(|stack| stack.borrow_mut().retain(|entry| *entry != self.id));
    }
}
