//! Core traits for schema composition.
//!
//! - [`Validator`]: the polymorphic contract every schema node implements
//! - [`IntoValidator`]: conversion trait used wherever a child node is accepted
//! - [`ValidatorExt`]: builder methods for alternation and conversion chains
//!
//! # Examples
//!
//! ```
//! use schema_rail::traits::{IntoValidator, Validator, ValidatorExt};
//! use schema_rail::{Int, Value};
//!
//! let shared = Int::new().then(|v| Ok(v)).into_validator();
//! assert!(shared.check(&Value::from(7)).is_ok());
//! ```

pub mod into_validator;
pub mod validator;
pub mod validator_ext;

pub use into_validator::IntoValidator;
pub use validator::{Described, SharedValidator, Validator};
pub use validator_ext::ValidatorExt;
