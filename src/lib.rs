//! Structural validation over dynamic value trees.
//!
//! A [`Rule`] tree describes, per field and per element, how to validate a
//! [`Value`]; [`validate`] walks both and returns an [`Outcome`] tree whose
//! shape mirrors the rule tree, with every predicate leaf resolved to a
//! boolean. The whole outcome tree always comes back; nothing aggregates or
//! short-circuits on the way.
//!
//! ```
//! use treecheck::{predicates::*, rules, validate, Rule, Value};
//! use serde_json::json;
//!
//! let people = Value::from(json!([
//!     { "name": "Dusan", "age": 29 },
//!     { "name": "Peter", "age": 33 },
//! ]));
//!
//! let rule = Rule::array(
//!     is_array(),
//!     rules! {
//!         name: is_string(),
//!         age: is_integer(),
//!     },
//! );
//!
//! let outcome = validate(&people, &rule);
//! assert!(outcome.passed());
//! assert_eq!(
//!     outcome.to_json(),
//!     json!([true, [{"name": true, "age": true}, {"name": true, "age": true}]]),
//! );
//! ```

pub mod outcome;
pub mod predicates;
pub mod rule;
pub mod validate;
pub mod value;

pub use outcome::Outcome;
pub use rule::{Predicate, Rule};
pub use validate::validate;
pub use value::Value;
