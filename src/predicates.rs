//! Leaf predicate library.
//!
//! Type tags live here; length/range/pattern factories and the two format
//! checks sit in per-kind submodules. Every predicate is type-guarded: a
//! value of the wrong kind is `false`, never an error. All of them are
//! plain data checks — pure, stateless, freely composable by wrapping.

pub mod arr;
pub mod net;
pub mod num;
pub mod str;

use crate::rule::Predicate;
use crate::value::Value;

pub use arr::{
    array_longer_than, array_max_length, array_min_length, array_of_length, array_shorter_than,
};
pub use net::{is_email, is_url};
pub use num::{number_equal, number_less_than, number_max, number_min, number_more_than};
pub use str::{
    matches, pattern, string_longer_than, string_max_length, string_min_length, string_of_length,
    string_shorter_than, PatternError,
};

// ------------------------------ Type tags --------------------------------- //

pub fn is_null() -> Predicate {
    Predicate::new(|v| matches!(v, Value::Null))
}

pub fn is_bool() -> Predicate {
    Predicate::new(|v| matches!(v, Value::Bool(_)))
}

/// Finite numbers only: NaN and the infinities are not "a number" here,
/// same as the `n - n == 0` trick this check descends from.
pub fn is_number() -> Predicate {
    Predicate::new(|v| matches!(v, Value::Number(n) if n.is_finite()))
}

pub fn is_integer() -> Predicate {
    Predicate::new(|v| matches!(v, Value::Number(n) if n.is_finite() && n.fract() == 0.0))
}

pub fn is_float() -> Predicate {
    Predicate::new(|v| matches!(v, Value::Number(n) if n.is_finite() && n.fract() != 0.0))
}

pub fn is_string() -> Predicate {
    Predicate::new(|v| matches!(v, Value::String(_)))
}

pub fn is_date() -> Predicate {
    Predicate::new(|v| matches!(v, Value::Date(_)))
}

pub fn is_array() -> Predicate {
    Predicate::new(|v| matches!(v, Value::Array(_)))
}

pub fn is_object() -> Predicate {
    Predicate::new(|v| matches!(v, Value::Object(_)))
}
