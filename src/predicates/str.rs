//! String predicates: length comparators and pattern matching.
//!
//! Length bounds count Unicode scalar values, not bytes.

use regex::Regex;

use crate::rule::Predicate;
use crate::value::Value;

fn chars_of(value: &Value) -> Option<usize> {
    value.as_str().map(|s| s.chars().count())
}

pub fn string_longer_than(bound: usize) -> Predicate {
    Predicate::new(move |v| chars_of(v).is_some_and(|len| len > bound))
}

pub fn string_shorter_than(bound: usize) -> Predicate {
    Predicate::new(move |v| chars_of(v).is_some_and(|len| len < bound))
}

pub fn string_of_length(bound: usize) -> Predicate {
    Predicate::new(move |v| chars_of(v).is_some_and(|len| len == bound))
}

pub fn string_min_length(bound: usize) -> Predicate {
    Predicate::new(move |v| chars_of(v).is_some_and(|len| len >= bound))
}

pub fn string_max_length(bound: usize) -> Predicate {
    Predicate::new(move |v| chars_of(v).is_some_and(|len| len <= bound))
}

/// Match string values against an already-compiled expression.
pub fn matches(regex: Regex) -> Predicate {
    Predicate::new(move |v| v.as_str().is_some_and(|s| regex.is_match(s)))
}

#[derive(Debug, thiserror::Error)]
#[error("invalid pattern: {0}")]
pub struct PatternError(#[from] regex::Error);

/// Compile-and-wrap convenience over [`matches`]. The one fallible
/// constructor in the crate; everything downstream of it is total.
pub fn pattern(source: &str) -> Result<Predicate, PatternError> {
    Ok(matches(Regex::new(source)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_factories_close_over_their_bound() {
        let v = Value::from("hello");
        assert!(string_longer_than(4).check(&v));
        assert!(!string_longer_than(5).check(&v));
        assert!(string_shorter_than(6).check(&v));
        assert!(string_of_length(5).check(&v));
        assert!(string_min_length(5).check(&v));
        assert!(string_max_length(5).check(&v));
        assert!(!string_max_length(4).check(&v));
    }

    #[test]
    fn lengths_count_scalars_not_bytes() {
        assert!(string_of_length(3).check(&Value::from("héé")));
    }

    #[test]
    fn non_strings_are_false() {
        assert!(!string_of_length(0).check(&Value::Null));
        assert!(!string_longer_than(0).check(&Value::from(10_i64)));
    }

    #[test]
    fn pattern_compiles_and_guards() {
        let p = pattern(r"^\d+$").unwrap();
        assert!(p.check(&Value::from("123")));
        assert!(!p.check(&Value::from("12a")));
        assert!(!p.check(&Value::from(123_i64)));
        assert!(pattern(r"(unclosed").is_err());
    }
}
