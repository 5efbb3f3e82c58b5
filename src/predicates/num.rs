//! Numeric comparator factories.
//!
//! All comparisons are over the value's f64 lane; non-numbers compare false.
//! NaN falls out of every comparison as false, which is the behavior we
//! want without a special case.

use crate::rule::Predicate;
use crate::value::Value;

pub fn number_more_than(bound: f64) -> Predicate {
    Predicate::new(move |v| v.as_f64().is_some_and(|n| n > bound))
}

pub fn number_less_than(bound: f64) -> Predicate {
    Predicate::new(move |v| v.as_f64().is_some_and(|n| n < bound))
}

pub fn number_equal(bound: f64) -> Predicate {
    Predicate::new(move |v| v.as_f64().is_some_and(|n| n == bound))
}

pub fn number_min(bound: f64) -> Predicate {
    Predicate::new(move |v| v.as_f64().is_some_and(|n| n >= bound))
}

pub fn number_max(bound: f64) -> Predicate {
    Predicate::new(move |v| v.as_f64().is_some_and(|n| n <= bound))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparators_close_over_their_bound() {
        let v = Value::from(5.0);
        assert!(number_more_than(4.0).check(&v));
        assert!(!number_more_than(5.0).check(&v));
        assert!(number_less_than(6.0).check(&v));
        assert!(number_equal(5.0).check(&v));
        assert!(number_min(5.0).check(&v));
        assert!(number_max(5.0).check(&v));
        assert!(!number_max(4.9).check(&v));
    }

    #[test]
    fn nan_and_non_numbers_are_false() {
        assert!(!number_more_than(0.0).check(&Value::Number(f64::NAN)));
        assert!(!number_equal(0.0).check(&Value::Number(f64::NAN)));
        assert!(!number_min(0.0).check(&Value::from("5")));
        assert!(!number_less_than(10.0).check(&Value::Null));
    }
}
