//! Array container predicates: length comparators over the array itself,
//! distinct from the per-element checks an array rule carries.

use crate::rule::Predicate;
use crate::value::Value;

fn len_of(value: &Value) -> Option<usize> {
    value.as_array().map(<[Value]>::len)
}

pub fn array_longer_than(bound: usize) -> Predicate {
    Predicate::new(move |v| len_of(v).is_some_and(|len| len > bound))
}

pub fn array_shorter_than(bound: usize) -> Predicate {
    Predicate::new(move |v| len_of(v).is_some_and(|len| len < bound))
}

pub fn array_of_length(bound: usize) -> Predicate {
    Predicate::new(move |v| len_of(v).is_some_and(|len| len == bound))
}

pub fn array_min_length(bound: usize) -> Predicate {
    Predicate::new(move |v| len_of(v).is_some_and(|len| len >= bound))
}

pub fn array_max_length(bound: usize) -> Predicate {
    Predicate::new(move |v| len_of(v).is_some_and(|len| len <= bound))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_apply_to_the_container() {
        let v = Value::from(vec![1_i64, 2, 3]);
        assert!(array_longer_than(2).check(&v));
        assert!(!array_longer_than(3).check(&v));
        assert!(array_shorter_than(4).check(&v));
        assert!(array_of_length(3).check(&v));
        assert!(array_min_length(3).check(&v));
        assert!(array_max_length(3).check(&v));

        let empty = Value::Array(vec![]);
        assert!(array_of_length(0).check(&empty));
        assert!(!array_min_length(1).check(&empty));
    }

    #[test]
    fn non_arrays_are_false() {
        assert!(!array_of_length(0).check(&Value::from("abc")));
        assert!(!array_min_length(0).check(&Value::Null));
    }
}
