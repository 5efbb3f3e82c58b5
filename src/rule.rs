//! Rule trees.
//!
//! A rule is a tagged union, never sniffed from value shapes: the array-pair
//! case is its own variant, so a two-element array rule and a two-key field
//! map can never be confused. Leaves are opaque predicate capabilities; the
//! engine only ever calls them.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::value::Value;

pub type FieldRules = IndexMap<String, Rule>;

// ------------------------------ Predicate --------------------------------- //

/// A leaf capability: anything invocable on a value that returns a bool.
///
/// Predicates are pure and stateless by contract. One that panics is a
/// programmer error and propagates out of `validate` uncaught. Cloning is
/// cheap (shared `Arc`), so one predicate can sit at many rule leaves.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&Value) -> bool + Send + Sync>);

impl Predicate {
    pub fn new(check: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Predicate(Arc::new(check))
    }

    /// Standalone call surface; usable outside `validate`.
    pub fn check(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

// -------------------------------- Rule ------------------------------------ //

#[derive(Debug, Clone)]
pub enum Rule {
    /// Apply one predicate to the value as-is (primitives, dates).
    Leaf(Predicate),
    /// Check the container itself, then recurse into every element.
    Array {
        container: Predicate,
        element: Box<Rule>,
    },
    /// Validate the named fields only; unnamed value fields are skipped
    /// and dropped from the result.
    Object(FieldRules),
    /// A fragment that is neither a predicate, an array pair, nor a field
    /// map. Callers bridging untyped rule sources construct this to stay
    /// total; it validates to a `false` leaf, never an error.
    Malformed,
}

impl Rule {
    pub fn leaf(check: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Rule {
        Rule::Leaf(Predicate::new(check))
    }

    pub fn array(container: Predicate, element: impl Into<Rule>) -> Rule {
        Rule::Array {
            container,
            element: Box::new(element.into()),
        }
    }

    pub fn object(fields: FieldRules) -> Rule {
        Rule::Object(fields)
    }
}

impl From<Predicate> for Rule {
    fn from(predicate: Predicate) -> Self {
        Rule::Leaf(predicate)
    }
}

/// Build an object rule from `field: rule` pairs. Each right-hand side is
/// anything convertible into a [`Rule`] (a `Predicate` or a nested `Rule`).
///
/// ```
/// use treecheck::{predicates::*, rules, Rule};
///
/// let rule = rules! {
///     name: is_string(),
///     tags: Rule::array(is_array(), is_string()),
/// };
/// assert!(matches!(rule, Rule::Object(_)));
/// ```
#[macro_export]
macro_rules! rules {
    ( $( $field:ident : $rule:expr ),* $(,)? ) => {{
        let mut fields = $crate::rule::FieldRules::new();
        $(
            fields.insert(stringify!($field).to_string(), $crate::Rule::from($rule));
        )*
        $crate::Rule::Object(fields)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{is_array, is_string};

    #[test]
    fn predicate_is_shared_across_clones() {
        let p = Predicate::new(|v| matches!(v, Value::Null));
        let q = p.clone();
        assert!(p.check(&Value::Null));
        assert!(q.check(&Value::Null));
        assert!(!q.check(&Value::Bool(true)));
    }

    #[test]
    fn rules_macro_keeps_field_order() {
        let rule = rules! {
            name: is_string(),
            tags: Rule::array(is_array(), is_string()),
        };
        let Rule::Object(fields) = rule else {
            panic!("expected object rule")
        };
        let keys: Vec<_> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "tags"]);
        assert!(matches!(fields["tags"], Rule::Array { .. }));
    }
}
