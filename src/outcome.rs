//! Result trees.
//!
//! An outcome mirrors the shape of the rule that produced it, not the shape
//! of the value: only the leaf booleans depend on value content. The JSON
//! view keeps the same layout (`[container, [elements..]]` for array rules,
//! an object for field maps, a bare bool for leaves).

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::rule::Rule;

pub type FieldOutcomes = IndexMap<String, Outcome>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// One predicate's verdict.
    Leaf(bool),
    /// Container verdict plus one outcome per element, in input order.
    Array(bool, Vec<Outcome>),
    /// One outcome per rule field, same keys as the rule's field map.
    Object(FieldOutcomes),
}

impl Outcome {
    /// Aggregate AND over the whole tree. A helper over the returned tree;
    /// the full tree stays the return contract of `validate`.
    pub fn passed(&self) -> bool {
        match self {
            Outcome::Leaf(ok) => *ok,
            Outcome::Array(container, elements) => {
                *container && elements.iter().all(Outcome::passed)
            }
            Outcome::Object(fields) => fields.values().all(Outcome::passed),
        }
    }

    /// Does this outcome have the shape the given rule dictates?
    ///
    /// Holds for every output of `validate` regardless of the value that was
    /// checked. A `Malformed` rule dictates a leaf.
    pub fn mirrors(&self, rule: &Rule) -> bool {
        match (self, rule) {
            (Outcome::Leaf(_), Rule::Leaf(_) | Rule::Malformed) => true,
            (Outcome::Array(_, elements), Rule::Array { element, .. }) => {
                elements.iter().all(|e| e.mirrors(element))
            }
            (Outcome::Object(fields), Rule::Object(rules)) => {
                fields.len() == rules.len()
                    && fields
                        .iter()
                        .all(|(key, outcome)| rules.get(key).is_some_and(|r| outcome.mirrors(r)))
            }
            _ => false,
        }
    }

    /// JSON view of the tree, in the layout described at module level.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Leaf(ok) => serializer.serialize_bool(*ok),
            Outcome::Array(container, elements) => {
                let mut pair = serializer.serialize_seq(Some(2))?;
                pair.serialize_element(container)?;
                pair.serialize_element(elements)?;
                pair.end()
            }
            Outcome::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, outcome) in fields {
                    map.serialize_entry(key, outcome)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_view_matches_rule_layout() {
        let outcome = Outcome::Array(
            true,
            vec![
                Outcome::Object(FieldOutcomes::from_iter([
                    ("name".to_string(), Outcome::Leaf(true)),
                    ("age".to_string(), Outcome::Leaf(false)),
                ])),
            ],
        );
        assert_eq!(
            outcome.to_json(),
            json!([true, [{"name": true, "age": false}]])
        );
    }

    #[test]
    fn passed_requires_every_leaf() {
        let all_true = Outcome::Array(true, vec![Outcome::Leaf(true), Outcome::Leaf(true)]);
        assert!(all_true.passed());

        let one_false = Outcome::Array(true, vec![Outcome::Leaf(true), Outcome::Leaf(false)]);
        assert!(!one_false.passed());

        let container_false = Outcome::Array(false, vec![]);
        assert!(!container_false.passed());
    }
}
