//! The recursive engine.
//!
//! Dispatch is by rule shape, never by value shape: the rule decides how the
//! value is interpreted. Every rule leaf is evaluated exactly once per call;
//! there is no short-circuiting across siblings, because the full outcome
//! tree (not an aggregate pass/fail) is the return contract.

use crate::outcome::{FieldOutcomes, Outcome};
use crate::rule::Rule;
use crate::value::Value;

/// Check `value` against `rule` and return the outcome tree.
///
/// Pure and synchronous. Recursion depth equals the rule tree's nesting
/// depth; bounding the depth of untrusted rule trees is the caller's job.
///
/// # Panics
///
/// Applying an array rule to a non-array value is a caller contract
/// violation and panics. A panicking predicate likewise propagates; the
/// engine catches nothing.
pub fn validate(value: &Value, rule: &Rule) -> Outcome {
    match rule {
        Rule::Leaf(predicate) => Outcome::Leaf(predicate.check(value)),

        Rule::Array { container, element } => {
            let container_ok = container.check(value);
            let elements = match value {
                Value::Array(items) => items.iter().map(|item| validate(item, element)).collect(),
                other => panic!("array rule applied to {} value", other.kind()),
            };
            Outcome::Array(container_ok, elements)
        }

        Rule::Object(rules) => {
            let mut fields = FieldOutcomes::with_capacity(rules.len());
            for (key, nested) in rules {
                // A missing field validates as null, matching how absence
                // flows into type-guarded leaves. Value fields the rule
                // does not name are dropped.
                let field = value.get(key).unwrap_or(&Value::Null);
                fields.insert(key.clone(), validate(field, nested));
            }
            Outcome::Object(fields)
        }

        // Defensive default for shape-less rule fragments.
        Rule::Malformed => Outcome::Leaf(false),
    }
}
