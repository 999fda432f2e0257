//! Ordered rule evaluation across a whole form

use super::field::Field;
use super::rules::FieldRule;

/// Aggregate evaluator over every rule registered for a form.
///
/// Holds the flattened rule list for all fields, immutable after
/// construction. Rules for one field keep their registration order and the
/// first failing rule wins, which is why builder chain order matters:
/// `required().email()` reports "is required" on an empty value, never
/// "is invalid".
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    /// Build the composite from the concatenated per-field rule lists.
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    /// Message of the first failing rule for `field`, or `None` when clean.
    pub fn validate(&self, field: Field, value: &str) -> Option<String> {
        self.rules
            .iter()
            .filter(|rule| rule.field() == field)
            .find_map(|rule| rule.validate(value))
            .map(|err| err.to_string())
    }
}
