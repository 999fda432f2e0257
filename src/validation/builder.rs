//! Fluent construction of per-field rule lists

use super::field::Field;
use super::rules::{FieldRule, Rule};

/// Accumulates the ordered rules for one field.
///
/// Nothing is evaluated at build time; the builder only records rules, in
/// chain order, for later evaluation by the composite. Each call to
/// [`RuleBuilder::field`] starts a fresh, independent list.
#[derive(Debug)]
pub struct RuleBuilder {
    field: Field,
    rules: Vec<FieldRule>,
}

impl RuleBuilder {
    /// Start accumulating rules for `field`.
    pub fn field(field: Field) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    /// The field must be non-empty.
    pub fn required(mut self) -> Self {
        self.push(Rule::Required);
        self
    }

    /// The field must hold a syntactically valid e-mail address.
    pub fn email(mut self) -> Self {
        self.push(Rule::Email);
        self
    }

    /// The field must be at least `min` characters long.
    pub fn min_length(mut self, min: usize) -> Self {
        self.push(Rule::MinLength(min));
        self
    }

    /// The field must equal `other`, captured here as a snapshot.
    pub fn matches(mut self, other: impl Into<String>) -> Self {
        self.push(Rule::Matches(other.into()));
        self
    }

    /// Hand back the rules in the order they were chained.
    pub fn build(self) -> Vec<FieldRule> {
        self.rules
    }

    fn push(&mut self, rule: Rule) {
        self.rules.push(FieldRule::new(self.field, rule));
    }
}
