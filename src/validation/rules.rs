//! Per-field validation rules

use email_address::EmailAddress;

use super::error::ValidationError;
use super::field::Field;

/// A single validation predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty.
    Required,
    /// Value must be a syntactically valid e-mail address.
    Email,
    /// Value must be at least this many characters.
    MinLength(usize),
    /// Value must equal a snapshot captured when the rule was built.
    Matches(String),
}

/// A rule bound to the field it guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    field: Field,
    rule: Rule,
}

impl FieldRule {
    pub fn new(field: Field, rule: Rule) -> Self {
        Self { field, rule }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    /// Evaluate the rule against a field value. Pure, no side effects.
    ///
    /// `Email` and `MinLength` accept the empty string: absence is
    /// exclusively `Required`'s concern, so one field can stack independent
    /// rules without duplicated empty checks.
    pub fn validate(&self, value: &str) -> Option<ValidationError> {
        let ok = match &self.rule {
            Rule::Required => !value.is_empty(),
            Rule::Email => value.is_empty() || EmailAddress::is_valid(value),
            Rule::MinLength(min) => value.is_empty() || value.chars().count() >= *min,
            Rule::Matches(other) => value == other,
        };
        if ok {
            None
        } else if matches!(self.rule, Rule::Required) {
            Some(ValidationError::Required(self.field))
        } else {
            Some(ValidationError::Invalid(self.field))
        }
    }
}
