//! Form state: values, derived errors, and the submission flags

use std::collections::HashMap;

use crate::validation::{Field, RuleSet};

/// Trait for common form operations
pub trait Form {
    fn state(&self) -> &FormState;
    fn state_mut(&mut self) -> &mut FormState;

    fn value(&self, field: Field) -> &str {
        self.state().value(field)
    }
    fn error(&self, field: Field) -> Option<&str> {
        self.state().error(field)
    }
    fn can_submit(&self) -> bool {
        self.state().can_submit()
    }
    fn is_submitting(&self) -> bool {
        self.state().is_submitting()
    }
    fn main_error(&self) -> Option<&str> {
        self.state().main_error()
    }
}

/// Reactive state owned by one form instance.
///
/// Derived state (the per-field errors) is recomputed synchronously after
/// every value mutation, so ordering stays deterministic without any
/// subscription machinery.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<Field>,
    values: HashMap<Field, String>,
    field_errors: HashMap<Field, String>,
    rules: RuleSet,
    is_submitting: bool,
    main_error: Option<String>,
}

impl FormState {
    /// Create the state for `fields`, all starting empty.
    ///
    /// Every required field begins with its error populated, so a freshly
    /// mounted form reports "is required" everywhere and cannot submit.
    pub fn new(fields: Vec<Field>, rules: RuleSet) -> Self {
        let values = fields.iter().map(|f| (*f, String::new())).collect();
        let mut state = Self {
            fields,
            values,
            field_errors: HashMap::new(),
            rules,
            is_submitting: false,
            main_error: None,
        };
        state.revalidate();
        state
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn main_error(&self) -> Option<&str> {
        self.main_error.as_deref()
    }

    /// A form can submit when nothing is in flight and every field is clean.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && self.field_errors.is_empty()
    }

    /// Update one field's value and recompute the derived errors.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.revalidate();
    }

    /// Swap in a new rule set (after a compare snapshot changed) and
    /// recompute the derived errors.
    pub fn set_rules(&mut self, rules: RuleSet) {
        self.rules = rules;
        self.revalidate();
    }

    /// Guarded entry into the submitting state.
    ///
    /// Refused while a submission is in flight or any field is in error; a
    /// refused submit leaves the state untouched. On entry the main error
    /// from a previous attempt is cleared.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.is_submitting = true;
        self.main_error = None;
        true
    }

    /// Record a failed attempt: one user-visible message, replacing any
    /// prior one, and the form becomes submittable again.
    pub fn fail_submit(&mut self, message: impl Into<String>) {
        self.main_error = Some(message.into());
        self.is_submitting = false;
    }

    /// Leave the submitting state without recording an error.
    ///
    /// Successful submissions normally navigate away and never need this;
    /// call it when the form stays alive after success to avoid a stuck
    /// spinner.
    pub fn finish_submit(&mut self) {
        self.is_submitting = false;
    }

    fn revalidate(&mut self) {
        self.field_errors.clear();
        for field in &self.fields {
            let value = self.values.get(field).map(String::as_str).unwrap_or_default();
            if let Some(message) = self.rules.validate(*field, value) {
                self.field_errors.insert(*field, message);
            }
        }
    }
}
