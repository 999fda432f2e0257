//! Typed validation errors

use thiserror::Error;

use super::field::Field;

/// Outcome of a rule rejecting a field value.
///
/// Errors are ordinary return values, never raised as control flow. Two
/// errors are equal when they carry the same kind and field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The field is empty but must be filled in.
    #[error("{0} is required")]
    Required(Field),
    /// The field has a value that fails one of its rules.
    #[error("{0} is invalid")]
    Invalid(Field),
}

impl ValidationError {
    /// The field this error is attached to.
    pub fn field(&self) -> Field {
        match self {
            Self::Required(field) | Self::Invalid(field) => *field,
        }
    }
}
