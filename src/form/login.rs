//! Login form: email and password

use crate::account::AuthParams;
use crate::config::FormPolicy;
use crate::validation::{Field, RuleBuilder, RuleSet};

use super::state::{Form, FormState};

/// State machine behind the login screen.
#[derive(Debug, Clone)]
pub struct LoginForm {
    state: FormState,
}

impl LoginForm {
    pub fn new(policy: &FormPolicy) -> Self {
        let mut rules = RuleBuilder::field(Field::Email).required().email().build();
        rules.extend(
            RuleBuilder::field(Field::Password)
                .required()
                .min_length(policy.min_password_length)
                .build(),
        );
        Self {
            state: FormState::new(vec![Field::Email, Field::Password], RuleSet::new(rules)),
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.state.set_value(Field::Email, value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.state.set_value(Field::Password, value);
    }

    /// Snapshot of the credentials for submission.
    pub fn credentials(&self) -> AuthParams {
        AuthParams {
            email: self.state.value(Field::Email).to_owned(),
            password: self.state.value(Field::Password).to_owned(),
        }
    }
}

impl Form for LoginForm {
    fn state(&self) -> &FormState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }
}
