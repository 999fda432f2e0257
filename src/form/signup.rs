//! Sign-up form: name, email, password, and confirmation

use crate::account::CreateAccountParams;
use crate::config::FormPolicy;
use crate::validation::{Field, RuleBuilder, RuleSet};

use super::state::{Form, FormState};

/// State machine behind the sign-up screen.
#[derive(Debug, Clone)]
pub struct SignupForm {
    state: FormState,
    policy: FormPolicy,
}

impl SignupForm {
    pub fn new(policy: &FormPolicy) -> Self {
        let state = FormState::new(
            vec![
                Field::Name,
                Field::Email,
                Field::Password,
                Field::PasswordConfirmation,
            ],
            Self::rules(policy, ""),
        );
        Self {
            state,
            policy: policy.clone(),
        }
    }

    /// Rule set for the current password snapshot.
    ///
    /// The confirmation check compares against a snapshot captured at build
    /// time, so the whole set is rebuilt whenever the password changes
    /// instead of mutating any rule in place.
    fn rules(policy: &FormPolicy, password: &str) -> RuleSet {
        let mut rules = RuleBuilder::field(Field::Name).required().build();
        rules.extend(RuleBuilder::field(Field::Email).required().email().build());
        rules.extend(
            RuleBuilder::field(Field::Password)
                .required()
                .min_length(policy.min_password_length)
                .build(),
        );
        rules.extend(
            RuleBuilder::field(Field::PasswordConfirmation)
                .required()
                .matches(password)
                .build(),
        );
        RuleSet::new(rules)
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.state.set_value(Field::Name, value);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.state.set_value(Field::Email, value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        let value = value.into();
        let rules = Self::rules(&self.policy, &value);
        self.state.set_value(Field::Password, value);
        self.state.set_rules(rules);
    }

    pub fn set_password_confirmation(&mut self, value: impl Into<String>) {
        self.state.set_value(Field::PasswordConfirmation, value);
    }

    /// Snapshot of the sign-up payload for submission.
    pub fn params(&self) -> CreateAccountParams {
        CreateAccountParams {
            name: self.state.value(Field::Name).to_owned(),
            email: self.state.value(Field::Email).to_owned(),
            password: self.state.value(Field::Password).to_owned(),
            password_confirmation: self.state.value(Field::PasswordConfirmation).to_owned(),
        }
    }
}

impl Form for SignupForm {
    fn state(&self) -> &FormState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }
}
