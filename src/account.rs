//! Domain models and the submission error taxonomy

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authenticated account returned by the auth service.
///
/// The access token is opaque to this crate; it is handed to the token
/// store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub access_token: String,
}

/// Credentials submitted by the login form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthParams {
    pub email: String,
    pub password: String,
}

/// Payload submitted by the sign-up form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Failures a submission attempt can surface.
///
/// The `Display` strings are the user-facing messages shown in the form's
/// main error slot. Anything without a dedicated message (network trouble,
/// malformed payloads, storage failures) collapses into `Unexpected`;
/// details go to the log, not the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("this e-mail is already in use")]
    EmailInUse,
    #[error("something went wrong, please try again soon")]
    Unexpected,
}
