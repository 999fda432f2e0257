//! Trait abstraction for the auth service to enable mocking in tests

use async_trait::async_trait;

use crate::account::{Account, AuthError, AuthParams, CreateAccountParams};

/// Login operation against the remote auth service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Exchange credentials for an account carrying a fresh access token.
    async fn authenticate(&self, params: AuthParams) -> Result<Account, AuthError>;
}

/// Account-creation operation against the remote auth service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountCreator: Send + Sync {
    /// Register a new account and sign it in.
    async fn create(&self, params: CreateAccountParams) -> Result<Account, AuthError>;
}
