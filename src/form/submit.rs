//! Submission controllers and the cancellable completion handle

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::account::{Account, AuthError};
use crate::api::{AccountCreator, Authenticator};
use crate::session::{Navigator, TokenStore};

use super::login::LoginForm;
use super::signup::SignupForm;
use super::state::Form;

/// Handle tied to one form's pending submission.
///
/// When the owning screen is torn down mid-flight, cancelling the handle
/// turns the eventual completion into a no-op instead of a write to a dead
/// form. Clone it so the shell keeps one side while the submit call holds
/// the other.
#[derive(Debug, Clone, Default)]
pub struct SubmitHandle {
    cancelled: Arc<AtomicBool>,
}

impl SubmitHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Drives a login attempt end to end.
pub struct LoginController<A, S, N> {
    authenticator: A,
    token_store: S,
    navigator: N,
    home_path: String,
}

impl<A, S, N> LoginController<A, S, N>
where
    A: Authenticator,
    S: TokenStore,
    N: Navigator,
{
    pub fn new(authenticator: A, token_store: S, navigator: N, home_path: impl Into<String>) -> Self {
        Self {
            authenticator,
            token_store,
            navigator,
            home_path: home_path.into(),
        }
    }

    /// Submit the form if its guard allows it.
    ///
    /// Blocked submits (one already in flight, or a field in error) are
    /// dropped, not queued. On success the token is persisted and navigation
    /// replaces the current route; the submitting flag stays set because the
    /// form is about to disappear. On failure the error's message lands in
    /// the main error slot, unless `handle` was cancelled while the call was
    /// pending.
    pub async fn submit(&self, form: &mut LoginForm, handle: &SubmitHandle) {
        if !form.state_mut().begin_submit() {
            debug!("login submit blocked");
            return;
        }

        let result = match self.authenticator.authenticate(form.credentials()).await {
            Ok(account) => persist_and_navigate(
                &self.token_store,
                &self.navigator,
                &self.home_path,
                &account,
            )
            .await,
            Err(err) => Err(err),
        };

        if let Err(err) = result {
            if handle.is_cancelled() {
                debug!("login completion ignored: handle cancelled");
                return;
            }
            form.state_mut().fail_submit(err.to_string());
        }
    }
}

/// Drives a sign-up attempt end to end.
pub struct SignupController<A, S, N> {
    account_creator: A,
    token_store: S,
    navigator: N,
    home_path: String,
}

impl<A, S, N> SignupController<A, S, N>
where
    A: AccountCreator,
    S: TokenStore,
    N: Navigator,
{
    pub fn new(account_creator: A, token_store: S, navigator: N, home_path: impl Into<String>) -> Self {
        Self {
            account_creator,
            token_store,
            navigator,
            home_path: home_path.into(),
        }
    }

    /// Submit the form if its guard allows it. Same lifecycle as
    /// [`LoginController::submit`].
    pub async fn submit(&self, form: &mut SignupForm, handle: &SubmitHandle) {
        if !form.state_mut().begin_submit() {
            debug!("sign-up submit blocked");
            return;
        }

        let result = match self.account_creator.create(form.params()).await {
            Ok(account) => persist_and_navigate(
                &self.token_store,
                &self.navigator,
                &self.home_path,
                &account,
            )
            .await,
            Err(err) => Err(err),
        };

        if let Err(err) = result {
            if handle.is_cancelled() {
                debug!("sign-up completion ignored: handle cancelled");
                return;
            }
            form.state_mut().fail_submit(err.to_string());
        }
    }
}

/// Success tail shared by both flows: hand the token over, then leave.
async fn persist_and_navigate<S, N>(
    token_store: &S,
    navigator: &N,
    home_path: &str,
    account: &Account,
) -> Result<(), AuthError>
where
    S: TokenStore,
    N: Navigator,
{
    token_store.save(&account.access_token).await?;
    navigator.replace(home_path);
    Ok(())
}
