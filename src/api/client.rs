//! HTTP client for the remote auth service
//!
//! JSON POST endpoints for login and sign-up, plus the status mapping that
//! turns HTTP failures into user-facing errors.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

use crate::account::{Account, AuthError, AuthParams, CreateAccountParams};

use super::traits::{AccountCreator, Authenticator};

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the remote auth service.
pub struct AuthApi {
    client: Client,
    login_url: String,
    signup_url: String,
}

impl AuthApi {
    /// Create a client rooted at the API base URL,
    /// e.g. `http://127.0.0.1:5050/api`.
    pub fn new(base_url: &str) -> Result<Self, AuthError> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(|err| {
                warn!("failed to build http client: {err}");
                AuthError::Unexpected
            })?;
        let base = base_url.trim_end_matches('/');

        Ok(Self {
            client,
            login_url: format!("{base}/login"),
            signup_url: format!("{base}/signup"),
        })
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    pub fn signup_url(&self) -> &str {
        &self.signup_url
    }

    async fn post_json<T: Serialize + Sync>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<(StatusCode, String), AuthError> {
        debug!("POST {url}");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                warn!("auth request failed: {err}");
                AuthError::Unexpected
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            warn!("failed to read auth response: {err}");
            AuthError::Unexpected
        })?;

        Ok((status, body))
    }
}

/// Map a login response to an account.
fn map_login_response(status: StatusCode, body: &str) -> Result<Account, AuthError> {
    match status {
        StatusCode::OK => parse_account(body),
        StatusCode::UNAUTHORIZED => Err(AuthError::InvalidCredentials),
        _ => {
            warn!("unexpected login status: {status}");
            Err(AuthError::Unexpected)
        }
    }
}

/// Map a sign-up response to an account.
fn map_signup_response(status: StatusCode, body: &str) -> Result<Account, AuthError> {
    match status {
        StatusCode::OK => parse_account(body),
        StatusCode::FORBIDDEN => Err(AuthError::EmailInUse),
        _ => {
            warn!("unexpected sign-up status: {status}");
            Err(AuthError::Unexpected)
        }
    }
}

fn parse_account(body: &str) -> Result<Account, AuthError> {
    serde_json::from_str(body).map_err(|err| {
        warn!("malformed account payload: {err}");
        AuthError::Unexpected
    })
}

#[async_trait]
impl Authenticator for AuthApi {
    async fn authenticate(&self, params: AuthParams) -> Result<Account, AuthError> {
        let (status, body) = self.post_json(&self.login_url, &params).await?;
        map_login_response(status, &body)
    }
}

#[async_trait]
impl AccountCreator for AuthApi {
    async fn create(&self, params: CreateAccountParams) -> Result<Account, AuthError> {
        let (status, body) = self.post_json(&self.signup_url, &params).await?;
        map_signup_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_endpoint_urls() {
        let api = AuthApi::new("http://127.0.0.1:5050/api").unwrap();
        assert_eq!(api.login_url(), "http://127.0.0.1:5050/api/login");
        assert_eq!(api.signup_url(), "http://127.0.0.1:5050/api/signup");
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let api = AuthApi::new("http://127.0.0.1:5050/api/").unwrap();
        assert_eq!(api.login_url(), "http://127.0.0.1:5050/api/login");
    }

    mod login_mapping {
        use super::*;

        #[test]
        fn test_ok_parses_account() {
            let account =
                map_login_response(StatusCode::OK, r#"{"accessToken":"tok-1"}"#).unwrap();
            assert_eq!(account.access_token, "tok-1");
        }

        #[test]
        fn test_unauthorized_is_invalid_credentials() {
            let err = map_login_response(StatusCode::UNAUTHORIZED, "").unwrap_err();
            assert_eq!(err, AuthError::InvalidCredentials);
        }

        #[test]
        fn test_other_statuses_are_unexpected() {
            for status in [
                StatusCode::BAD_REQUEST,
                StatusCode::NOT_FOUND,
                StatusCode::INTERNAL_SERVER_ERROR,
            ] {
                let err = map_login_response(status, "").unwrap_err();
                assert_eq!(err, AuthError::Unexpected);
            }
        }

        #[test]
        fn test_malformed_success_body_is_unexpected() {
            let err = map_login_response(StatusCode::OK, "not json").unwrap_err();
            assert_eq!(err, AuthError::Unexpected);

            let err = map_login_response(StatusCode::OK, r#"{"wrong":"shape"}"#).unwrap_err();
            assert_eq!(err, AuthError::Unexpected);
        }
    }

    mod signup_mapping {
        use super::*;

        #[test]
        fn test_ok_parses_account() {
            let account =
                map_signup_response(StatusCode::OK, r#"{"accessToken":"tok-2"}"#).unwrap();
            assert_eq!(account.access_token, "tok-2");
        }

        #[test]
        fn test_forbidden_is_email_in_use() {
            let err = map_signup_response(StatusCode::FORBIDDEN, "").unwrap_err();
            assert_eq!(err, AuthError::EmailInUse);
        }

        #[test]
        fn test_unauthorized_is_unexpected_for_signup() {
            // 401 only means bad credentials on the login endpoint.
            let err = map_signup_response(StatusCode::UNAUTHORIZED, "").unwrap_err();
            assert_eq!(err, AuthError::Unexpected);
        }
    }
}
