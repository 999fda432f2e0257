//! Auth service client module

mod client;
mod traits;

pub use client::AuthApi;
pub use traits::{AccountCreator, Authenticator};

#[cfg(test)]
pub use traits::{MockAccountCreator, MockAuthenticator};
