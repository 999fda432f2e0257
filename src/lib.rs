//! Authflow - client-side login and sign-up flows
//!
//! Field validation, reactive form state machines, and submission
//! controllers for an authentication client, together with the HTTP,
//! token-store, and navigation collaborators they drive. An application
//! shell wires the pieces together and owns rendering and routing.

pub mod account;
pub mod api;
pub mod config;
pub mod form;
pub mod session;
pub mod validation;
