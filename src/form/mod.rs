//! Form state machines and submission handling

mod login;
mod signup;
mod state;
mod submit;

pub use login::*;
pub use signup::*;
pub use state::*;
pub use submit::*;
