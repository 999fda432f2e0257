//! Form field validation: rules, fluent builder, and the composite evaluator

mod builder;
mod composite;
mod error;
mod field;
mod rules;

pub use builder::*;
pub use composite::*;
pub use error::*;
pub use field::*;
pub use rules::*;
