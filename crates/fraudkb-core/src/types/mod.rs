//! Type system for fraudkb
//!
//! Facts, condition literals and context variables all share the
//! [`Value`] representation.

pub mod value;

pub use value::Value;
