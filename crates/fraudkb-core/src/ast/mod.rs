//! Abstract Syntax Tree (AST) definitions for fraudkb
//!
//! This module contains the AST node definitions for:
//! - Condition expressions
//! - Operators
//! - Rules

pub mod expression;
pub mod operator;
pub mod rule;

pub use expression::{Expression, UnaryOperator};
pub use operator::Operator;
pub use rule::{Rule, RuleAction};
