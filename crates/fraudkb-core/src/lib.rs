//! fraudkb Core - Core types and definitions for the fraud knowledge base
//!
//! This crate provides the fundamental types used across the fraudkb crates:
//! - Value types for facts and condition evaluation
//! - Rule definitions
//! - The restricted condition language (lexer, parser, AST)
//! - Error types

pub mod ast;
pub mod condition;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use ast::{Expression, Operator, Rule, RuleAction, UnaryOperator};
pub use condition::ConditionParser;
pub use error::ParseError;
pub use types::Value;
