//! Condition Parsing Module
//!
//! Rule conditions are parsed in two stages, tokenizing then recursive
//! descent, into an [`Expression`](crate::ast::Expression) tree. The grammar
//! has no calls, attribute access or string literals, so a condition can only
//! compare context variables against numbers and lists.
//!
//! # Syntax
//!
//! ```text
//! amount > 7500
//! hour in [0,1,2,3,4] and amount > 2000
//! amount < 0.5 && prob > 0.5
//! not ml_prediction or 0 <= hour < 5
//! hour not in [9, 10, 11]
//! ```
//!
//! ## Supported Operators
//! - `==`, `!=`, `>`, `>=`, `<`, `<=` (chains like `a < b < c` expand to `a < b and b < c`)
//! - `in`, `not in`
//! - `and` / `&&`, `or` / `||`, `not` / `!`
//! - unary `-`
//!
//! ## Precedence (lowest first)
//! `or`, `and`, `not`, comparisons and membership, unary minus, atoms.
//!
//! Nesting is capped at [`MAX_NESTING_DEPTH`] levels; deeper conditions are a
//! [`ParseError`](crate::error::ParseError).

mod lexer;
mod parser;

pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{ConditionParser, MAX_NESTING_DEPTH};
