//! Condition syntax errors

use thiserror::Error;

/// Condition syntax error
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Failed to parse '{condition}' at offset {position}: {message}")]
pub struct ParseError {
    pub message: String,
    pub condition: String,
    pub position: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, condition: &str, position: usize) -> Self {
        Self {
            message: message.into(),
            condition: condition.to_string(),
            position,
        }
    }
}
