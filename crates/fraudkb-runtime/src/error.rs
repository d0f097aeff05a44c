//! Runtime error types

use fraudkb_core::ParseError;
use thiserror::Error;

/// Runtime error
///
/// Raised while evaluating a single rule. The rule engine never lets one of
/// these escape `evaluate`; it records it in the reasoning trace instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// Condition text did not parse
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Condition references a name outside the evaluation context
    #[error("name '{0}' is not defined")]
    UndefinedName(String),

    /// Operands of the wrong type
    #[error("Type error: {0}")]
    TypeError(String),

    /// Operator used where it has no meaning
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Rule definition cannot be applied
    #[error("Invalid rule {rule_id}: {message}")]
    InvalidRule { rule_id: String, message: String },
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_name_display() {
        let err = RuntimeError::UndefinedName("velocity".to_string());
        assert_eq!(err.to_string(), "name 'velocity' is not defined");
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let err: RuntimeError = ParseError::new("unexpected end of input", "amount >", 8).into();
        assert!(err.to_string().starts_with("Failed to parse 'amount >'"));
    }

    #[test]
    fn test_invalid_rule_display() {
        let err = RuntimeError::InvalidRule {
            rule_id: "R9".to_string(),
            message: "weight 1.5 is outside [0, 1]".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid rule R9: weight 1.5 is outside [0, 1]");
    }
}
