//! Unary operator execution

use crate::error::{Result, RuntimeError};
use fraudkb_core::{UnaryOperator, Value};

/// Execute a unary operation
pub(crate) fn execute_unary_op(operand: &Value, op: UnaryOperator) -> Result<Value> {
    match op {
        UnaryOperator::Not => Ok(Value::Bool(!operand.is_truthy())),
        UnaryOperator::Negate => match operand.as_number() {
            Some(n) => Ok(Value::Number(-n)),
            None => Err(RuntimeError::TypeError(format!(
                "bad operand type for unary -: '{}'",
                operand.type_name()
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_uses_truthiness() {
        assert_eq!(
            execute_unary_op(&Value::Number(0.0), UnaryOperator::Not).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            execute_unary_op(&Value::Array(vec![Value::Null]), UnaryOperator::Not).unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn test_negate() {
        assert_eq!(
            execute_unary_op(&Value::Number(2.5), UnaryOperator::Negate).unwrap(),
            Value::Number(-2.5)
        );
        assert!(execute_unary_op(&Value::Array(vec![]), UnaryOperator::Negate).is_err());
    }
}
