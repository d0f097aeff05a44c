//! Membership operator execution

use crate::error::{Result, RuntimeError};
use fraudkb_core::{Operator, Value};

/// Execute `needle in haystack` / `needle not in haystack`
pub(crate) fn execute_membership(needle: &Value, op: Operator, haystack: &Value) -> Result<bool> {
    let items = haystack.as_array().ok_or_else(|| {
        RuntimeError::TypeError(format!(
            "argument of type '{}' is not iterable",
            haystack.type_name()
        ))
    })?;

    let found = items.iter().any(|item| item.loose_eq(needle));
    match op {
        Operator::In => Ok(found),
        Operator::NotIn => Ok(!found),
        _ => Err(RuntimeError::InvalidOperation(format!(
            "'{}' is not a membership test",
            op
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours() -> Value {
        Value::Array((0..5).map(|h| Value::from(h as i64)).collect())
    }

    #[test]
    fn test_in_list() {
        assert!(execute_membership(&Value::Number(3.0), Operator::In, &hours()).unwrap());
        assert!(!execute_membership(&Value::Number(5.0), Operator::In, &hours()).unwrap());
        assert!(execute_membership(&Value::Number(5.0), Operator::NotIn, &hours()).unwrap());
    }

    #[test]
    fn test_empty_list() {
        let empty = Value::Array(vec![]);
        assert!(!execute_membership(&Value::Number(0.0), Operator::In, &empty).unwrap());
    }

    #[test]
    fn test_non_list_right_side() {
        let err = execute_membership(&Value::Number(1.0), Operator::In, &Value::Number(1.0))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type error: argument of type 'number' is not iterable"
        );
    }
}
