//! Comparison operator execution

use crate::error::{Result, RuntimeError};
use fraudkb_core::{Operator, Value};

/// Execute a comparison operation
///
/// Equality works on any pair of values (booleans compare as 0/1).
/// Ordering needs two numeric operands.
pub(crate) fn execute_compare(left: &Value, op: Operator, right: &Value) -> Result<bool> {
    match op {
        Operator::Eq => return Ok(left.loose_eq(right)),
        Operator::Ne => return Ok(!left.loose_eq(right)),
        Operator::Gt | Operator::Ge | Operator::Lt | Operator::Le => {}
        _ => {
            return Err(RuntimeError::InvalidOperation(format!(
                "'{}' is not a comparison",
                op
            )))
        }
    }

    let (l, r) = match (left.as_number(), right.as_number()) {
        (Some(l), Some(r)) => (l, r),
        _ => {
            return Err(RuntimeError::TypeError(format!(
                "'{}' not supported between instances of '{}' and '{}'",
                op,
                left.type_name(),
                right.type_name()
            )))
        }
    };

    Ok(match op {
        Operator::Gt => l > r,
        Operator::Ge => l >= r,
        Operator::Lt => l < r,
        _ => l <= r,
    })
}
