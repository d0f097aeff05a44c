//! Restricted condition evaluator
//!
//! Only the node kinds of [`Expression`] exist, so there is nothing to call
//! and no attribute to reach. Names resolve against the fixed context
//! variable set and nothing else.

use super::operators::{execute_compare, execute_membership, execute_unary_op};
use crate::context::EvaluationContext;
use crate::error::{Result, RuntimeError};
use fraudkb_core::{ConditionParser, Expression, Operator, Value};

/// Evaluates condition ASTs against one context
#[derive(Debug, Clone, Copy)]
pub struct ConditionEvaluator<'a> {
    context: &'a EvaluationContext,
}

impl<'a> ConditionEvaluator<'a> {
    pub fn new(context: &'a EvaluationContext) -> Self {
        Self { context }
    }

    /// Truthiness of the expression's value
    pub fn matches(&self, expr: &Expression) -> Result<bool> {
        Ok(self.evaluate(expr)?.is_truthy())
    }

    pub fn evaluate(&self, expr: &Expression) -> Result<Value> {
        match expr {
            Expression::Literal(value) => Ok(value.clone()),

            Expression::Variable(name) => self
                .context
                .lookup(name)
                .ok_or_else(|| RuntimeError::UndefinedName(name.clone())),

            Expression::List(items) => items
                .iter()
                .map(|item| self.evaluate(item))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),

            Expression::Unary { op, operand } => {
                let value = self.evaluate(operand)?;
                execute_unary_op(&value, *op)
            }

            Expression::Binary { left, op, right } => self.evaluate_binary(left, *op, right),
        }
    }

    fn evaluate_binary(&self, left: &Expression, op: Operator, right: &Expression) -> Result<Value> {
        match op {
            Operator::And => {
                if !self.matches(left)? {
                    return Ok(Value::Bool(false));
                }
                Ok(Value::Bool(self.matches(right)?))
            }
            Operator::Or => {
                if self.matches(left)? {
                    return Ok(Value::Bool(true));
                }
                Ok(Value::Bool(self.matches(right)?))
            }
            Operator::In | Operator::NotIn => {
                let needle = self.evaluate(left)?;
                let haystack = self.evaluate(right)?;
                Ok(Value::Bool(execute_membership(&needle, op, &haystack)?))
            }
            _ => {
                let l = self.evaluate(left)?;
                let r = self.evaluate(right)?;
                Ok(Value::Bool(execute_compare(&l, op, &r)?))
            }
        }
    }
}

/// Parse and evaluate a condition string in one step
pub fn evaluate_condition(condition: &str, context: &EvaluationContext) -> Result<bool> {
    let expr = ConditionParser::parse(condition)?;
    ConditionEvaluator::new(context).matches(&expr)
}
