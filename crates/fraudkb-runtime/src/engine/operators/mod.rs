//! Operator execution for condition evaluation
//!
//! Logical `and`/`or` are not here; they short-circuit in the evaluator.

mod comparison;
mod membership;
mod unary;

pub(crate) use comparison::execute_compare;
pub(crate) use membership::execute_membership;
pub(crate) use unary::execute_unary_op;
