//! Rule evaluation engine
//!
//! [`ConditionEvaluator`] walks a parsed condition against an
//! [`EvaluationContext`](crate::context::EvaluationContext);
//! [`RuleEngine`] runs the whole repository and scores the result.

mod evaluator;
mod operators;
mod rule_engine;
pub mod scoring;

pub use evaluator::{evaluate_condition, ConditionEvaluator};
pub use rule_engine::RuleEngine;
