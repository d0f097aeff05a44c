//! Evaluation context
//!
//! Raw inputs ([`TransactionFeatures`], [`MlPrediction`]) are turned into an
//! [`EvaluationContext`] by the [`ContextBuilder`]. Conditions only see the
//! variables enumerated by [`ContextVariable`].

mod builder;
mod context;
mod input;

pub use builder::ContextBuilder;
pub use context::{is_night_hour, ContextVariable, EvaluationContext};
pub use input::{MlPrediction, TransactionFeatures, V_FEATURE_COUNT};
