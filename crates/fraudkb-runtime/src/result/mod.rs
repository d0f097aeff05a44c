//! Evaluation result types

pub mod recommendation;
pub mod result;
pub mod trace;

pub use recommendation::Recommendation;
pub use result::{
    ConfidenceLevel, ContextSummary, DetectedPattern, EvaluationResult, FiredRule, RiskLevel,
};
pub use trace::ReasoningTrace;
