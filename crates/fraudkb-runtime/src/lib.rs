//! fraudkb Runtime - Rule evaluation for the fraud knowledge base
//!
//! This crate turns a transaction feature vector and an ML prediction into
//! an [`EvaluationResult`]:
//!
//! 1. [`ContextBuilder`] derives the [`EvaluationContext`]
//! 2. [`RuleEngine`] evaluates the [`KnowledgeBase`] rules in order and
//!    adjusts the risk score
//! 3. [`PatternDetector`] runs the fixed heuristics
//! 4. the recommendation and context summary are attached
//!
//! ```rust
//! use fraudkb_runtime::{KnowledgeBase, MlPrediction, RuleEngine, TransactionFeatures};
//!
//! let engine = RuleEngine::new(KnowledgeBase::with_default_rules());
//! let features = TransactionFeatures::new().with_time(36000.0).with_amount(8000.0);
//! let result = engine.evaluate(&features, &MlPrediction::new(1, 0.88));
//!
//! assert_eq!(result.fired_rule_ids(), vec!["R1"]);
//! assert!(result.is_fraud());
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod patterns;
pub mod result;
pub mod validation;

// Re-export main types
pub use context::{
    ContextBuilder, ContextVariable, EvaluationContext, MlPrediction, TransactionFeatures,
};
pub use engine::{evaluate_condition, ConditionEvaluator, RuleEngine};
pub use error::{Result, RuntimeError};
pub use knowledge::{default_rules, KnowledgeBase, KnownPattern, KNOWLEDGE_BASE_VERSION};
pub use patterns::PatternDetector;
pub use result::{
    ConfidenceLevel, ContextSummary, DetectedPattern, EvaluationResult, FiredRule,
    ReasoningTrace, Recommendation, RiskLevel,
};
pub use validation::{validate_rules, RuleDiagnostic};
