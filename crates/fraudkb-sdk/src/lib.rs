//! fraudkb SDK
//!
//! High-level API for scoring card transactions: an ML fraud probability is
//! adjusted by the knowledge base rules, checked against known fraud
//! patterns and explained in a human-readable report.
//!
//! ```rust
//! use fraudkb_sdk::{InferenceEngineBuilder, MlPrediction, TransactionFeatures};
//!
//! let engine = InferenceEngineBuilder::new()
//!     .with_rules(fraudkb_sdk::default_rules())
//!     .build();
//!
//! let features = TransactionFeatures::new().with_time(43200.0).with_amount(50.0);
//! let result = engine.infer(&features, &MlPrediction::new(0, 0.15));
//!
//! assert!(!result.is_fraud());
//! println!("{}", engine.explain(&result));
//! ```

pub mod builder;
pub mod clock;
pub mod config;
pub mod error;
pub mod inference;

// Re-export main types
pub use builder::InferenceEngineBuilder;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::EngineConfig;
pub use error::{Result, SdkError};
pub use inference::{
    create_fraud_detection_system, explain, InferenceEngine, InferenceRequest, InferenceResult,
    INFERENCE_METHOD,
};

// Re-export commonly used types from dependencies
pub use fraudkb_core::{Rule, RuleAction, Value};
pub use fraudkb_runtime::{
    default_rules, ConfidenceLevel, DetectedPattern, EvaluationResult, FiredRule, KnowledgeBase,
    MlPrediction, Recommendation, RiskLevel, RuleDiagnostic, TransactionFeatures,
    KNOWLEDGE_BASE_VERSION,
};
pub use fraudkb_runtime::validation::validate_rules;
