//! Inference engine
//!
//! Wraps the rule engine, stamps each result with inference metadata and
//! renders the operator-facing explanation.

mod engine;
mod explanation;
mod types;

pub use engine::{create_fraud_detection_system, InferenceEngine};
pub use explanation::explain;
pub use types::{InferenceRequest, InferenceResult, INFERENCE_METHOD};
