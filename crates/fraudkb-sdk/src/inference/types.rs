//! Inference request and result types

use chrono::{DateTime, Utc};
use fraudkb_runtime::{EvaluationResult, MlPrediction, TransactionFeatures};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Label for the reasoning strategy, reported with every result
pub const INFERENCE_METHOD: &str = "Forward Chaining dengan Rule-Based Reasoning";

/// One transaction to score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub features: TransactionFeatures,
    pub ml_prediction: MlPrediction,
}

impl InferenceRequest {
    pub fn new(features: TransactionFeatures, ml_prediction: MlPrediction) -> Self {
        Self {
            features,
            ml_prediction,
        }
    }
}

/// Evaluation result plus inference metadata
///
/// Serializes as one flat record; dereferences to the [`EvaluationResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    #[serde(flatten)]
    pub evaluation: EvaluationResult,

    pub inference_method: String,

    pub knowledge_base_version: String,

    pub timestamp: DateTime<Utc>,
}

impl Deref for InferenceResult {
    type Target = EvaluationResult;

    fn deref(&self) -> &Self::Target {
        &self.evaluation
    }
}
