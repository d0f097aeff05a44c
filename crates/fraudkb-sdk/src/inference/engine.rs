//! Inference engine

use super::explanation;
use super::types::{InferenceRequest, InferenceResult, INFERENCE_METHOD};
use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use fraudkb_core::Rule;
use fraudkb_runtime::{
    EvaluationResult, KnowledgeBase, MlPrediction, RuleEngine, TransactionFeatures,
};
use std::sync::Arc;

/// Runs forward-chaining inference and explains the outcome
///
/// `infer` takes `&self` and keeps no state between calls; clones share the
/// knowledge base snapshot and the clock.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    rule_engine: RuleEngine,
    clock: Arc<dyn Clock>,
}

impl InferenceEngine {
    /// Engine over `kb` using the system clock
    pub fn new(kb: KnowledgeBase) -> Self {
        Self::from_rule_engine(RuleEngine::new(kb), Arc::new(SystemClock))
    }

    pub fn with_clock(kb: KnowledgeBase, clock: Arc<dyn Clock>) -> Self {
        Self::from_rule_engine(RuleEngine::new(kb), clock)
    }

    pub fn from_rule_engine(rule_engine: RuleEngine, clock: Arc<dyn Clock>) -> Self {
        Self { rule_engine, clock }
    }

    pub fn rule_engine(&self) -> &RuleEngine {
        &self.rule_engine
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        self.rule_engine.knowledge_base()
    }

    /// Append a rule; clones made earlier keep their rule set
    pub fn add_rule(&mut self, rule: Rule) {
        self.rule_engine.add_rule(rule);
    }

    /// Score one transaction
    pub fn infer(
        &self,
        features: &TransactionFeatures,
        ml_prediction: &MlPrediction,
    ) -> InferenceResult {
        let evaluation = self.rule_engine.evaluate(features, ml_prediction);

        tracing::info!(
            "Inference done: prediction={} score={:.4} rules_fired={} patterns={}",
            evaluation.final_prediction,
            evaluation.final_risk_score,
            evaluation.rules_fired.len(),
            evaluation.detected_patterns.len()
        );

        InferenceResult {
            evaluation,
            inference_method: INFERENCE_METHOD.to_string(),
            knowledge_base_version: self.knowledge_base().version().to_string(),
            timestamp: self.clock.now(),
        }
    }

    pub fn infer_request(&self, request: &InferenceRequest) -> InferenceResult {
        self.infer(&request.features, &request.ml_prediction)
    }

    /// Decode a JSON [`InferenceRequest`] and score it
    pub fn infer_json(&self, json: &str) -> Result<InferenceResult> {
        let request: InferenceRequest = serde_json::from_str(json)?;
        Ok(self.infer_request(&request))
    }

    /// Human-readable report for a result
    pub fn explain(&self, result: &EvaluationResult) -> String {
        explanation::explain(result)
    }
}

/// Knowledge base from `fraud_rules.json` (or the built-in rules) wrapped in
/// an inference engine on the system clock
pub fn create_fraud_detection_system() -> InferenceEngine {
    let kb = KnowledgeBase::new();
    tracing::info!(
        "Fraud detection system ready: {} rules, knowledge base v{}",
        kb.get_rules().len(),
        kb.version()
    );
    InferenceEngine::new(kb)
}
