//! Forward-chaining rule engine

use super::evaluator::ConditionEvaluator;
use super::scoring;
use crate::context::{ContextBuilder, EvaluationContext, MlPrediction, TransactionFeatures};
use crate::error::{Result, RuntimeError};
use crate::knowledge::{fact_keys, KnowledgeBase};
use crate::patterns::PatternDetector;
use crate::result::{
    ConfidenceLevel, ContextSummary, EvaluationResult, FiredRule, ReasoningTrace, Recommendation,
};
use fraudkb_core::{Expression, ParseError, Rule};
use std::sync::Arc;

/// A rule's condition as parsed when the rule entered the engine
type CompiledCondition = std::result::Result<Expression, ParseError>;

/// Evaluates the knowledge base's rules against one transaction at a time
///
/// All per-call state (score, fired rules, trace) lives on the stack of
/// [`RuleEngine::evaluate`], so one engine can serve concurrent callers.
/// [`RuleEngine::add_rule`] copies the knowledge base if it is shared, which
/// leaves evaluations that hold the old snapshot untouched.
///
/// Conditions are parsed once, when the engine is built or a rule is added.
/// A condition that fails to parse is kept as its error and reported each
/// time the rule is evaluated.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    kb: Arc<KnowledgeBase>,
    conditions: Arc<Vec<CompiledCondition>>,
}

impl RuleEngine {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self::from_shared(Arc::new(kb))
    }

    pub fn from_shared(kb: Arc<KnowledgeBase>) -> Self {
        let conditions = kb.get_rules().iter().map(Rule::parse_condition).collect();
        Self {
            kb,
            conditions: Arc::new(conditions),
        }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn shared_knowledge_base(&self) -> Arc<KnowledgeBase> {
        Arc::clone(&self.kb)
    }

    /// Append a rule to this engine's knowledge base
    pub fn add_rule(&mut self, rule: Rule) {
        Arc::make_mut(&mut self.conditions).push(rule.parse_condition());
        Arc::make_mut(&mut self.kb).add_rule(rule);
    }

    /// Evaluate every rule in repository order and score the transaction
    pub fn evaluate(
        &self,
        features: &TransactionFeatures,
        prediction: &MlPrediction,
    ) -> EvaluationResult {
        let context = self.context_builder().build(features, prediction);

        let mut trace = ReasoningTrace::new();
        let mut rules_fired = Vec::new();
        let mut score = scoring::clamp_score(prediction.probability);

        for (rule, condition) in self.kb.get_rules().iter().zip(self.conditions.iter()) {
            match Self::check_rule(rule, condition, &context) {
                Ok(true) => {
                    score = scoring::apply_action(score, rule.action, rule.weight);
                    tracing::debug!("Rule {} fired, score now {:.4}", rule.id, score);
                    trace.rule_fired(rule);
                    rules_fired.push(FiredRule::from(rule));
                }
                Ok(false) => {
                    tracing::debug!("Rule {} did not match", rule.id);
                }
                Err(e) => {
                    tracing::warn!("Rule {} skipped: {}", rule.id, e);
                    trace.rule_failed(&rule.id, &e);
                }
            }
        }

        let final_risk_score = scoring::clamp_score(score);
        let final_prediction = scoring::decide(final_risk_score);
        let detected_patterns = PatternDetector::from_knowledge(&self.kb).detect(&context);
        let recommendation = Recommendation::for_decision(final_prediction, final_risk_score);

        tracing::debug!(
            "Evaluation done: {} rules fired, {} patterns, score {:.4}",
            rules_fired.len(),
            detected_patterns.len(),
            final_risk_score
        );

        EvaluationResult {
            final_prediction,
            final_risk_score,
            ml_probability: prediction.probability,
            risk_adjustment: final_risk_score - prediction.probability,
            confidence_level: ConfidenceLevel::from_score(final_risk_score),
            rules_fired,
            detected_patterns,
            reasoning_trace: trace.into_entries(),
            recommendation: recommendation.message().to_string(),
            context_summary: ContextSummary::from_context(&context),
        }
    }

    /// Whether the rule fires. A matching rule with an unusable weight is an error.
    fn check_rule(
        rule: &Rule,
        condition: &CompiledCondition,
        context: &EvaluationContext,
    ) -> Result<bool> {
        let condition = condition.as_ref().map_err(|e| RuntimeError::from(e.clone()))?;
        if !ConditionEvaluator::new(context).matches(condition)? {
            return Ok(false);
        }
        if !rule.has_valid_weight() {
            return Err(RuntimeError::InvalidRule {
                rule_id: rule.id.clone(),
                message: format!("weight {} is outside [0, 1]", rule.weight),
            });
        }
        Ok(true)
    }

    fn context_builder(&self) -> ContextBuilder {
        let defaults = ContextBuilder::default();
        match (
            self.kb
                .fact_field_number(fact_keys::V_FEATURE_THRESHOLDS, "extreme_high"),
            self.kb
                .fact_field_number(fact_keys::V_FEATURE_THRESHOLDS, "very_extreme"),
        ) {
            (Some(extreme), Some(very_extreme)) => defaults.with_thresholds(extreme, very_extreme),
            _ => defaults,
        }
    }
}
