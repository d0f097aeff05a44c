//! Fixed fraud pattern heuristics
//!
//! These run on every evaluation regardless of the rule repository and only
//! feed the report; they never touch the risk score.

use crate::context::EvaluationContext;
use crate::knowledge::{fact_keys, KnowledgeBase};
use crate::result::{DetectedPattern, RiskLevel};

pub const NIGHT_HIGH_AMOUNT: &str = "Transaksi Malam Nominal Besar";
pub const SUSPICIOUS_MICRO_TRANSACTION: &str = "Micro Transaction Mencurigakan";
pub const EXTREME_FEATURE_ANOMALY: &str = "Anomali Fitur Ekstrim";

const NIGHT_AMOUNT_THRESHOLD: f64 = 5000.0;
const MICRO_PROBABILITY_THRESHOLD: f64 = 0.5;
const EXTREME_FEATURE_LIMIT: usize = 5;
const DEFAULT_MICRO_THRESHOLD: f64 = 0.5;

/// Runs the three heuristic checks in a fixed order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternDetector {
    micro_threshold: f64,
}

impl Default for PatternDetector {
    fn default() -> Self {
        Self {
            micro_threshold: DEFAULT_MICRO_THRESHOLD,
        }
    }
}

impl PatternDetector {
    pub fn new(micro_threshold: f64) -> Self {
        Self { micro_threshold }
    }

    /// Read the micro-transaction threshold from the knowledge base facts
    pub fn from_knowledge(kb: &KnowledgeBase) -> Self {
        Self::new(
            kb.fact_number(fact_keys::MICRO_TRANSACTION_THRESHOLD)
                .unwrap_or(DEFAULT_MICRO_THRESHOLD),
        )
    }

    pub fn detect(&self, ctx: &EvaluationContext) -> Vec<DetectedPattern> {
        let mut patterns = Vec::new();

        if ctx.is_night() && ctx.amount > NIGHT_AMOUNT_THRESHOLD {
            patterns.push(DetectedPattern {
                pattern: NIGHT_HIGH_AMOUNT.to_string(),
                risk_level: RiskLevel::High,
                description: format!("Transaksi $ {:.2} pada jam {}:00", ctx.amount, ctx.hour),
            });
        }

        if ctx.amount < self.micro_threshold && ctx.prob > MICRO_PROBABILITY_THRESHOLD {
            patterns.push(DetectedPattern {
                pattern: SUSPICIOUS_MICRO_TRANSACTION.to_string(),
                risk_level: RiskLevel::Medium,
                description: format!(
                    "Transaksi mikro $ {:.2} dengan prob {:.2}%",
                    ctx.amount,
                    ctx.prob * 100.0
                ),
            });
        }

        if ctx.extreme_features > EXTREME_FEATURE_LIMIT {
            patterns.push(DetectedPattern {
                pattern: EXTREME_FEATURE_ANOMALY.to_string(),
                risk_level: RiskLevel::High,
                description: format!("{} fitur menunjukkan nilai abnormal", ctx.extreme_features),
            });
        }

        patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::V_FEATURE_COUNT;

    fn ctx(hour: u32, amount: f64, prob: f64, extreme: usize) -> EvaluationContext {
        EvaluationContext {
            hour,
            amount,
            prob,
            extreme_features: extreme,
            very_extreme_features: 0,
            v_features: [0.0; V_FEATURE_COUNT],
            time_seconds: f64::from(hour) * 3600.0,
            ml_prediction: 0,
        }
    }

    #[test]
    fn test_no_patterns() {
        assert!(PatternDetector::default().detect(&ctx(12, 50.0, 0.15, 0)).is_empty());
    }

    #[test]
    fn test_night_high_amount() {
        let patterns = PatternDetector::default().detect(&ctx(1, 6000.0, 0.2, 0));
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].pattern, NIGHT_HIGH_AMOUNT);
        assert_eq!(patterns[0].risk_level, RiskLevel::High);
        assert_eq!(patterns[0].description, "Transaksi $ 6000.00 pada jam 1:00");

        // Boundaries are strict
        assert!(PatternDetector::default().detect(&ctx(1, 5000.0, 0.2, 0)).is_empty());
        assert!(PatternDetector::default().detect(&ctx(5, 6000.0, 0.2, 0)).is_empty());
    }

    #[test]
    fn test_micro_transaction() {
        let patterns = PatternDetector::default().detect(&ctx(12, 0.1, 0.8, 0));
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].risk_level, RiskLevel::Medium);
        assert_eq!(
            patterns[0].description,
            "Transaksi mikro $ 0.10 dengan prob 80.00%"
        );

        assert!(PatternDetector::default().detect(&ctx(12, 0.5, 0.8, 0)).is_empty());
        assert!(PatternDetector::default().detect(&ctx(12, 0.1, 0.5, 0)).is_empty());
        assert_eq!(PatternDetector::new(1.0).detect(&ctx(12, 0.5, 0.8, 0)).len(), 1);
    }

    #[test]
    fn test_all_three_in_order() {
        let patterns = PatternDetector::new(10000.0).detect(&ctx(2, 6000.0, 0.9, 7));
        let names: Vec<&str> = patterns.iter().map(|p| p.pattern.as_str()).collect();
        assert_eq!(
            names,
            vec![NIGHT_HIGH_AMOUNT, SUSPICIOUS_MICRO_TRANSACTION, EXTREME_FEATURE_ANOMALY]
        );
        assert_eq!(patterns[2].description, "7 fitur menunjukkan nilai abnormal");
    }

    #[test]
    fn test_threshold_from_facts() {
        let mut kb = KnowledgeBase::default();
        assert_eq!(PatternDetector::from_knowledge(&kb), PatternDetector::default());

        kb.update_fact(fact_keys::MICRO_TRANSACTION_THRESHOLD, 2.0);
        assert_eq!(PatternDetector::from_knowledge(&kb), PatternDetector::new(2.0));
    }
}
