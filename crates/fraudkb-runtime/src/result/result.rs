//! Evaluation result records

use crate::context::EvaluationContext;
use fraudkb_core::{Rule, RuleAction};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of evaluating one transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// 1 iff `final_risk_score > 0.5`
    pub final_prediction: u8,

    /// Adjusted risk score in [0, 1]
    pub final_risk_score: f64,

    /// ML probability as received
    pub ml_probability: f64,

    /// `final_risk_score - ml_probability`
    pub risk_adjustment: f64,

    pub confidence_level: ConfidenceLevel,

    /// Fired rules in repository order
    pub rules_fired: Vec<FiredRule>,

    pub detected_patterns: Vec<DetectedPattern>,

    pub reasoning_trace: Vec<String>,

    pub recommendation: String,

    pub context_summary: ContextSummary,
}

impl EvaluationResult {
    pub fn is_fraud(&self) -> bool {
        self.final_prediction == 1
    }

    /// IDs of the fired rules, in firing order
    pub fn fired_rule_ids(&self) -> Vec<&str> {
        self.rules_fired.iter().map(|r| r.rule_id.as_str()).collect()
    }

    pub fn has_pattern(&self, name: &str) -> bool {
        self.detected_patterns.iter().any(|p| p.pattern == name)
    }
}

/// Confidence label derived from the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    #[serde(rename = "TINGGI")]
    High,
    #[serde(rename = "SEDANG")]
    Medium,
    #[serde(rename = "RENDAH")]
    Low,
}

impl ConfidenceLevel {
    /// Bands overlap; the high band is checked first
    pub fn from_score(score: f64) -> Self {
        if score > 0.75 || score < 0.25 {
            ConfidenceLevel::High
        } else if score > 0.6 || score < 0.4 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "TINGGI",
            ConfidenceLevel::Medium => "SEDANG",
            ConfidenceLevel::Low => "RENDAH",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A rule whose condition held
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiredRule {
    pub rule_id: String,
    pub rule_name: String,
    pub description: String,
    pub weight: f64,
    pub action: RuleAction,
    pub priority: i32,
}

impl From<&Rule> for FiredRule {
    fn from(rule: &Rule) -> Self {
        Self {
            rule_id: rule.id.clone(),
            rule_name: rule.name.clone(),
            description: rule.description.clone(),
            weight: rule.weight,
            action: rule.action,
            priority: rule.priority,
        }
    }
}

/// Severity of a detected or known fraud pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    High,
    Medium,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "HIGH",
            RiskLevel::Medium => "MEDIUM",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A heuristic pattern match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedPattern {
    pub pattern: String,
    pub risk_level: RiskLevel,
    pub description: String,
}

/// Human-readable projection of the evaluation context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextSummary {
    pub waktu_transaksi: String,
    pub nominal: String,
    pub probabilitas_ml: String,
    pub fitur_ekstrim: usize,
    pub kategori_waktu: String,
    pub kategori_nominal: String,
}

impl ContextSummary {
    pub fn from_context(ctx: &EvaluationContext) -> Self {
        let kategori_waktu = if ctx.is_night() {
            "Berisiko Tinggi"
        } else {
            "Normal"
        };
        let kategori_nominal = if ctx.amount > 7500.0 {
            "Sangat Tinggi"
        } else if ctx.amount > 2500.0 {
            "Tinggi"
        } else {
            "Normal"
        };

        Self {
            waktu_transaksi: format!("{}:00", ctx.hour),
            nominal: format!("$ {:.2}", ctx.amount),
            probabilitas_ml: format!("{:.2}%", ctx.prob * 100.0),
            fitur_ekstrim: ctx.extreme_features,
            kategori_waktu: kategori_waktu.to_string(),
            kategori_nominal: kategori_nominal.to_string(),
        }
    }

    /// Label/value pairs in display order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Waktu Transaksi", self.waktu_transaksi.clone()),
            ("Nominal", self.nominal.clone()),
            ("Probabilitas ML", self.probabilitas_ml.clone()),
            ("Fitur Ekstrim", self.fitur_ekstrim.to_string()),
            ("Kategori Waktu", self.kategori_waktu.clone()),
            ("Kategori Nominal", self.kategori_nominal.clone()),
        ]
    }
}
