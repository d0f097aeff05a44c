//! Built-in fact catalogue

use crate::result::RiskLevel;
use fraudkb_core::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Well-known fact keys
pub mod fact_keys {
    pub const HIGH_RISK_HOURS: &str = "high_risk_hours";
    pub const SUSPICIOUS_AMOUNT_THRESHOLD: &str = "suspicious_amount_threshold";
    pub const VERY_HIGH_AMOUNT_THRESHOLD: &str = "very_high_amount_threshold";
    pub const MICRO_TRANSACTION_THRESHOLD: &str = "micro_transaction_threshold";
    pub const V_FEATURE_THRESHOLDS: &str = "v_feature_thresholds";
    pub const FRAUD_PATTERNS: &str = "fraud_patterns";
    pub const DATASET_STATS: &str = "dataset_stats";
}

/// Descriptor of a known fraud pattern from the fact catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownPattern {
    pub name: String,
    pub description: String,
    pub risk_level: RiskLevel,
}

impl KnownPattern {
    fn new(name: &str, description: &str, risk_level: RiskLevel) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            risk_level,
        }
    }

    fn to_value(&self) -> Value {
        let mut map = HashMap::new();
        map.insert("name".to_string(), Value::from(self.name.as_str()));
        map.insert("description".to_string(), Value::from(self.description.as_str()));
        map.insert("risk_level".to_string(), Value::from(self.risk_level.as_str()));
        Value::Object(map)
    }
}

fn object(entries: &[(&str, f64)]) -> Value {
    Value::Object(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), Value::Number(*v)))
            .collect(),
    )
}

/// Facts every knowledge base starts with
pub fn default_facts() -> HashMap<String, Value> {
    let known_patterns = [
        KnownPattern::new(
            "Transaksi Malam Nominal Besar",
            "Transaksi dengan nominal tinggi di jam tidak biasa",
            RiskLevel::High,
        ),
        KnownPattern::new(
            "Multiple Micro Transactions",
            "Transaksi mikro yang sering digunakan untuk testing kartu curian",
            RiskLevel::Medium,
        ),
        KnownPattern::new(
            "Anomali Fitur Ekstrim",
            "Fitur PCA menunjukkan nilai sangat tidak normal",
            RiskLevel::High,
        ),
    ];

    let mut facts = HashMap::new();
    facts.insert(
        fact_keys::HIGH_RISK_HOURS.to_string(),
        Value::Array([0, 1, 2, 3, 4, 5, 23].iter().map(|h| Value::from(*h as i64)).collect()),
    );
    facts.insert(
        fact_keys::SUSPICIOUS_AMOUNT_THRESHOLD.to_string(),
        Value::Number(2500.0),
    );
    facts.insert(
        fact_keys::VERY_HIGH_AMOUNT_THRESHOLD.to_string(),
        Value::Number(7500.0),
    );
    facts.insert(
        fact_keys::MICRO_TRANSACTION_THRESHOLD.to_string(),
        Value::Number(0.5),
    );
    facts.insert(
        fact_keys::V_FEATURE_THRESHOLDS.to_string(),
        object(&[
            ("extreme_low", -3.0),
            ("extreme_high", 3.0),
            ("very_extreme", 5.0),
        ]),
    );
    facts.insert(
        fact_keys::FRAUD_PATTERNS.to_string(),
        Value::Array(known_patterns.iter().map(KnownPattern::to_value).collect()),
    );
    facts.insert(
        fact_keys::DATASET_STATS.to_string(),
        object(&[
            ("fraud_rate", 0.00172),
            ("avg_fraud_amount", 122.21),
            ("avg_legitimate_amount", 88.29),
        ]),
    );
    facts
}
