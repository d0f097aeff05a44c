//! Engine assembly from rule files and configuration

mod common;

use common::*;
use fraudkb_sdk::{EngineConfig, InferenceEngineBuilder, MlPrediction, TransactionFeatures};
use std::fs;
use tempfile::TempDir;

const YAML_RULES: &str = r#"
- id: Y1
  name: Nominal Menengah
  condition: "amount > 1000 and not hour in [9, 10, 11]"
  action: increase_risk
  weight: 0.5
  description: Nominal menengah di luar jam kerja pagi
  priority: 1
"#;

#[test]
fn test_build_from_yaml_rule_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.yaml");
    fs::write(&path, YAML_RULES).unwrap();

    let engine = InferenceEngineBuilder::new().with_rule_file(&path).build();
    assert_eq!(engine.knowledge_base().get_rules().len(), 1);

    let features = TransactionFeatures::new().with_time(50400.0).with_amount(1500.0);
    let result = engine.infer(&features, &MlPrediction::new(0, 0.2));
    assert_eq!(result.fired_rule_ids(), vec!["Y1"]);
    assert_eq!(result.final_risk_score, 0.2 + 0.5 * (1.0 - 0.2));
    assert_eq!(result.final_prediction, 1);
}

#[test]
fn test_build_from_config_rule_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.yml");
    fs::write(&path, YAML_RULES).unwrap();

    let engine = InferenceEngineBuilder::from_config(EngineConfig::new().with_rule_file(&path))
        .build();
    assert_eq!(engine.knowledge_base().get_rules()[0].id, "Y1");
}

#[test]
fn test_missing_rule_file_uses_builtin_rules() {
    let dir = TempDir::new().unwrap();
    let engine = InferenceEngineBuilder::new()
        .with_rule_file(dir.path().join("missing.json"))
        .build();

    let s = scenario_d();
    let result = engine.infer(&s.features, &s.ml);
    assert_eq!(engine.knowledge_base().get_rules().len(), 5);
    assert_eq!(result.fired_rule_ids(), vec!["R1"]);
}

#[test]
fn test_unsupported_rule_file_uses_builtin_rules() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.txt");
    fs::write(&path, "amount > 1").unwrap();

    let engine = InferenceEngineBuilder::new().with_rule_file(&path).build();
    assert_eq!(engine.knowledge_base().get_rules().len(), 5);
}

#[test]
fn test_known_patterns_available() {
    let patterns = test_engine().knowledge_base().get_fraud_patterns();
    let names: Vec<&str> = patterns.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Transaksi Malam Nominal Besar",
            "Multiple Micro Transactions",
            "Anomali Fitur Ekstrim"
        ]
    );
}
