//! End-to-end inference scenarios

mod common;

use common::*;
use fraudkb_sdk::{
    ConfidenceLevel, InferenceRequest, Recommendation, Rule, RuleAction, SdkError,
    INFERENCE_METHOD,
};

#[test]
fn test_scenario_a_night_transaction() {
    let s = scenario_a();
    let result = test_engine().infer(&s.features, &s.ml);

    assert_eq!(result.fired_rule_ids(), vec!["R2"]);
    assert_eq!(result.final_risk_score, 0.65 + 0.15 * (1.0 - 0.65));
    assert!(result.final_risk_score > 0.65);
    assert_eq!(result.final_prediction, 1);
    assert_eq!(result.confidence_level, ConfidenceLevel::Medium);
    assert_eq!(result.recommendation, Recommendation::Hold.message());
    assert!(result.detected_patterns.is_empty());
    assert_eq!(result.context_summary.waktu_transaksi, "2:00");
    assert_eq!(result.context_summary.kategori_waktu, "Berisiko Tinggi");
    assert_eq!(result.context_summary.fitur_ekstrim, 2);
}

#[test]
fn test_scenario_b_legitimate() {
    let s = scenario_b();
    let result = test_engine().infer(&s.features, &s.ml);

    assert!(result.rules_fired.is_empty());
    assert!(result.detected_patterns.is_empty());
    assert!(result.reasoning_trace.is_empty());
    assert_eq!(result.final_risk_score, 0.15);
    assert_eq!(result.risk_adjustment, 0.0);
    assert_eq!(result.final_prediction, 0);
    assert_eq!(result.confidence_level, ConfidenceLevel::High);
    assert_eq!(result.recommendation, Recommendation::Approve.message());
}

#[test]
fn test_scenario_c_micro_boundary() {
    let s = scenario_c();
    let result = test_engine().infer(&s.features, &s.ml);

    // amount == 0.5 is not below 0.5
    assert!(result.rules_fired.is_empty());
    assert!(result.detected_patterns.is_empty());
    assert_eq!(result.final_risk_score, 0.45);
    assert_eq!(result.final_prediction, 0);
    assert_eq!(result.confidence_level, ConfidenceLevel::Low);
    assert_eq!(result.recommendation, Recommendation::Proceed.message());
}

#[test]
fn test_scenario_d_high_amount() {
    let s = scenario_d();
    let result = test_engine().infer(&s.features, &s.ml);

    assert_eq!(result.fired_rule_ids(), vec!["R1"]);
    assert_eq!(result.final_risk_score, (0.88 + 0.2 * (1.0 - 0.88_f64)).min(1.0));
    assert!(result.final_risk_score > 0.88);
    assert_eq!(result.final_prediction, 1);
    assert_eq!(result.confidence_level, ConfidenceLevel::High);
    assert_eq!(result.recommendation, Recommendation::Reject.message());
    assert_eq!(result.context_summary.kategori_nominal, "Sangat Tinggi");
}

#[test]
fn test_metadata_attached() {
    let s = scenario_a();
    let result = test_engine().infer(&s.features, &s.ml);

    assert_eq!(result.inference_method, INFERENCE_METHOD);
    assert_eq!(result.knowledge_base_version, "1.0");
    assert_eq!(result.timestamp, fixed_time());
}

#[test]
fn test_inference_is_idempotent() {
    let engine = test_engine();
    for s in [scenario_a(), scenario_b(), scenario_c(), scenario_d()] {
        let first = engine.infer(&s.features, &s.ml);
        let second = engine.infer(&s.features, &s.ml);
        assert_eq!(first, second);
    }
}

#[test]
fn test_undefined_name_rule_does_not_block_later_rules() {
    let mut engine = test_engine();
    engine.add_rule(
        Rule::new("X1", "Velocity", "velocity > 3", RuleAction::IncreaseRisk, 0.3)
            .with_description("Kecepatan transaksi tinggi"),
    );
    engine.add_rule(
        Rule::new("X2", "ML Fraud", "ml_prediction == 1", RuleAction::FlagHighRisk, 0.0)
            .with_description("Model memprediksi penipuan"),
    );

    let s = scenario_d();
    let result = engine.infer(&s.features, &s.ml);

    assert_eq!(result.fired_rule_ids(), vec!["R1", "X2"]);
    assert!(result
        .reasoning_trace
        .contains(&"⚠ Error evaluasi aturan X1: name 'velocity' is not defined".to_string()));
}

#[test]
fn test_engine_clone_keeps_its_rules() {
    let original = test_engine();
    let mut extended = original.clone();
    extended.add_rule(Rule::new("F", "flag", "True", RuleAction::FlagHighRisk, 0.0));

    let s = scenario_b();
    assert!(original.infer(&s.features, &s.ml).rules_fired.is_empty());
    assert_eq!(extended.infer(&s.features, &s.ml).final_risk_score, 0.7);
}

#[test]
fn test_concurrent_inference_on_shared_engine() {
    let engine = test_engine();
    let expected = {
        let s = scenario_a();
        engine.infer(&s.features, &s.ml)
    };

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let s = scenario_a();
                for _ in 0..25 {
                    assert_eq!(engine.infer(&s.features, &s.ml), expected);
                }
            });
        }
    });
}

#[test]
fn test_request_from_json() {
    let request: InferenceRequest = serde_json::from_str(
        r#"{
            "features": {"Time": 36000, "Amount": 8000, "V1": -0.3},
            "ml_prediction": {"prediction": 1, "probability": 0.88, "accuracy": 0.999}
        }"#,
    )
    .unwrap();

    let result = test_engine().infer_request(&request);
    assert_eq!(result.fired_rule_ids(), vec!["R1"]);
}

#[test]
fn test_infer_json_scores_request() {
    let result = test_engine()
        .infer_json(
            r#"{
                "features": {"Time": 7200, "Amount": 3500},
                "ml_prediction": {"prediction": 1, "probability": 0.65}
            }"#,
        )
        .unwrap();

    assert_eq!(result.fired_rule_ids(), vec!["R2"]);
    assert_eq!(result.timestamp, fixed_time());
}

#[test]
fn test_infer_json_rejects_malformed_request() {
    let engine = test_engine();

    let err = engine.infer_json("{\"features\": {}").unwrap_err();
    assert!(matches!(err, SdkError::InvalidInput(_)));

    let err = engine
        .infer_json(r#"{"features": {"Amount": "besar"}, "ml_prediction": {"prediction": 0, "probability": 0.1}}"#)
        .unwrap_err();
    assert!(matches!(err, SdkError::InvalidInput(_)));

    let err = engine.infer_json(r#"{"features": {}}"#).unwrap_err();
    assert!(err.to_string().contains("ml_prediction"));
}

#[test]
fn test_result_serializes_flat() {
    let s = scenario_a();
    let result = test_engine().infer(&s.features, &s.ml);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["final_prediction"], 1);
    assert_eq!(json["confidence_level"], "SEDANG");
    assert_eq!(json["inference_method"], INFERENCE_METHOD);
    assert_eq!(json["knowledge_base_version"], "1.0");
    assert_eq!(json["timestamp"], "2024-01-15T10:00:00Z");
    assert!(json.get("evaluation").is_none());
}
