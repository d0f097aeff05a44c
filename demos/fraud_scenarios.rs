//! Score the sample transactions and print their explanations
//!
//! Run with: cargo run --example fraud_scenarios
//!
//! Rules come from `FRAUDKB_RULE_FILE` (or `config/fraudkb.*`), e.g.
//! `FRAUDKB_RULE_FILE=demos/rules/fraud_rules.yaml`. Without one the engine
//! looks for `fraud_rules.json` and falls back to the built-in rules.

use anyhow::Result;
use fraudkb_demos::{init_tracing, sample_transactions};
use fraudkb_sdk::{validate_rules, EngineConfig, InferenceEngineBuilder};

fn main() -> Result<()> {
    let config = EngineConfig::load()?;
    init_tracing(&config)?;

    let engine = InferenceEngineBuilder::from_config(config).build();

    let diagnostics = validate_rules(engine.knowledge_base().get_rules());
    for diagnostic in &diagnostics {
        tracing::warn!("Rule check: {}", diagnostic);
    }

    for (label, request) in sample_transactions() {
        println!("\n### {}", label);
        let result = engine.infer_request(&request);
        println!("{}", engine.explain(&result));
    }

    if let Some((label, request)) = sample_transactions().into_iter().next() {
        println!("\n### JSON: {}", label);
        let result = engine.infer_request(&request);
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
