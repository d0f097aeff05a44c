//! Knowledge base

use super::defaults::default_rules;
use super::facts::{default_facts, fact_keys, KnownPattern};
use fraudkb_core::{Rule, Value};
use fraudkb_repository::{RepositoryConfig, RuleSource};
use std::collections::HashMap;

/// Version label reported with every inference
pub const KNOWLEDGE_BASE_VERSION: &str = "1.0";

/// Static facts and the ordered rule repository
///
/// Construction never fails: when the configured rule source cannot be
/// loaded the built-in rule set is used.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    facts: HashMap<String, Value>,
    rules: Vec<Rule>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::with_rules(default_rules())
    }
}

impl KnowledgeBase {
    /// Load rules from `fraud_rules.json` in the working directory, or fall
    /// back to the built-in set
    pub fn new() -> Self {
        Self::from_config(&RepositoryConfig::default())
    }

    /// Knowledge base with the built-in rule set, no I/O
    pub fn with_default_rules() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self {
            facts: default_facts(),
            rules,
        }
    }

    pub fn from_config(config: &RepositoryConfig) -> Self {
        match config.open() {
            Ok(source) => Self::from_source(source.as_ref()),
            Err(e) => {
                tracing::warn!("Invalid rule source configuration ({}), using built-in rules", e);
                Self::with_default_rules()
            }
        }
    }

    pub fn from_source(source: &dyn RuleSource) -> Self {
        match source.load_rules() {
            Ok(rules) => {
                tracing::info!("Loaded {} rules from {}", rules.len(), source.describe());
                Self::with_rules(rules)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load rules from {}: {}. Using built-in rules",
                    source.describe(),
                    e
                );
                Self::with_default_rules()
            }
        }
    }

    pub fn get_fact(&self, key: &str) -> Option<&Value> {
        self.facts.get(key)
    }

    /// Numeric fact, `None` when absent or not a number
    pub fn fact_number(&self, key: &str) -> Option<f64> {
        self.get_fact(key).and_then(Value::as_number)
    }

    /// Numeric field of an object-valued fact
    pub fn fact_field_number(&self, key: &str, field: &str) -> Option<f64> {
        self.get_fact(key)
            .and_then(Value::as_object)
            .and_then(|map| map.get(field))
            .and_then(Value::as_number)
    }

    pub fn facts(&self) -> &HashMap<String, Value> {
        &self.facts
    }

    /// Insert or replace a fact
    pub fn update_fact(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.facts.insert(key.into(), value.into());
    }

    pub fn get_rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Append a rule. Conditions are not checked here; a broken condition
    /// surfaces as a trace warning when the rule is evaluated.
    pub fn add_rule(&mut self, rule: Rule) {
        tracing::debug!("Adding rule {} ({})", rule.id, rule.name);
        self.rules.push(rule);
    }

    /// Known-pattern catalogue from the `fraud_patterns` fact
    pub fn get_fraud_patterns(&self) -> Vec<KnownPattern> {
        let Some(value) = self.get_fact(fact_keys::FRAUD_PATTERNS) else {
            return Vec::new();
        };

        serde_json::to_value(value)
            .and_then(serde_json::from_value)
            .unwrap_or_else(|e| {
                tracing::warn!("Malformed fraud_patterns fact: {}", e);
                Vec::new()
            })
    }

    pub fn version(&self) -> &'static str {
        KNOWLEDGE_BASE_VERSION
    }
}
