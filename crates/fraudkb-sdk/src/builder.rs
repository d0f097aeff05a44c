//! Builder pattern for InferenceEngine

use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::inference::InferenceEngine;
use fraudkb_core::Rule;
use fraudkb_repository::RepositoryConfig;
use fraudkb_runtime::KnowledgeBase;
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for InferenceEngine
///
/// Rule source precedence: in-memory rules, then an explicit rule file,
/// then `rule_file` from the [`EngineConfig`], then `fraud_rules.json`.
/// Whatever source is chosen, a load failure falls back to the built-in
/// rules.
///
/// # Example
///
/// ```rust,no_run
/// use fraudkb_sdk::InferenceEngineBuilder;
///
/// let engine = InferenceEngineBuilder::new()
///     .with_rule_file("config/fraud_rules.yaml")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct InferenceEngineBuilder {
    config: EngineConfig,
    rule_file: Option<PathBuf>,
    rules: Option<Vec<Rule>>,
    extra_rules: Vec<Rule>,
    clock: Option<Arc<dyn Clock>>,
}

impl InferenceEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded configuration
    pub fn from_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Load rules from a JSON or YAML file
    pub fn with_rule_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.rule_file = Some(path.into());
        self
    }

    /// Use this rule list instead of loading one
    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Append a rule after the loaded ones
    pub fn add_rule(mut self, rule: Rule) -> Self {
        self.extra_rules.push(rule);
        self
    }

    /// Clock for result timestamps (defaults to the system clock)
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    fn repository_config(&self) -> RepositoryConfig {
        if let Some(rules) = &self.rules {
            return RepositoryConfig::memory(rules.clone());
        }
        match self.rule_file.as_ref().or(self.config.rule_file.as_ref()) {
            Some(path) => RepositoryConfig::file(path),
            None => RepositoryConfig::default(),
        }
    }

    /// Build the engine
    pub fn build(self) -> InferenceEngine {
        let mut kb = KnowledgeBase::from_config(&self.repository_config());
        for rule in self.extra_rules {
            kb.add_rule(rule);
        }

        tracing::info!(
            "Inference engine built with {} rules",
            kb.get_rules().len()
        );

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        InferenceEngine::with_clock(kb, clock)
    }
}
