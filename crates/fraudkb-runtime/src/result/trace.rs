//! Reasoning trace accumulation
//!
//! One trace is created per evaluation call and handed back inside the
//! result, so nothing survives between calls.

use fraudkb_core::Rule;
use std::fmt::Display;

/// Ordered audit log for a single evaluation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReasoningTrace {
    entries: Vec<String>,
}

impl ReasoningTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rule whose condition held
    pub fn rule_fired(&mut self, rule: &Rule) {
        self.entries
            .push(format!("✓ Aturan {} terpicu: {}", rule.id, rule.description));
    }

    /// Record a rule that could not be evaluated
    pub fn rule_failed(&mut self, rule_id: &str, error: &dyn Display) {
        self.entries
            .push(format!("⚠ Error evaluasi aturan {}: {}", rule_id, error));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}
