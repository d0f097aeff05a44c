//! Static rule validation
//!
//! Checks a rule list without evaluating it against any transaction:
//!
//! - the condition parses
//! - every name in the condition is a context variable
//! - the weight is a finite number in `[0, 1]`
//! - rule IDs are unique
//!
//! # Integration
//!
//! Nothing calls this implicitly. [`KnowledgeBase::add_rule`] stays
//! unvalidated and broken rules keep failing at evaluation time; tooling
//! that wants to reject a rule file up front calls [`validate_rules`].
//!
//! # Examples
//!
//! ```rust
//! use fraudkb_core::{Rule, RuleAction};
//! use fraudkb_runtime::validation::validate_rules;
//!
//! let rules = vec![
//!     Rule::new("R1", "ok", "amount > 7500", RuleAction::IncreaseRisk, 0.2),
//!     Rule::new("R2", "typo", "amout > 7500", RuleAction::IncreaseRisk, 0.2),
//! ];
//!
//! let diagnostics = validate_rules(&rules);
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].rule_id, "R2");
//! ```
//!
//! [`KnowledgeBase::add_rule`]: crate::knowledge::KnowledgeBase::add_rule

use crate::context::ContextVariable;
use fraudkb_core::Rule;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Problem found in a rule definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleDiagnostic {
    pub rule_id: String,
    pub message: String,
}

impl RuleDiagnostic {
    fn new(rule_id: &str, message: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for RuleDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule_id, self.message)
    }
}

/// Validate a single rule
pub fn validate_rule(rule: &Rule) -> Vec<RuleDiagnostic> {
    let mut diagnostics = Vec::new();

    match rule.parse_condition() {
        Ok(expr) => {
            let mut reported = HashSet::new();
            for name in expr.variables() {
                if ContextVariable::from_name(name).is_none() && reported.insert(name) {
                    diagnostics.push(RuleDiagnostic::new(
                        &rule.id,
                        format!("name '{}' is not defined", name),
                    ));
                }
            }
        }
        Err(e) => diagnostics.push(RuleDiagnostic::new(&rule.id, e.to_string())),
    }

    if !rule.has_valid_weight() {
        diagnostics.push(RuleDiagnostic::new(
            &rule.id,
            format!("weight {} is outside [0, 1]", rule.weight),
        ));
    }

    diagnostics
}

/// Validate a rule list, including ID uniqueness
pub fn validate_rules(rules: &[Rule]) -> Vec<RuleDiagnostic> {
    let mut diagnostics = Vec::new();
    let mut seen = HashSet::new();

    for rule in rules {
        if !seen.insert(rule.id.as_str()) {
            diagnostics.push(RuleDiagnostic::new(&rule.id, "duplicate rule id"));
        }
        diagnostics.extend(validate_rule(rule));
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::default_rules;
    use fraudkb_core::RuleAction;

    #[test]
    fn test_default_rules_are_clean() {
        assert!(validate_rules(&default_rules()).is_empty());
    }

    #[test]
    fn test_unknown_names_reported_once() {
        let rule = Rule::new(
            "X",
            "x",
            "velocity > 3 or velocity < -3 or Amount > 1",
            RuleAction::IncreaseRisk,
            0.1,
        );
        let messages: Vec<String> = validate_rule(&rule).into_iter().map(|d| d.message).collect();
        assert_eq!(
            messages,
            vec![
                "name 'velocity' is not defined".to_string(),
                "name 'Amount' is not defined".to_string(),
            ]
        );
    }

    #[test]
    fn test_syntax_error() {
        let rule = Rule::new("S", "s", "amount >> 1", RuleAction::IncreaseRisk, 0.1);
        let diagnostics = validate_rule(&rule);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.starts_with("Failed to parse"));
    }

    #[test]
    fn test_weight_and_duplicates() {
        let rules = vec![
            Rule::new("D", "a", "amount > 1", RuleAction::IncreaseRisk, -0.1),
            Rule::new("D", "b", "amount > 2", RuleAction::FlagHighRisk, 0.5),
        ];
        let diagnostics = validate_rules(&rules);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].to_string(), "D: weight -0.1 is outside [0, 1]");
        assert_eq!(diagnostics[1].to_string(), "D: duplicate rule id");
    }
}
