//! Rule definitions
//!
//! A rule is stored exactly as it appears in a rule file: the condition is
//! kept as source text and only parsed when the rule is evaluated.

use super::expression::Expression;
use crate::condition::ConditionParser;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique rule ID
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Condition source over context variables (e.g. `amount > 7500`)
    pub condition: String,

    /// What to do with the risk score when the condition holds
    pub action: RuleAction,

    /// Weight in [0, 1]
    pub weight: f64,

    /// Explanation shown in the reasoning trace
    #[serde(default)]
    pub description: String,

    /// Informational only; evaluation follows storage order
    #[serde(default)]
    pub priority: i32,
}

/// Rule action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleAction {
    /// Blend the score toward 1.0 by the rule weight
    IncreaseRisk,
    /// Raise the score to at least the high-risk floor
    FlagHighRisk,
}

impl RuleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleAction::IncreaseRisk => "increase_risk",
            RuleAction::FlagHighRisk => "flag_high_risk",
        }
    }
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Rule {
    /// Create a new rule
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        condition: impl Into<String>,
        action: RuleAction,
        weight: f64,
    ) -> Self {
        Rule {
            id: id.into(),
            name: name.into(),
            condition: condition.into(),
            action,
            weight,
            description: String::new(),
            priority: 0,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Parse the condition source into an expression tree
    pub fn parse_condition(&self) -> Result<Expression, ParseError> {
        ConditionParser::parse(&self.condition)
    }

    /// Whether the weight is a finite number in [0, 1]
    pub fn has_valid_weight(&self) -> bool {
        self.weight.is_finite() && (0.0..=1.0).contains(&self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::operator::Operator;

    #[test]
    fn test_rule_creation() {
        let rule = Rule::new(
            "R1",
            "Nominal Sangat Tinggi",
            "amount > 7500",
            RuleAction::IncreaseRisk,
            0.2,
        )
        .with_description("Transaksi dengan nominal sangat tinggi")
        .with_priority(3);

        assert_eq!(rule.id, "R1");
        assert_eq!(rule.priority, 3);
        assert!(rule.has_valid_weight());
    }

    #[test]
    fn test_rule_parse_condition() {
        let rule = Rule::new("R1", "High", "amount > 7500", RuleAction::IncreaseRisk, 0.2);
        match rule.parse_condition().unwrap() {
            Expression::Binary { op, .. } => assert_eq!(op, Operator::Gt),
            other => panic!("Expected Binary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_rule_invalid_weight() {
        let mut rule = Rule::new("R9", "Bad", "amount > 1", RuleAction::IncreaseRisk, 1.5);
        assert!(!rule.has_valid_weight());
        rule.weight = f64::NAN;
        assert!(!rule.has_valid_weight());
        rule.weight = 0.0;
        assert!(rule.has_valid_weight());
    }

    #[test]
    fn test_rule_serde_json() {
        let json = r#"{
            "id": "R6",
            "name": "Floor",
            "condition": "very_extreme_features >= 2",
            "action": "flag_high_risk",
            "weight": 0.3,
            "description": "Beberapa fitur sangat ekstrim",
            "priority": 5
        }"#;

        let rule: Rule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.action, RuleAction::FlagHighRisk);
        assert_eq!(rule.priority, 5);

        let back = serde_json::to_string(&rule).unwrap();
        assert!(back.contains("\"flag_high_risk\""));
    }

    #[test]
    fn test_rule_unknown_action_rejected() {
        let json = r#"{"id":"X","name":"X","condition":"amount > 1","action":"block","weight":0.1}"#;
        assert!(serde_json::from_str::<Rule>(json).is_err());
    }
}
