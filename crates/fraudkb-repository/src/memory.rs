//! In-memory rule source

use fraudkb_core::Rule;

use crate::{traits::RuleSource, RepositoryResult};

/// Rule source backed by a rule list held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryRuleSource {
    rules: Vec<Rule>,
}

impl MemoryRuleSource {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl RuleSource for MemoryRuleSource {
    fn load_rules(&self) -> RepositoryResult<Vec<Rule>> {
        Ok(self.rules.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} rules)", self.rules.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraudkb_core::RuleAction;

    #[test]
    fn test_memory_source_returns_rules_in_order() {
        let source = MemoryRuleSource::new(vec![
            Rule::new("B", "b", "amount > 1", RuleAction::IncreaseRisk, 0.1),
            Rule::new("A", "a", "amount > 2", RuleAction::FlagHighRisk, 0.2),
        ]);

        let rules = source.load_rules().unwrap();
        let ids: Vec<&str> = rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(source.describe(), "memory (2 rules)");
    }
}
