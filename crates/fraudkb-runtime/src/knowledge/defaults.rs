//! Built-in rule set, used whenever no rule source can be loaded

use fraudkb_core::{Rule, RuleAction};

pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "R1",
            "Nominal Sangat Tinggi",
            "amount > 7500",
            RuleAction::IncreaseRisk,
            0.2,
        )
        .with_description("Transaksi dengan nominal sangat tinggi")
        .with_priority(3),
        Rule::new(
            "R2",
            "Waktu Tidak Biasa",
            "hour in [0, 1, 2, 3, 4] and amount > 2000",
            RuleAction::IncreaseRisk,
            0.15,
        )
        .with_description("Transaksi di jam berisiko tinggi dengan nominal besar")
        .with_priority(2),
        Rule::new(
            "R3",
            "Micro Transaction",
            "amount < 0.5 and prob > 0.5",
            RuleAction::IncreaseRisk,
            0.1,
        )
        .with_description("Transaksi mikro dengan probabilitas mencurigakan")
        .with_priority(1),
        Rule::new(
            "R4",
            "Anomali Fitur Ekstrim",
            "extreme_features > 5",
            RuleAction::IncreaseRisk,
            0.2,
        )
        .with_description("Banyak fitur menunjukkan nilai ekstrim")
        .with_priority(3),
        Rule::new(
            "R5",
            "Kombinasi Waktu dan Nominal",
            "hour in [0, 1, 2, 3, 4] and amount > 5000 and prob > 0.4",
            RuleAction::IncreaseRisk,
            0.25,
        )
        .with_description("Kombinasi berbahaya: waktu malam + nominal tinggi + ML prob tinggi")
        .with_priority(4),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_parse_and_are_ordered() {
        let rules = default_rules();
        let ids: Vec<&str> = rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["R1", "R2", "R3", "R4", "R5"]);

        for rule in &rules {
            assert!(rule.parse_condition().is_ok(), "{} failed to parse", rule.id);
            assert!(rule.has_valid_weight());
            assert_eq!(rule.action, RuleAction::IncreaseRisk);
        }
    }
}
