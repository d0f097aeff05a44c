//! Basic usage example for fraudkb-core
//!
//! Run with: cargo run -p fraudkb-core --example basic_usage

use fraudkb_core::ast::{Rule, RuleAction};
use fraudkb_core::ConditionParser;

fn main() {
    println!("=== fraudkb Core Basic Usage Example ===\n");

    // Example 1: Parsing a condition
    println!("1. Parsing a condition:");
    let condition = "hour in [0,1,2,3,4] and amount > 2000";
    match ConditionParser::parse(condition) {
        Ok(expr) => {
            println!("   Source: {}", condition);
            println!("   Tree:   {}", expr);
            println!("   Names:  {:?}\n", expr.variables());
        }
        Err(e) => println!("   Error: {}\n", e),
    }

    // Example 2: Rejected syntax
    println!("2. Rejected syntax:");
    for condition in ["abs(amount) > 3", "amount.real > 3", "amount >"] {
        match ConditionParser::parse(condition) {
            Ok(expr) => println!("   unexpectedly parsed: {}", expr),
            Err(e) => println!("   {}", e),
        }
    }
    println!();

    // Example 3: Building a rule
    println!("3. Building a rule:");
    let rule = Rule::new(
        "R1",
        "Nominal Sangat Tinggi",
        "amount > 7500",
        RuleAction::IncreaseRisk,
        0.2,
    )
    .with_description("Transaksi dengan nominal sangat tinggi")
    .with_priority(3);

    println!("   {:#?}", rule);
}
