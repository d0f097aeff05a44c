//! Risk score arithmetic

use fraudkb_core::RuleAction;

/// Floor applied by `flag_high_risk`
pub const HIGH_RISK_FLOOR: f64 = 0.7;

/// Scores strictly above this are fraud
pub const DECISION_THRESHOLD: f64 = 0.5;

/// `min(1, score + weight * (1 - score))`
pub fn increase_risk(score: f64, weight: f64) -> f64 {
    (score + weight * (1.0 - score)).min(1.0)
}

/// `max(score, 0.7)`
pub fn flag_high_risk(score: f64) -> f64 {
    score.max(HIGH_RISK_FLOOR)
}

pub fn apply_action(score: f64, action: RuleAction, weight: f64) -> f64 {
    match action {
        RuleAction::IncreaseRisk => increase_risk(score, weight),
        RuleAction::FlagHighRisk => flag_high_risk(score),
    }
}

/// Clamp into [0, 1]; NaN and infinities become 0
pub fn clamp_score(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

pub fn decide(score: f64) -> u8 {
    u8::from(score > DECISION_THRESHOLD)
}
