//! Per-transaction evaluation context

use super::input::V_FEATURE_COUNT;
use fraudkb_core::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hours 0..=4 count as night time
pub fn is_night_hour(hour: u32) -> bool {
    hour <= 4
}

/// Names a condition may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextVariable {
    Hour,
    Amount,
    Prob,
    ExtremeFeatures,
    VeryExtremeFeatures,
    MlPrediction,
}

impl ContextVariable {
    pub const ALL: [ContextVariable; 6] = [
        ContextVariable::Hour,
        ContextVariable::Amount,
        ContextVariable::Prob,
        ContextVariable::ExtremeFeatures,
        ContextVariable::VeryExtremeFeatures,
        ContextVariable::MlPrediction,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ContextVariable::Hour => "hour",
            ContextVariable::Amount => "amount",
            ContextVariable::Prob => "prob",
            ContextVariable::ExtremeFeatures => "extreme_features",
            ContextVariable::VeryExtremeFeatures => "very_extreme_features",
            ContextVariable::MlPrediction => "ml_prediction",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.name() == name)
    }
}

impl fmt::Display for ContextVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only view of one transaction, derived by the context builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationContext {
    /// Hour of day, 0..=23
    pub hour: u32,
    pub amount: f64,
    /// ML fraud probability
    pub prob: f64,
    /// Count of V-features with |v| above the extreme threshold
    pub extreme_features: usize,
    /// Count of V-features with |v| above the very-extreme threshold
    pub very_extreme_features: usize,
    pub v_features: [f64; V_FEATURE_COUNT],
    pub time_seconds: f64,
    /// ML predicted class
    pub ml_prediction: u8,
}

impl EvaluationContext {
    /// Value of a context variable
    pub fn get(&self, variable: ContextVariable) -> Value {
        match variable {
            ContextVariable::Hour => Value::Number(f64::from(self.hour)),
            ContextVariable::Amount => Value::Number(self.amount),
            ContextVariable::Prob => Value::Number(self.prob),
            ContextVariable::ExtremeFeatures => Value::from(self.extreme_features),
            ContextVariable::VeryExtremeFeatures => Value::from(self.very_extreme_features),
            ContextVariable::MlPrediction => Value::Number(f64::from(self.ml_prediction)),
        }
    }

    /// Resolve a condition name; `None` for anything outside the fixed variable set
    pub fn lookup(&self, name: &str) -> Option<Value> {
        ContextVariable::from_name(name).map(|v| self.get(v))
    }

    pub fn is_night(&self) -> bool {
        is_night_hour(self.hour)
    }
}
