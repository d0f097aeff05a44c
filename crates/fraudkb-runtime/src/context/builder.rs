//! Context construction from raw inputs

use super::context::EvaluationContext;
use super::input::{MlPrediction, TransactionFeatures};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Derives an [`EvaluationContext`] from features and the ML prediction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextBuilder {
    extreme_threshold: f64,
    very_extreme_threshold: f64,
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self {
            extreme_threshold: 3.0,
            very_extreme_threshold: 5.0,
        }
    }
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the absolute-value thresholds for the extreme feature counts
    pub fn with_thresholds(mut self, extreme: f64, very_extreme: f64) -> Self {
        self.extreme_threshold = extreme;
        self.very_extreme_threshold = very_extreme;
        self
    }

    pub fn build(&self, features: &TransactionFeatures, prediction: &MlPrediction) -> EvaluationContext {
        let time_seconds = features.time();
        let v_features = features.v_features();

        let extreme_features = v_features
            .iter()
            .filter(|v| v.abs() > self.extreme_threshold)
            .count();
        let very_extreme_features = v_features
            .iter()
            .filter(|v| v.abs() > self.very_extreme_threshold)
            .count();

        EvaluationContext {
            hour: hour_of_day(time_seconds),
            amount: features.amount(),
            prob: prediction.probability,
            extreme_features,
            very_extreme_features,
            v_features,
            time_seconds,
            ml_prediction: prediction.prediction,
        }
    }
}

/// `floor((seconds / 3600) mod 24)`; non-finite input maps to hour 0
fn hour_of_day(seconds: f64) -> u32 {
    let hour = (seconds / SECONDS_PER_HOUR).rem_euclid(24.0).floor();
    if hour.is_finite() {
        (hour as u32).min(23)
    } else {
        0
    }
}
