//! Evaluation inputs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of PCA features (`V1`..`V28`)
pub const V_FEATURE_COUNT: usize = 28;

/// Raw transaction feature vector
///
/// Keys are `Time`, `Amount` and `V1`..`V28`. Absent keys read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionFeatures(HashMap<String, f64>);

impl TransactionFeatures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `Time` feature (seconds)
    pub fn with_time(mut self, seconds: f64) -> Self {
        self.set("Time", seconds);
        self
    }

    /// Set the `Amount` feature
    pub fn with_amount(mut self, amount: f64) -> Self {
        self.set("Amount", amount);
        self
    }

    /// Set feature `V{index}` (1-based)
    pub fn with_v(mut self, index: usize, value: f64) -> Self {
        self.set(format!("V{}", index), value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), value);
    }

    /// Feature value, zero when absent
    pub fn get(&self, key: &str) -> f64 {
        self.0.get(key).copied().unwrap_or(0.0)
    }

    pub fn time(&self) -> f64 {
        self.get("Time")
    }

    pub fn amount(&self) -> f64 {
        self.get("Amount")
    }

    /// `V1`..`V28` in order
    pub fn v_features(&self) -> [f64; V_FEATURE_COUNT] {
        let mut values = [0.0; V_FEATURE_COUNT];
        for (i, slot) in values.iter_mut().enumerate() {
            *slot = self.get(&format!("V{}", i + 1));
        }
        values
    }
}

impl From<HashMap<String, f64>> for TransactionFeatures {
    fn from(map: HashMap<String, f64>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for TransactionFeatures {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Output of the external ML model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MlPrediction {
    /// Predicted class, 0 (legitimate) or 1 (fraud)
    pub prediction: u8,

    /// Fraud probability in [0, 1]
    pub probability: f64,

    /// Model accuracy; informational, never used in scoring
    #[serde(default)]
    pub accuracy: f64,
}

impl MlPrediction {
    pub fn new(prediction: u8, probability: f64) -> Self {
        Self {
            prediction,
            probability,
            accuracy: 0.0,
        }
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy;
        self
    }
}
