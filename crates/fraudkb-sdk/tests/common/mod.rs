//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use fraudkb_sdk::{
    default_rules, FixedClock, InferenceEngine, InferenceEngineBuilder, MlPrediction,
    TransactionFeatures,
};
use std::sync::Arc;

/// Timestamp every test engine reports
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
}

/// Engine with the built-in rules and a frozen clock, no file I/O
pub fn test_engine() -> InferenceEngine {
    InferenceEngineBuilder::new()
        .with_rules(default_rules())
        .with_clock(Arc::new(FixedClock::new(fixed_time())))
        .build()
}

/// A transaction plus the ML output that goes with it
pub struct Scenario {
    pub features: TransactionFeatures,
    pub ml: MlPrediction,
}

/// 02:00, $3500, two extreme features, ML says fraud at 0.65
pub fn scenario_a() -> Scenario {
    Scenario {
        features: TransactionFeatures::new()
            .with_time(7200.0)
            .with_amount(3500.0)
            .with_v(1, -1.2)
            .with_v(2, 4.5)
            .with_v(3, 0.8)
            .with_v(4, 3.8)
            .with_v(14, -2.1),
        ml: MlPrediction::new(1, 0.65).with_accuracy(0.9995),
    }
}

/// Midday $50 purchase, quiet features, ML says legitimate at 0.15
pub fn scenario_b() -> Scenario {
    let mut features = TransactionFeatures::new().with_time(43200.0).with_amount(50.0);
    for i in 1..=28 {
        features = features.with_v(i, if i % 2 == 0 { 0.1 } else { -0.1 });
    }
    Scenario {
        features,
        ml: MlPrediction::new(0, 0.15).with_accuracy(0.9995),
    }
}

/// 03:00, exactly at the micro-transaction threshold
pub fn scenario_c() -> Scenario {
    Scenario {
        features: TransactionFeatures::new().with_time(10800.0).with_amount(0.5),
        ml: MlPrediction::new(0, 0.45),
    }
}

/// 10:00, $8000, ML says fraud at 0.88
pub fn scenario_d() -> Scenario {
    Scenario {
        features: TransactionFeatures::new().with_time(36000.0).with_amount(8000.0),
        ml: MlPrediction::new(1, 0.88),
    }
}
