//! Shared helpers for the fraudkb demos

use anyhow::Result;
use fraudkb_sdk::{EngineConfig, InferenceRequest, MlPrediction, TransactionFeatures};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a fmt subscriber; `RUST_LOG` overrides the configured level
pub fn init_tracing(config: &EngineConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}

/// Labelled sample transactions covering the main decision paths
pub fn sample_transactions() -> Vec<(&'static str, InferenceRequest)> {
    vec![
        (
            "Transaksi malam dengan nominal besar",
            InferenceRequest::new(
                TransactionFeatures::new()
                    .with_time(7200.0)
                    .with_amount(3500.0)
                    .with_v(1, -1.2)
                    .with_v(2, 4.5)
                    .with_v(4, 3.8)
                    .with_v(14, -2.1),
                MlPrediction::new(1, 0.65).with_accuracy(0.9995),
            ),
        ),
        (
            "Belanja siang hari",
            InferenceRequest::new(
                TransactionFeatures::new().with_time(43200.0).with_amount(50.0),
                MlPrediction::new(0, 0.15).with_accuracy(0.9995),
            ),
        ),
        (
            "Transaksi mikro dini hari",
            InferenceRequest::new(
                TransactionFeatures::new().with_time(10800.0).with_amount(0.5),
                MlPrediction::new(0, 0.45).with_accuracy(0.9995),
            ),
        ),
        (
            "Nominal sangat tinggi",
            InferenceRequest::new(
                TransactionFeatures::new().with_time(36000.0).with_amount(8000.0),
                MlPrediction::new(1, 0.88).with_accuracy(0.9995),
            ),
        ),
    ]
}
