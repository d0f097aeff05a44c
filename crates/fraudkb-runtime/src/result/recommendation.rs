//! Recommendation policy

use serde::{Deserialize, Serialize};
use std::fmt;

/// Action recommended to the operator for a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    /// Fraud, score > 0.85
    Reject,
    /// Fraud, score > 0.65
    Hold,
    /// Fraud, anything lower
    Flag,
    /// Legitimate, score > 0.4
    Proceed,
    /// Legitimate, anything lower
    Approve,
}

impl Recommendation {
    /// Map a final prediction and risk score onto a recommendation
    pub fn for_decision(prediction: u8, score: f64) -> Self {
        if prediction == 1 {
            if score > 0.85 {
                Recommendation::Reject
            } else if score > 0.65 {
                Recommendation::Hold
            } else {
                Recommendation::Flag
            }
        } else if score > 0.4 {
            Recommendation::Proceed
        } else {
            Recommendation::Approve
        }
    }

    /// Operator-facing text
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::Reject => {
                "TOLAK transaksi dan blokir kartu sementara. Hubungi pemegang kartu segera."
            }
            Recommendation::Hold => {
                "TAHAN transaksi untuk verifikasi manual. Minta konfirmasi OTP/PIN."
            }
            Recommendation::Flag => "TANDAI transaksi untuk monitoring lebih lanjut.",
            Recommendation::Proceed => "LANJUTKAN transaksi dengan monitoring tambahan.",
            Recommendation::Approve => {
                "SETUJUI transaksi - teridentifikasi sebagai transaksi sah."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
