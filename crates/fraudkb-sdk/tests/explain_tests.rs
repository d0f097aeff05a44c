//! Explanation report layout

mod common;

use common::*;

#[test]
fn test_explain_fraud_report() {
    let engine = test_engine();
    let s = scenario_a();
    let result = engine.infer(&s.features, &s.ml);
    let report = engine.explain(&result);

    let rule = "=".repeat(70);
    assert!(report.starts_with(&format!("{}\nPENJELASAN HASIL DETEKSI PENIPUAN\n{}", rule, rule)));
    assert!(report.ends_with(&rule));
    assert!(report.contains("🎯 HASIL PREDIKSI: FRAUD (PENIPUAN)"));
    assert!(report.contains("   Skor Risiko: 70.25%"));
    assert!(report.contains("   Tingkat Kepercayaan: SEDANG"));
    assert!(report.contains("   • Waktu Transaksi: 2:00"));
    assert!(report.contains("   • Nominal: $ 3500.00"));
    assert!(report.contains("   • Probabilitas ML: 65.00%"));
    assert!(report.contains("   • Penyesuaian Risiko: +5.25%"));
    assert!(report.contains("📋 ATURAN YANG TERPICU (1 aturan):"));
    assert!(report.contains("   • [R2] Waktu Tidak Biasa"));
    assert!(report.contains("     → Bobot: 0.15, Aksi: increase_risk"));
    assert!(report.contains("✓ Tidak ada pola penipuan yang terdeteksi"));
    assert!(report.contains("🔍 JEJAK REASONING:"));
    assert!(report.contains(
        "   ✓ Aturan R2 terpicu: Transaksi di jam berisiko tinggi dengan nominal besar"
    ));
    assert!(report.contains("💡 REKOMENDASI:\n   TAHAN transaksi"));
}

#[test]
fn test_explain_legitimate_report() {
    let engine = test_engine();
    let s = scenario_b();
    let report = engine.explain(&engine.infer(&s.features, &s.ml));

    assert!(report.contains("🎯 HASIL PREDIKSI: LEGITIMATE (SAH)"));
    assert!(report.contains("📋 ATURAN YANG TERPICU: Tidak ada"));
    assert!(report.contains("   • Penyesuaian Risiko: +0.00%"));
    assert!(!report.contains("JEJAK REASONING"));
    assert!(report.contains("SETUJUI transaksi"));
}

#[test]
fn test_explain_lists_patterns() {
    let engine = test_engine();
    let mut features = fraudkb_sdk::TransactionFeatures::new()
        .with_time(3600.0)
        .with_amount(9000.0);
    for i in 1..=7 {
        features = features.with_v(i, 4.0);
    }
    let result = engine.infer(&features, &fraudkb_sdk::MlPrediction::new(1, 0.7));
    let report = engine.explain(&result);

    assert!(report.contains("⚠️  POLA PENIPUAN TERDETEKSI:"));
    assert!(report.contains("   • Transaksi Malam Nominal Besar [HIGH]"));
    assert!(report.contains("     → Transaksi $ 9000.00 pada jam 1:00"));
    assert!(report.contains("   • Anomali Fitur Ekstrim [HIGH]"));
    assert!(report.contains("     → 7 fitur menunjukkan nilai abnormal"));
}

#[test]
fn test_explain_does_not_change_result() {
    let engine = test_engine();
    let s = scenario_d();
    let result = engine.infer(&s.features, &s.ml);
    let before = result.clone();

    let first = engine.explain(&result);
    let second = fraudkb_sdk::explain(&result);
    assert_eq!(first, second);
    assert_eq!(result, before);
}
