//! Explanation report

use fraudkb_runtime::EvaluationResult;

const RULE_WIDTH: usize = 70;

/// Render a result as a sectioned, human-readable report
///
/// Formatting only: every number shown is read from `result`.
pub fn explain(result: &EvaluationResult) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        "PENJELASAN HASIL DETEKSI PENIPUAN".to_string(),
        rule.clone(),
    ];

    let status = if result.is_fraud() {
        "FRAUD (PENIPUAN)"
    } else {
        "LEGITIMATE (SAH)"
    };
    lines.push(format!("\n🎯 HASIL PREDIKSI: {}", status));
    lines.push(format!("   Skor Risiko: {}", percent(result.final_risk_score)));
    lines.push(format!("   Tingkat Kepercayaan: {}", result.confidence_level));

    lines.push("\n📊 KONTEKS TRANSAKSI:".to_string());
    for (label, value) in result.context_summary.entries() {
        lines.push(format!("   • {}: {}", label, value));
    }

    lines.push("\n🤖 ANALISIS MACHINE LEARNING:".to_string());
    lines.push(format!("   • Probabilitas ML: {}", percent(result.ml_probability)));
    lines.push(format!(
        "   • Penyesuaian Risiko: {:+.2}%",
        result.risk_adjustment * 100.0
    ));

    if result.rules_fired.is_empty() {
        lines.push("\n📋 ATURAN YANG TERPICU: Tidak ada".to_string());
    } else {
        lines.push(format!(
            "\n📋 ATURAN YANG TERPICU ({} aturan):",
            result.rules_fired.len()
        ));
        for fired in &result.rules_fired {
            lines.push(format!("   • [{}] {}", fired.rule_id, fired.rule_name));
            lines.push(format!("     → {}", fired.description));
            lines.push(format!(
                "     → Bobot: {}, Aksi: {}",
                fired.weight, fired.action
            ));
        }
    }

    if result.detected_patterns.is_empty() {
        lines.push("\n✓ Tidak ada pola penipuan yang terdeteksi".to_string());
    } else {
        lines.push("\n⚠️  POLA PENIPUAN TERDETEKSI:".to_string());
        for pattern in &result.detected_patterns {
            lines.push(format!("   • {} [{}]", pattern.pattern, pattern.risk_level));
            lines.push(format!("     → {}", pattern.description));
        }
    }

    if !result.reasoning_trace.is_empty() {
        lines.push("\n🔍 JEJAK REASONING:".to_string());
        for entry in &result.reasoning_trace {
            lines.push(format!("   {}", entry));
        }
    }

    lines.push("\n💡 REKOMENDASI:".to_string());
    lines.push(format!("   {}", result.recommendation));

    lines.push(format!("\n{}", rule));
    lines.join("\n")
}

fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}
