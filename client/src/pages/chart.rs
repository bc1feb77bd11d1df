//! Number formatting and bar-chart geometry for the dashboards.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// Bar colors cycled by index.
pub const BAR_COLORS: [&str; 3] = ["#4CAF50", "#FF9800", "#F44336"];

pub fn bar_color(index: usize) -> &'static str {
    BAR_COLORS[index % BAR_COLORS.len()]
}

/// Width of each bar as a percentage of the largest value.
///
/// Negative values draw as empty bars; an all-zero series is all zeros.
#[allow(clippy::cast_precision_loss)]
pub fn bar_percentages(values: &[i64]) -> Vec<f64> {
    let max = values.iter().copied().max().unwrap_or(0).max(0);
    values
        .iter()
        .map(|&v| if max == 0 { 0.0 } else { v.max(0) as f64 * 100.0 / max as f64 })
        .collect()
}

/// Integer with comma thousands separators.
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Percentage with one decimal place, e.g. `87.5%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}
