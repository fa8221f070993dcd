/// Size formatting utilities — human-readable byte counts.
///
/// All internal sizes are `u64` bytes. Floating point is only used at the
/// display-formatting boundary, where render-item tooltips and rollup labels
/// are assembled.

/// Format a byte count into a human-readable string with appropriate unit.
///
/// Binary steps (1024) labelled with the short forms disk tools use. One
/// decimal through MB, two from GB up where the rounding error starts to
/// represent real gigabytes.
pub fn format_size(bytes: u64) -> String {
    const STEP: f64 = 1024.0;

    let mut value = bytes as f64;
    if value < STEP {
        return format!("{bytes} B");
    }
    for unit in ["KB", "MB", "GB", "TB"] {
        value /= STEP;
        if value < STEP || unit == "TB" {
            let decimals = if unit == "KB" || unit == "MB" { 1 } else { 2 };
            return format!("{value:.decimals$} {unit}");
        }
    }
    unreachable!("the TB arm above always returns");
}

/// Format an item count with thousand separators, for rollup labels.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
