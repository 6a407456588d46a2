//! Human-readable byte size formatting for result summaries.

/// Unit labels, base 1024. Values at or above 1024 GB stay in GB.
const UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];

/// Formats a byte count in the largest unit that is ≤ the value.
///
/// Rounds to two decimal places and drops trailing zeros, so `1024` formats
/// as `"1 KB"` and `1536` as `"1.5 KB"`. Zero formats as `"0 Bytes"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exponent = 0;
    let mut scaled = bytes;
    while scaled >= 1024 && exponent < UNITS.len() - 1 {
        scaled /= 1024;
        exponent += 1;
    }

    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    // f64 Display drops trailing zeros (1.0 -> "1", 1.5 -> "1.5")
    format!("{} {}", rounded, UNITS[exponent])
}
