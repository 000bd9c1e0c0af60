//! Human-readable file sizes.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats `bytes` with 1024-based units, at most two decimals, trailing
/// zeros trimmed (`1536` → `"1.5 KB"`). Values past TB stay in TB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}
