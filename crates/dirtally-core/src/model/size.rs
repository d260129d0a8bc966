//! Size conversions and human-readable formatting.
//!
//! All internal sizes are `u64` bytes. Floating point only appears at the
//! reporting boundary.

/// Bytes per (binary) megabyte.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Convert a byte count to megabytes rounded to two decimal places.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    let mb = bytes as f64 / BYTES_PER_MB as f64;
    (mb * 100.0).round() / 100.0
}

/// Format a byte count with the largest binary unit that keeps the value >= 1.
///
/// Labels use the short forms (KB, MB, GB, TB) people expect from disk tools.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    // GB and above get an extra digit; those are the sizes people compare.
    if unit >= 2 {
        format!("{value:.2} {}", UNITS[unit])
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

/// Format a count with thousand separators.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_mb() {
        assert_eq!(bytes_to_mb(0), 0.0);
        assert_eq!(bytes_to_mb(BYTES_PER_MB), 1.0);
        assert_eq!(bytes_to_mb(1_048_576 + 2_097_152 + 524_288), 3.5);
        // 1 byte is far below a hundredth of a megabyte.
        assert_eq!(bytes_to_mb(1), 0.0);
        // 1.234 MB rounds down, 1.236 MB rounds up.
        assert_eq!(bytes_to_mb(1_293_942), 1.23);
        assert_eq!(bytes_to_mb(1_296_040), 1.24);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_576), "1.0 MB");
        assert_eq!(format_size(1_073_741_824), "1.00 GB");
        assert_eq!(format_size(1_099_511_627_776), "1.00 TB");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(123_456), "123,456");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
