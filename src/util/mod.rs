pub mod assets;
pub mod version;

/// Formats an integer with comma thousands separators, e.g. `1,234,567`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Dollar amount with thousands separators, e.g. `$13,680` or `-$1,000`.
pub fn format_dollars(value: i64) -> String {
    if value < 0 {
        format!("-${}", format_thousands(-value))
    } else {
        format!("${}", format_thousands(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(750000), "750,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-123120), "-123,120");
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(13680), "$13,680");
        assert_eq!(format_dollars(-1000), "-$1,000");
    }
}
