//! Number formatting and input coercion for the selection form.
//!
//! Currency output follows the id-ID convention: `Rp` prefix, dot as the
//! thousands separator, no decimals.

/// Insert a `.` every three digits from the right, skipping a leading sign.
fn group_triads(digits: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = digits.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push('.');
        }
        result.push(*c);
    }

    result.chars().rev().collect()
}

/// Format an amount as id-ID currency, rounded to whole rupiah.
///
/// # Examples
///
/// ```
/// assert_eq!(frontend::shared::format::format_currency(75000.0), "Rp 75.000");
/// ```
pub fn format_currency(amount: f64) -> String {
    format!("Rp {}", group_triads(&format!("{:.0}", amount)))
}

/// Digit grouping for the editable price field (`500000` → `"500.000"`).
pub fn format_thousands(value: i64) -> String {
    group_triads(&value.to_string())
}

/// Coerce a discount entry to a percentage in `[0, 100]`.
///
/// Non-numeric input becomes 0; out-of-range values saturate at the bound.
pub fn clamp_discount(input: &str) -> f64 {
    let value = input.trim().parse::<f64>().unwrap_or(0.0);
    value.clamp(0.0, 100.0)
}

/// Coerce a price entry to a non-negative integer by stripping everything
/// that is not a digit. No digits left means 0.
pub fn parse_price(input: &str) -> i64 {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(75000.0), "Rp 75.000");
        assert_eq!(format_currency(500000.0), "Rp 500.000");
        assert_eq!(format_currency(0.0), "Rp 0");
        assert_eq!(format_currency(1234567.0), "Rp 1.234.567");
        // rounds to whole rupiah
        assert_eq!(format_currency(999.5), "Rp 1.000");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(500), "500");
        assert_eq!(format_thousands(500000), "500.000");
        assert_eq!(format_thousands(1234567), "1.234.567");
    }

    #[test]
    fn test_clamp_discount_saturates() {
        assert_eq!(clamp_discount("15"), 15.0);
        assert_eq!(clamp_discount("12.5"), 12.5);
        assert_eq!(clamp_discount("-3"), 0.0);
        assert_eq!(clamp_discount("150"), 100.0);
    }

    #[test]
    fn test_clamp_discount_coerces_garbage_to_zero() {
        assert_eq!(clamp_discount(""), 0.0);
        assert_eq!(clamp_discount("abc"), 0.0);
        assert_eq!(clamp_discount("12%"), 0.0);
    }

    #[test]
    fn test_parse_price_strips_non_digits() {
        assert_eq!(parse_price("500000"), 500000);
        assert_eq!(parse_price("500.000"), 500000);
        assert_eq!(parse_price("Rp 1.234"), 1234);
        assert_eq!(parse_price("1a2b3"), 123);
    }

    #[test]
    fn test_parse_price_no_digits_is_zero() {
        assert_eq!(parse_price(""), 0);
        assert_eq!(parse_price("abc"), 0);
        assert_eq!(parse_price("-"), 0);
    }
}
