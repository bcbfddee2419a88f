//! Number Formatting
//!
//! en-US style grouping for prices and sizes.

/// Group the integer part with commas and keep between `min_fraction`
/// and `max_fraction` decimals (trailing zeros trimmed down to the minimum)
pub fn format_number(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut frac = frac_part.to_string();
    while frac.len() > min_fraction && frac.ends_with('0') {
        frac.pop();
    }

    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    let grouped = group_thousands(int_part);
    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Table price: "$250,000"
pub fn format_price(value: f64) -> String {
    format!("${}", format_number(value, 0, 3))
}

/// Two-decimal amount: "$1,234.50"
pub fn format_money(value: f64) -> String {
    format!("${}", format_number(value, 2, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_number(0.0, 0, 3), "0");
        assert_eq!(format_number(999.0, 0, 3), "999");
        assert_eq!(format_number(250000.0, 0, 3), "250,000");
        assert_eq!(format_number(1234567.891, 0, 3), "1,234,567.891");
        assert_eq!(format_number(-1500.0, 0, 3), "-1,500");
    }

    #[test]
    fn test_rounding_carries_into_integer() {
        assert_eq!(format_number(999.9999, 0, 3), "1,000");
        assert_eq!(format_number(-0.0001, 0, 3), "0");
    }

    #[test]
    fn test_money() {
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_price(350000.25), "$350,000.25");
    }
}
