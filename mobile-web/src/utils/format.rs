//! # Formatting Utilities
//!
//! Number formatting for the market and trade screens. For addresses and
//! avatars, use [`shared::utils::truncate_middle`] and [`shared::utils::initials`].

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));

    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    let integer_with_commas: String = result.chars().rev().collect();

    let sign = if value < 0.0 { "-" } else { "" };
    if decimal_part.is_empty() {
        format!("{sign}{integer_with_commas}")
    } else {
        format!("{sign}{integer_with_commas}.{decimal_part}")
    }
}

/// Format a USD price; sub-dollar prices keep more precision.
pub fn format_usd(price: f64) -> String {
    let decimals = if price.abs() < 1.0 { 4 } else { 2 };
    format!("${}", format_number(price, decimals))
}

/// Format percentage change with sign
pub fn format_percentage(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{:.2}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(-4321.5, 1), "-4,321.5");
        assert_eq!(format_number(999.0, 0), "999");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(67250.5), "$67,250.50");
        assert_eq!(format_usd(0.5432), "$0.5432");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(2.5), "+2.50%");
        assert_eq!(format_percentage(-0.75), "-0.75%");
    }
}
