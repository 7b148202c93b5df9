//! Display formatting shared by text views and exported documents.

/// Group the integer part of an already-formatted unsigned number with commas.
fn group_thousands(digits: &str) -> String {
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

fn format_grouped(value: f64, decimals: usize) -> String {
    let body = format!("{:.*}", decimals, value.abs());
    // -0.004 rounds to "0.00" and must not print as "-0.00".
    let is_zero = body.chars().all(|c| c == '0' || c == '.');
    let sign = if value.is_sign_negative() && !is_zero {
        "-"
    } else {
        ""
    };
    format!("{sign}{}", group_thousands(&body))
}

/// `1234567.891` → `"1,234,567.89"`.
#[must_use]
pub fn format_amount(value: f64) -> String {
    format_grouped(value, 2)
}

/// `1234567.891` → `"1,234,568"`.
#[must_use]
pub fn format_amount_whole(value: f64) -> String {
    format_grouped(value, 0)
}

/// Symbol-prefixed amount, e.g. `"₹2,500.00"` or `"₹-500.00"`.
#[must_use]
pub fn format_currency(symbol: &str, value: f64) -> String {
    format!("{symbol}{}", format_amount(value))
}

/// Gain/loss with a direction marker: `"▲ ₹5,000.00"`, `"▼ ₹5,000.00"`, `"₹0.00"`.
#[must_use]
pub fn format_gain_loss(symbol: &str, value: f64) -> String {
    if value > 0.0 {
        format!("▲ {}", format_currency(symbol, value))
    } else if value < 0.0 {
        format!("▼ {}", format_currency(symbol, value.abs()))
    } else {
        format_currency(symbol, 0.0)
    }
}

/// `12.3456` → `"12.35%"`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

/// First `max` characters of `text` (not bytes).
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-5000.0), "-5,000.00");
        assert_eq!(format_amount_whole(50000.0), "50,000");
        assert_eq!(format_amount_whole(123.4), "123");
    }

    #[test]
    fn negative_zero_has_no_sign() {
        assert_eq!(format_amount(-0.001), "0.00");
        assert_eq!(format_amount(-0.0), "0.00");
    }

    #[test]
    fn gain_loss_markers() {
        assert_eq!(format_gain_loss("₹", 5000.0), "▲ ₹5,000.00");
        assert_eq!(format_gain_loss("₹", -5000.0), "▼ ₹5,000.00");
        assert_eq!(format_gain_loss("₹", 0.0), "₹0.00");
    }

    #[test]
    fn truncates_by_characters() {
        assert_eq!(
            truncate_chars("Reliance Industries Limited Co", 25),
            "Reliance Industries Limit"
        );
        assert_eq!(truncate_chars("₹₹₹", 2), "₹₹");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
