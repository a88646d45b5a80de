//! Formatting utilities used for CLI and export outputs.

/// Rounded hours, one decimal (0.1h granularity).
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

/// `$1,234.50` style amount. Only the display is rounded.
pub fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{dec_part}")
}
