//! Display formatting for summary image values.

/// Formats a GDP value rounded to whole units with comma thousands separators.
///
/// `None`, NaN and infinite values render as `N/A`.
pub fn format_gdp(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => {
            let rounded = format!("{:.0}", value.abs());
            let sign = if value.round() < 0.0 { "-" } else { "" };

            format!("{}{}", sign, group_thousands(&rounded))
        }
        _ => "N/A".to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
