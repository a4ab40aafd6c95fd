//! Shared formatting utilities for the UI layer.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a "YYYY-MM-DD" date string as "Jan 20, 2026".
///
/// Falls back to the input if parsing fails.
pub fn format_date_human(date_str: &str) -> String {
    // `get` returns None for short input or slices off a char boundary, so
    // non-ASCII strings fall through instead of panicking.
    let (Some(year), Some(month_str), Some(day_str)) =
        (date_str.get(..4), date_str.get(5..7), date_str.get(8..10))
    else {
        return date_str.to_string();
    };
    let month: usize = match month_str.parse() {
        Ok(m) if (1..=12).contains(&m) => m,
        _ => return date_str.to_string(),
    };
    let day: u32 = match day_str.parse() {
        Ok(d) => d,
        Err(_) => return date_str.to_string(),
    };

    format!("{} {}, {}", MONTH_NAMES[month - 1], day, year)
}

/// Format a claim amount in rupees with Indian digit grouping,
/// e.g. `1249.5` becomes "₹1,249.50" and `1250000.0` becomes "₹12,50,000.00".
pub fn format_rupees(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = format!("{:.2}", amount.abs());
    let (whole, frac) = rounded.split_once('.').unwrap_or((&rounded, "00"));

    // Indian grouping: last three digits, then groups of two.
    let digits: Vec<char> = whole.chars().collect();
    let mut grouped = String::new();
    let len = digits.len();
    for (i, c) in digits.iter().enumerate() {
        grouped.push(*c);
        let remaining = len - i - 1;
        if remaining > 0 && (remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0)) {
            grouped.push(',');
        }
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}₹{grouped}.{frac}")
}

/// Initials for an avatar fallback: first letters of the first two words.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|w| w.chars().next())
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn date_formats_human() {
        assert_eq!(format_date_human("2026-03-14"), "Mar 14, 2026");
        assert_eq!(format_date_human("2026-12-01"), "Dec 1, 2026");
    }

    #[test]
    fn bad_date_passes_through() {
        assert_eq!(format_date_human("soon"), "soon");
        assert_eq!(format_date_human("2026-13-01"), "2026-13-01");
    }

    #[test]
    fn multibyte_date_passes_through() {
        // Devanagari digits are multi-byte; slicing must not split a char.
        assert_eq!(format_date_human("२०२६-०३-०३"), "२०२६-०३-०३");
        assert_eq!(format_date_human("तारीख़ अनुपलब्ध"), "तारीख़ अनुपलब्ध");
    }

    #[test]
    fn rupees_small_amounts() {
        assert_eq!(format_rupees(500.0), "₹500.00");
        assert_eq!(format_rupees(1249.5), "₹1,249.50");
    }

    #[test]
    fn rupees_indian_grouping() {
        assert_eq!(format_rupees(1_250_000.0), "₹12,50,000.00");
        assert_eq!(format_rupees(100_000.0), "₹1,00,000.00");
        assert_eq!(format_rupees(12_345_678.9), "₹1,23,45,678.90");
    }

    #[test]
    fn initials_from_name() {
        assert_eq!(initials("Asha Patil"), "AP");
        assert_eq!(initials("kavya"), "K");
        assert_eq!(initials(""), "");
    }
}
