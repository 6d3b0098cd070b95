use chrono::{DateTime, Utc};

/// Derives a URL-safe slug from a display name: trimmed, lowercased,
/// whitespace runs collapsed to single hyphens. Total and idempotent.
pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn slugify_trims_lowercases_and_hyphenates() {
        assert_eq!(slugify("  Red Apple "), "red-apple");
        assert_eq!(slugify("Basmati   Rice 5kg"), "basmati-rice-5kg");
        assert_eq!(slugify("Milk"), "milk");
    }

    #[test]
    fn slugify_is_idempotent() {
        let once = slugify("  Red Apple ");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn slugify_handles_empty_and_whitespace() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   \t "), "");
    }

    #[test]
    fn money_formats_two_decimals() {
        assert_eq!(format_money(30.5), "$30.50");
        assert_eq!(format_money(0.0), "$0.00");
    }

    #[test]
    fn date_formats_ymd() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 9, 12, 30, 0).unwrap();
        assert_eq!(format_date(&ts), "2025-03-09");
    }
}
