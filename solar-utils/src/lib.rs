//! Shared utility functions for the solar report crates.

/// Number formatting used at the presentation boundary.
pub mod format {
    /// Render a value with exactly two decimal places, e.g. `4.5` -> `"4.50"`.
    pub fn fixed2(value: f64) -> String {
        format!("{:.2}", value)
    }

    /// Render an energy amount as `"{value:.2} kWh/m²"`.
    pub fn kwh_per_m2(value: f64) -> String {
        format!("{} kWh/m²", fixed2(value))
    }

    /// Format an amount as US currency prefixed with `$`.
    ///
    /// Only the integer part is kept and grouped with thousands separators;
    /// the fractional part is dropped without rounding, so `1234.99` becomes
    /// `"$1,234"`. Callers round beforehand if they need to.
    pub fn money(amount: f64) -> String {
        let text = amount.to_string();
        let integer = text.split('.').next().unwrap_or_default();
        let (sign, digits) = match integer.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", integer),
        };
        format!("${}{}", sign, group_thousands(digits))
    }

    fn group_thousands(digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        grouped
    }

}

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Parse a date string in "YYYYMMDD" format
    pub fn parse_date_compact(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y%m%d")?)
    }

    /// Normalize a collection date reported by the imagery service.
    ///
    /// "YYYY-MM-DD" and "YYYYMMDD" are rewritten as "YYYY-MM-DD"; anything
    /// else (e.g. "Spring 2012") is kept verbatim, trimmed.
    pub fn normalize_collect_date(raw: &str) -> String {
        let trimmed = raw.trim();
        parse_date(trimmed)
            .or_else(|_| parse_date_compact(trimmed))
            .map(|date| format_date(&date))
            .unwrap_or_else(|_| trimmed.to_string())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_normalize_collect_date() {
            assert_eq!(normalize_collect_date("2012-05-01"), "2012-05-01");
            assert_eq!(normalize_collect_date("20120501"), "2012-05-01");
            assert_eq!(normalize_collect_date(" Spring 2012 "), "Spring 2012");
            assert_eq!(normalize_collect_date(""), "");
        }
    }
}
