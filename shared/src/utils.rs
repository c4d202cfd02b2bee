// Formatting helpers shared by the engine (CSV amounts) and the GUI (table cells).

/// en-US currency handling: `$` symbol, `,` thousands separator, `.` decimal point.
pub mod us_format {
    use anyhow::{anyhow, Result};
    use std::str::FromStr;

    /// Formats `value` as US dollars with two decimals, e.g. `-$1,234.50`.
    pub fn format_currency(value: f64) -> String {
        let fixed = format!("{:.2}", value.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        // "-0.00" is shown without a sign
        let negative = value.is_sign_negative() && fixed.bytes().any(|b| (b'1'..=b'9').contains(&b));
        format!(
            "{}${}.{}",
            if negative { "-" } else { "" },
            group_thousands(whole),
            cents
        )
    }

    fn group_thousands(digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        grouped
    }

    /// Parses amounts like "1234.5", "$1,234.50", "-$3.00" or "(3.00)".
    pub fn parse_amount(s: &str) -> Result<f64> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("Failed to parse amount: empty value"));
        }
        let (negative, body) = match trimmed.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
            Some(inner) => (true, inner.trim()),
            None => match trimmed.strip_prefix('-') {
                Some(rest) => (true, rest.trim()),
                None => (false, trimmed),
            },
        };
        let normalized: String = body
            .trim_start_matches('$')
            .chars()
            .filter(|c| *c != ',')
            .collect();

        let value = f64::from_str(&normalized)
            .map_err(|e| anyhow!("Failed to parse amount '{}': {}", s, e))?;
        // from_str also accepts "NaN" and "inf"
        if !value.is_finite() {
            return Err(anyhow!("Failed to parse amount '{}': not a finite number", s));
        }
        Ok(if negative { -value } else { value })
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_currency_simple() {
            assert_eq!(format_currency(10.0), "$10.00");
            assert_eq!(format_currency(0.5), "$0.50");
        }

        #[test]
        fn test_format_currency_thousands() {
            assert_eq!(format_currency(1234.5), "$1,234.50");
            assert_eq!(format_currency(600822115.84), "$600,822,115.84");
            assert_eq!(format_currency(100000.0), "$100,000.00");
        }

        #[test]
        fn test_format_currency_negative() {
            assert_eq!(format_currency(-1234.5), "-$1,234.50");
            assert_eq!(format_currency(-0.001), "$0.00");
        }

        #[test]
        fn test_parse_amount_variants() {
            assert_eq!(parse_amount("1234.5").unwrap(), 1234.5);
            assert_eq!(parse_amount("$1,234.50").unwrap(), 1234.5);
            assert_eq!(parse_amount(" -$3.00 ").unwrap(), -3.0);
            assert_eq!(parse_amount("(3.00)").unwrap(), -3.0);
        }

        #[test]
        fn test_parse_amount_invalid() {
            assert!(parse_amount("").is_err());
            assert!(parse_amount("abc").is_err());
            assert!(parse_amount("NaN").is_err());
            assert!(parse_amount("inf").is_err());
            assert!(parse_amount("-infinity").is_err());
            assert!(parse_amount("$1e400").is_err());
        }
    }
}
