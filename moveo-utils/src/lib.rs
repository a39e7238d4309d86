//! Shared utility functions for the Moveo dashboard crates.

/// pt-BR number formatting.
///
/// The report is read by a Brazilian audience, so every number shown on the
/// dashboard (and printed by the CLI) groups thousands with `.` and uses `,`
/// as the decimal separator.
pub mod format {
    /// Thousands separator for pt-BR ("29.918").
    pub const GROUP_SEPARATOR: char = '.';

    /// Decimal separator for pt-BR ("16,4").
    pub const DECIMAL_SEPARATOR: char = ',';

    /// Placeholder shown for values that cannot be displayed.
    pub const PLACEHOLDER: &str = "—";

    /// Format a number with grouping and up to three fraction digits,
    /// trailing zeros removed. `29918` -> "29.918", `16.4` -> "16,4".
    pub fn format_number(value: f64) -> String {
        localize(value, 3, true)
    }

    /// Format a number with exactly `decimals` fraction digits.
    /// `format_decimal(14.8, 1)` -> "14,8".
    pub fn format_decimal(value: f64, decimals: usize) -> String {
        localize(value, decimals, false)
    }

    /// Format a value as Brazilian Real. `17749.5` -> "R$ 17.749,50".
    pub fn format_currency_brl(value: f64) -> String {
        if !value.is_finite() {
            return PLACEHOLDER.to_string();
        }
        let body = localize(value.abs(), 2, false);
        if value < 0.0 && has_significant_digit(&body) {
            format!("-R$ {}", body)
        } else {
            format!("R$ {}", body)
        }
    }

    /// Format a value followed by a percent sign. `62` -> "62%".
    pub fn format_percent(value: f64) -> String {
        format!("{}%", format_number(value))
    }

    /// Format a percentage rounded to `decimals` places. `9.756` -> "9,8%".
    pub fn format_percent_fixed(value: f64, decimals: usize) -> String {
        format!("{}%", format_decimal(value, decimals))
    }

    /// How a chart formats the values in its tooltips.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum ValueFormat {
        /// Grouped number, no suffix.
        #[default]
        Plain,
        /// "62%"
        Percent,
        /// "14,8 min"
        Minutes,
        /// "29.918 atendimentos"
        Conversations,
        /// "12 agentes"
        Agents,
    }

    impl ValueFormat {
        pub fn apply(self, value: f64) -> String {
            match self {
                ValueFormat::Plain => format_number(value),
                ValueFormat::Percent => format_percent(value),
                ValueFormat::Minutes => format!("{} min", format_number(value)),
                ValueFormat::Conversations => format!("{} atendimentos", format_number(value)),
                ValueFormat::Agents => format!("{} agentes", format_number(value)),
            }
        }
    }

    fn localize(value: f64, decimals: usize, trim: bool) -> String {
        if !value.is_finite() {
            return PLACEHOLDER.to_string();
        }

        let fixed = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let frac = if trim {
            frac_part.trim_end_matches('0')
        } else {
            frac_part
        };

        let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
        // "-0" is never shown: a value that rounds to zero loses its sign.
        if value < 0.0 && has_significant_digit(&fixed) {
            out.push('-');
        }
        out.push_str(&group_thousands(int_part));
        if !frac.is_empty() {
            out.push(DECIMAL_SEPARATOR);
            out.push_str(frac);
        }
        out
    }

    fn has_significant_digit(s: &str) -> bool {
        s.chars().any(|c| c.is_ascii_digit() && c != '0')
    }

    fn group_thousands(digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(GROUP_SEPARATOR);
            }
            out.push(ch);
        }
        out
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_number_groups_thousands() {
            assert_eq!(format_number(29918.0), "29.918");
            assert_eq!(format_number(2700.0), "2.700");
            assert_eq!(format_number(195700.0), "195.700");
            assert_eq!(format_number(1234567.0), "1.234.567");
            assert_eq!(format_number(12.0), "12");
            assert_eq!(format_number(0.0), "0");
        }

        #[test]
        fn test_format_number_fraction_digits() {
            assert_eq!(format_number(16.4), "16,4");
            assert_eq!(format_number(1.23456), "1,235");
            assert_eq!(format_number(98936.5), "98.936,5");
        }

        #[test]
        fn test_format_number_negative() {
            assert_eq!(format_number(-4500.0), "-4.500");
            assert_eq!(format_number(-0.0001), "0");
        }

        #[test]
        fn test_format_currency_brl() {
            assert_eq!(format_currency_brl(17749.5), "R$ 17.749,50");
            assert_eq!(format_currency_brl(212994.0), "R$ 212.994,00");
            assert_eq!(format_currency_brl(0.5), "R$ 0,50");
            assert_eq!(format_currency_brl(-1200.0), "-R$ 1.200,00");
        }

        #[test]
        fn test_format_decimal_and_percent() {
            assert_eq!(format_decimal(14.8, 1), "14,8");
            assert_eq!(format_decimal(70.0, 0), "70");
            assert_eq!(format_percent(62.0), "62%");
            assert_eq!(format_percent_fixed(9.756, 1), "9,8%");
        }

        #[test]
        fn test_value_format_suffixes() {
            assert_eq!(ValueFormat::Percent.apply(49.0), "49%");
            assert_eq!(ValueFormat::Minutes.apply(16.4), "16,4 min");
            assert_eq!(ValueFormat::Conversations.apply(29918.0), "29.918 atendimentos");
            assert_eq!(ValueFormat::Agents.apply(12.0), "12 agentes");
            assert_eq!(ValueFormat::default().apply(98936.0), "98.936");
        }

        #[test]
        fn test_non_finite_values_use_placeholder() {
            assert_eq!(format_number(f64::NAN), PLACEHOLDER);
            assert_eq!(format_currency_brl(f64::INFINITY), PLACEHOLDER);
        }
    }
}

/// Error types
pub mod error {
    use std::fmt;

    /// Failures raised by the chart geometry and the data lookups.
    #[derive(Debug, Clone, PartialEq)]
    pub enum ChartError {
        /// A chart was asked to lay out a series with no points.
        EmptySeries(String),
        /// A metric or sort key that is not part of the dataset.
        UnknownKey(String),
    }

    impl fmt::Display for ChartError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                ChartError::EmptySeries(name) => write!(f, "Chart error: series '{}' has no points", name),
                ChartError::UnknownKey(key) => write!(f, "Chart error: unknown key '{}'", key),
            }
        }
    }

    impl std::error::Error for ChartError {}

}
