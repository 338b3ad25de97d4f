//! Locale-style amount rendering

use bigdecimal::{BigDecimal, RoundingMode, Zero};

use crate::config::{DigitGrouping, FormatConfig, MAX_FRACTION_DIGITS};

/// Renders amounts as grouped digit strings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AmountFormatter {
    grouping: DigitGrouping,
    max_fraction_digits: u32,
}

impl AmountFormatter {
    /// Create a formatter; fraction digits are capped at [`MAX_FRACTION_DIGITS`]
    pub fn new(config: &FormatConfig) -> Self {
        Self {
            grouping: config.grouping,
            max_fraction_digits: config.max_fraction_digits.min(MAX_FRACTION_DIGITS),
        }
    }

    /// Render an amount, or an empty string for zero
    pub fn format(&self, amount: &BigDecimal) -> String {
        if amount.is_zero() {
            return String::new();
        }
        self.render(amount)
    }

    /// Render a column total; zero renders as `"0"`
    pub fn format_total(&self, amount: &BigDecimal) -> String {
        self.render(amount)
    }

    fn render(&self, amount: &BigDecimal) -> String {
        let scale = i64::from(self.max_fraction_digits);
        let rounded = amount.with_scale_round(scale, RoundingMode::HalfUp);
        let (digits, _) = rounded.as_bigint_and_exponent();
        let digits = digits.to_string();

        let (negative, digits) = match digits.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, digits.as_str()),
        };

        let frac_len = self.max_fraction_digits as usize;
        let padded = format!("{:0>width$}", digits, width = frac_len + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - frac_len);
        let frac_part = frac_part.trim_end_matches('0');

        let mut out = String::new();
        if negative && (!int_part.trim_start_matches('0').is_empty() || !frac_part.is_empty()) {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, self.grouping));
        if !frac_part.is_empty() {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }
}

/// Insert thousands separators into a string of ASCII digits
pub fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let group = match grouping {
        DigitGrouping::Indian => 2,
        DigitGrouping::Western => 3,
    };

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > group {
        groups.push(&head[end - group..end]);
        end -= group;
    }
    groups.push(&head[..end]);
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}
