//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Upper bound on fraction digits the formatter will render
pub const MAX_FRACTION_DIGITS: u32 = 18;

/// What the journal builder does when a row's debit and credit disagree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MismatchPolicy {
    /// Stop at the first mismatched row; later rows are not examined
    #[default]
    FailFast,
    /// Examine every row and report all mismatches together
    CollectAll,
}

/// Digit grouping used when rendering amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DigitGrouping {
    /// Last three digits, then pairs: `12,34,567`
    #[default]
    Indian,
    /// Groups of three: `1,234,567`
    Western,
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub grouping: DigitGrouping,
    /// Amounts are rounded half-up to this many places; trailing zeros are dropped
    pub max_fraction_digits: u32,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            grouping: DigitGrouping::Indian,
            max_fraction_digits: 0,
        }
    }
}

/// Settings for the transaction text parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Minimum length of the trimmed text before the parser is consulted
    pub min_text_len: usize,
    /// Standard account used for names the parser does not recognise
    pub fallback_account: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_text_len: 5,
            fallback_account: "Miscellaneous Expense A/c".to_string(),
        }
    }
}

/// Configuration for a [`LedgerEngine`](crate::LedgerEngine) run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub mismatch_policy: MismatchPolicy,
    pub format: FormatConfig,
    pub parser: ParserConfig,
}

impl EngineConfig {
    /// Check that the settings are usable
    pub fn validate(&self) -> LedgerResult<()> {
        if self.format.max_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(LedgerError::Validation(format!(
                "max_fraction_digits cannot exceed {}",
                MAX_FRACTION_DIGITS
            )));
        }

        if self.parser.min_text_len == 0 {
            return Err(LedgerError::Validation(
                "min_text_len must be at least 1".to_string(),
            ));
        }

        if self.parser.fallback_account.trim().is_empty() {
            return Err(LedgerError::Validation(
                "fallback_account cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.mismatch_policy, MismatchPolicy::FailFast);
        assert_eq!(config.format.grouping, DigitGrouping::Indian);
        assert_eq!(config.format.max_fraction_digits, 0);
        assert_eq!(config.parser.min_text_len, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"mismatch_policy":"CollectAll","format":{"grouping":"Western"}}"#)
                .unwrap();
        assert_eq!(config.mismatch_policy, MismatchPolicy::CollectAll);
        assert_eq!(config.format.grouping, DigitGrouping::Western);
        assert_eq!(config.format.max_fraction_digits, 0);
        assert_eq!(config.parser, ParserConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let mut config = EngineConfig::default();
        config.format.max_fraction_digits = 40;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.parser.min_text_len = 0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.parser.fallback_account = " ".to_string();
        assert!(config.validate().is_err());
    }
}
