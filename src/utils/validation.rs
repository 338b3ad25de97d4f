//! Validation and input-tolerance helpers

use bigdecimal::{BigDecimal, Zero};
use std::str::FromStr;

use crate::types::*;

/// Parse an amount typed into a form
///
/// Thousands separators and surrounding whitespace are ignored. The rest
/// must be an optional sign, digits and at most one decimal point; anything
/// else (exponent notation included) parses as zero, which later filters the
/// entry or row out instead of raising an error.
pub fn parse_amount(text: &str) -> BigDecimal {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    plain_decimal(&cleaned)
        .and_then(|canonical| BigDecimal::from_str(&canonical).ok())
        .unwrap_or_else(BigDecimal::zero)
}

/// Canonical form of a plain decimal literal, or `None` for anything else
fn plain_decimal(text: &str) -> Option<String> {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.chars().chain(frac_part.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    if frac_part.is_empty() {
        Some(format!("{sign}{int_part}"))
    } else {
        Some(format!("{sign}{int_part}.{frac_part}"))
    }
}

/// Validate that an account name is usable as a ledger key
pub fn validate_account_name(name: &str) -> LedgerResult<()> {
    if name.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Account name cannot be empty".to_string(),
        ));
    }

    Ok(())
}
