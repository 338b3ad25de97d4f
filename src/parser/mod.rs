//! Free-text transaction parsing

pub mod accounts;
pub mod keyword;

pub use accounts::*;
pub use keyword::*;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::traits::TransactionParser;
use crate::types::TransactionRow;

/// Errors reported by a transaction text parser
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Empty transaction text")]
    Empty,
    #[error("Transaction description is too short: {actual} character(s), need at least {min}")]
    TooShort { min: usize, actual: usize },
    #[error("Could not process transaction text: {0}")]
    Failed(String),
}

/// What a parser could recover from a transaction description
///
/// Any field may be missing; the resulting row is then an incomplete draft
/// which the journal builder skips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTransaction {
    pub date: Option<NaiveDate>,
    pub description: String,
    pub debit_account: Option<String>,
    pub credit_account: Option<String>,
    pub amount: Option<BigDecimal>,
}

impl ParsedTransaction {
    /// Map onto a transaction row, with the single amount on both sides
    pub fn into_row(self) -> TransactionRow {
        let amount = self.amount.unwrap_or_default();
        TransactionRow::new(
            self.date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            self.description,
            self.debit_account.unwrap_or_default(),
            amount.clone(),
            self.credit_account.unwrap_or_default(),
            amount,
        )
    }
}

/// Ask `parser` for a draft row, never failing
///
/// Text shorter than `min_len` characters after trimming is not sent to the
/// parser. Parser errors are logged and yield `None`.
pub async fn row_from_text<P>(parser: &P, text: &str, min_len: usize) -> Option<TransactionRow>
where
    P: TransactionParser + ?Sized,
{
    let text = text.trim();
    let result = if text.is_empty() {
        Err(ParseError::Empty)
    } else if text.chars().count() < min_len {
        Err(ParseError::TooShort {
            min: min_len,
            actual: text.chars().count(),
        })
    } else {
        parser.parse(text).await
    };

    match result {
        Ok(parsed) => Some(parsed.into_row()),
        Err(err) => {
            warn!(error = %err, "no transaction row produced from text");
            None
        }
    }
}
