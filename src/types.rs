//! Core types and data structures for journal and ledger generation

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::parse_amount;

/// Particulars used for an opening balance line
pub const BALANCE_BROUGHT_DOWN: &str = "Balance b/d";

/// Particulars used for an automatically computed closing line
pub const BALANCE_CARRIED_DOWN: &str = "Balance c/d";

/// Side of a T-account an amount is posted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left-hand side of the account
    #[serde(rename = "Dr")]
    Debit,
    /// Right-hand side of the account
    #[serde(rename = "Cr")]
    Credit,
}

impl Side {
    /// The other side of the account
    pub fn opposite(self) -> Self {
        match self {
            Side::Debit => Side::Credit,
            Side::Credit => Side::Debit,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Debit => f.write_str("Dr"),
            Side::Credit => f.write_str("Cr"),
        }
    }
}

/// Opening balance for a single account
///
/// The side is not stored here: it is given by which group (debit or
/// credit balances) the entry was supplied in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceEntry {
    /// Account name
    pub account: String,
    /// Opening amount
    pub amount: BigDecimal,
}

impl BalanceEntry {
    /// Create a new balance entry, trimming the account name
    pub fn new(account: impl Into<String>, amount: BigDecimal) -> Self {
        Self {
            account: account.into().trim().to_string(),
            amount,
        }
    }

    /// Build an entry from raw form text, tolerating thousands separators
    pub fn parse(account: &str, amount: &str) -> Self {
        Self::new(account, parse_amount(amount))
    }

    /// Whether the entry names an account and carries a positive amount
    pub fn is_valid(&self) -> bool {
        !self.account.trim().is_empty() && self.amount > BigDecimal::zero()
    }
}

/// A raw transaction row as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    /// ISO date, or empty for an unfinished draft
    pub date: String,
    /// Free-text narration of the transaction
    pub description: String,
    /// Account to debit
    pub debit_account: String,
    /// Amount entered against the debit account
    pub debit_amount: BigDecimal,
    /// Account to credit
    pub credit_account: String,
    /// Amount entered against the credit account
    pub credit_amount: BigDecimal,
}

impl TransactionRow {
    /// Create a new transaction row
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        debit_account: impl Into<String>,
        debit_amount: BigDecimal,
        credit_account: impl Into<String>,
        credit_amount: BigDecimal,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            debit_account: debit_account.into(),
            debit_amount,
            credit_account: credit_account.into(),
            credit_amount,
        }
    }

    /// Build a row from raw form text
    ///
    /// Text fields are trimmed and amounts go through [`parse_amount`], so a
    /// non-numeric amount becomes zero and the row is later skipped.
    pub fn parse(
        date: &str,
        description: &str,
        debit_account: &str,
        debit_amount: &str,
        credit_account: &str,
        credit_amount: &str,
    ) -> Self {
        Self::new(
            date.trim(),
            description.trim(),
            debit_account.trim(),
            parse_amount(debit_amount),
            credit_account.trim(),
            parse_amount(credit_amount),
        )
    }

    /// Whether every field needed for a journal entry has been filled in
    pub fn is_complete(&self) -> bool {
        let zero = BigDecimal::zero();
        !self.date.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.debit_account.trim().is_empty()
            && !self.credit_account.trim().is_empty()
            && self.debit_amount > zero
            && self.credit_amount > zero
    }

    /// Whether the debit and credit amounts agree
    pub fn is_balanced(&self) -> bool {
        self.debit_amount == self.credit_amount
    }
}

/// A validated journal entry: one debit account, one credit account, equal amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Date of the source row
    pub date: String,
    /// Narrative: debit account, `To` credit account, description in parentheses
    pub particulars: String,
    /// Trimmed description of the source row
    pub description: String,
    /// Debit amount
    pub dr: BigDecimal,
    /// Credit amount, always equal to `dr`
    pub cr: BigDecimal,
    /// Account the entry debits
    pub debit_account: String,
    /// Account the entry credits
    pub credit_account: String,
}

impl JournalEntry {
    /// Create a journal entry from a complete row
    ///
    /// Returns an [`LedgerError::UnbalancedRow`] if the amounts differ, so
    /// `dr == cr` holds for every entry that exists.
    pub fn from_row(row: &TransactionRow) -> LedgerResult<Self> {
        if !row.is_balanced() {
            return Err(LedgerError::UnbalancedRow {
                date: row.date.trim().to_string(),
                debit: row.debit_amount.clone(),
                credit: row.credit_amount.clone(),
            });
        }

        let debit_account = row.debit_account.trim().to_string();
        let credit_account = row.credit_account.trim().to_string();
        let description = row.description.trim().to_string();

        Ok(Self {
            date: row.date.trim().to_string(),
            particulars: format!("{debit_account}\nTo {credit_account}\n({description})"),
            description,
            dr: row.debit_amount.clone(),
            cr: row.credit_amount.clone(),
            debit_account,
            credit_account,
        })
    }

    /// The ledger line this entry posts to its debit account
    pub fn debit_line(&self) -> LedgerLine {
        LedgerLine::new(
            self.date.clone(),
            self.credit_account.clone(),
            self.dr.clone(),
            Side::Debit,
        )
    }

    /// The ledger line this entry posts to its credit account
    pub fn credit_line(&self) -> LedgerLine {
        LedgerLine::new(
            self.date.clone(),
            self.debit_account.clone(),
            self.cr.clone(),
            Side::Credit,
        )
    }
}

/// A single line in a T-account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerLine {
    /// Empty for opening and closing balance lines
    pub date: String,
    /// Contra account name, or a balance b/d / c/d label
    pub particulars: String,
    /// Journal folio reference
    pub jf: String,
    /// Amount posted
    pub amount: BigDecimal,
    /// Side of the account the line sits on
    pub side: Side,
}

impl LedgerLine {
    /// Create a new ledger line
    pub fn new(
        date: impl Into<String>,
        particulars: impl Into<String>,
        amount: BigDecimal,
        side: Side,
    ) -> Self {
        Self {
            date: date.into(),
            particulars: particulars.into(),
            jf: String::new(),
            amount,
            side,
        }
    }

    /// Opening balance line
    pub fn brought_down(amount: BigDecimal, side: Side) -> Self {
        Self::new("", BALANCE_BROUGHT_DOWN, amount, side)
    }

    /// Closing balance line
    pub fn carried_down(amount: BigDecimal, side: Side) -> Self {
        Self::new("", BALANCE_CARRIED_DOWN, amount, side)
    }

    /// Whether this is the computed closing line
    pub fn is_carried_down(&self) -> bool {
        self.date.is_empty() && self.particulars == BALANCE_CARRIED_DOWN
    }
}

/// A T-account: every line posted to one account name, in posting order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerAccount {
    /// Account name as first seen, after trimming
    pub name: String,
    /// Lines on both sides, in posting order
    pub entries: Vec<LedgerLine>,
}

impl LedgerAccount {
    /// Create an empty account
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Lines on the debit side, in posting order
    pub fn debit_lines(&self) -> impl Iterator<Item = &LedgerLine> {
        self.entries.iter().filter(|l| l.side == Side::Debit)
    }

    /// Lines on the credit side, in posting order
    pub fn credit_lines(&self) -> impl Iterator<Item = &LedgerLine> {
        self.entries.iter().filter(|l| l.side == Side::Credit)
    }

    /// Sum of debit-side amounts
    pub fn debit_total(&self) -> BigDecimal {
        self.debit_lines().map(|l| &l.amount).sum()
    }

    /// Sum of credit-side amounts
    pub fn credit_total(&self) -> BigDecimal {
        self.credit_lines().map(|l| &l.amount).sum()
    }

    /// Check whether both sides of the account agree
    pub fn is_balanced(&self) -> bool {
        self.debit_total() == self.credit_total()
    }

    /// The closing "Balance c/d" line, if one was inserted
    pub fn closing_balance(&self) -> Option<&LedgerLine> {
        self.entries.iter().rev().find(|l| l.is_carried_down())
    }
}

/// One mismatched row, as reported by the collect-all mismatch policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowMismatch {
    /// Position of the row in the input
    pub index: usize,
    /// Date of the row
    pub date: String,
    /// Debit amount entered
    pub debit: BigDecimal,
    /// Credit amount entered
    pub credit: BigDecimal,
}

impl fmt::Display for RowMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} on {} (debit {}, credit {})",
            self.index + 1,
            self.date,
            self.debit,
            self.credit
        )
    }
}

/// Every mismatched row of a run, in input order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RowMismatches(pub Vec<RowMismatch>);

impl RowMismatches {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RowMismatch> {
        self.0.iter()
    }
}

impl fmt::Display for RowMismatches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} transaction(s): ", self.0.len())?;
        for (i, mismatch) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{mismatch}")?;
        }
        Ok(())
    }
}

/// Errors that can occur while generating a journal and ledgers
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Debit and Credit amounts must match for transaction on {date}")]
    UnbalancedRow {
        /// Date of the offending row
        date: String,
        /// Debit amount entered
        debit: BigDecimal,
        /// Credit amount entered
        credit: BigDecimal,
    },
    #[error("Debit and Credit amounts must match for {0}")]
    UnbalancedRows(RowMismatches),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
