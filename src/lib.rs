//! # Journal Ledger
//!
//! Turns opening account balances and dated debit/credit transactions into a
//! chronological journal and balanced per-account ledgers (T-accounts),
//! following double-entry bookkeeping rules.
//!
//! ## Features
//!
//! - **Journal building**: row validation with an exact debit = credit check
//! - **Ledger generation**: posting to T-accounts with automatic "Balance c/d" lines
//! - **Presentation**: grouped-digit amount strings and side-by-side ledger rows
//! - **Text parsing**: a keyword-based parser for free-text transaction descriptions
//!
//! ## Quick Start
//!
//! ```rust
//! use journal_ledger::{BalanceEntry, LedgerEngine, Presenter, TransactionRow};
//! use bigdecimal::BigDecimal;
//!
//! let engine = LedgerEngine::default();
//! let report = engine
//!     .generate(
//!         &[BalanceEntry::new("Cash", BigDecimal::from(1000))],
//!         &[],
//!         &[TransactionRow::parse(
//!             "2024-01-05", "Sold goods for cash", "Cash", "500", "Sales", "500",
//!         )],
//!     )
//!     .unwrap();
//!
//! assert!(report.is_balanced());
//! let tables = Presenter::default().ledger_tables(&report);
//! assert_eq!(tables[0].debit_total, "1,500");
//! ```

pub mod config;
pub mod format;
pub mod ledger;
pub mod parser;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use format::*;
pub use ledger::*;
pub use parser::{row_from_text, AccountMap, KeywordParser, ParseError, ParsedTransaction};
pub use traits::*;
pub use types::*;
