//! Main engine that runs the full journal and ledger pipeline

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::EngineConfig;
use crate::ledger::{AccountRegistry, BalanceLoader, JournalBuilder, LedgerGenerator};
use crate::types::*;

/// Output of one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerReport {
    /// Journal entries in input order
    pub journal: Vec<JournalEntry>,
    /// Balanced accounts in first-referenced order
    pub accounts: Vec<LedgerAccount>,
}

impl LedgerReport {
    /// Look up an account by name
    pub fn account(&self, name: &str) -> Option<&LedgerAccount> {
        self.accounts.iter().find(|a| a.name == name)
    }

    /// Accounts in first-referenced order
    pub fn accounts(&self) -> impl Iterator<Item = &LedgerAccount> {
        self.accounts.iter()
    }

    /// Check whether every account's two sides agree
    pub fn is_balanced(&self) -> bool {
        self.accounts.iter().all(LedgerAccount::is_balanced)
    }
}

/// Journal and ledger generation engine
///
/// Holds configuration only; every call to [`LedgerEngine::generate`] builds
/// its own registry, so repeated runs on the same input give the same report.
#[derive(Debug, Clone, Default)]
pub struct LedgerEngine {
    config: EngineConfig,
}

impl LedgerEngine {
    /// Create an engine, rejecting unusable configuration
    pub fn new(config: EngineConfig) -> LedgerResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Turn opening balances and transaction rows into a journal and balanced ledgers
    ///
    /// The journal is validated before any account is built, so a run with a
    /// mismatched row produces no ledgers at all.
    pub fn generate(
        &self,
        debit_balances: &[BalanceEntry],
        credit_balances: &[BalanceEntry],
        rows: &[TransactionRow],
    ) -> LedgerResult<LedgerReport> {
        let journal = JournalBuilder::with_policy(self.config.mismatch_policy).build(rows)?;

        let mut registry = AccountRegistry::new();
        let opening_lines = BalanceLoader::load(&mut registry, debit_balances, credit_balances)?;
        let accounts = LedgerGenerator::generate(registry, &journal)?;

        info!(
            opening_lines,
            journal_entries = journal.len(),
            accounts = accounts.len(),
            "generated journal and ledgers"
        );

        Ok(LedgerReport { journal, accounts })
    }
}
