//! Posting journal entries and balancing every account

use bigdecimal::BigDecimal;
use std::cmp::Ordering;
use tracing::debug;

use crate::ledger::AccountRegistry;
use crate::types::*;

/// Distributes journal entries into T-accounts and closes each account
pub struct LedgerGenerator;

impl LedgerGenerator {
    /// Post every journal entry to its debit and credit account, in journal order
    pub fn post_journal(registry: &mut AccountRegistry, journal: &[JournalEntry]) -> LedgerResult<()> {
        for entry in journal {
            registry.append_line(&entry.debit_account, entry.debit_line())?;
            registry.append_line(&entry.credit_account, entry.credit_line())?;
        }
        Ok(())
    }

    /// Append a "Balance c/d" line to the lighter side of `account`
    ///
    /// Returns the balanced total of either side. An account whose sides
    /// already agree is left untouched.
    pub fn balance_account(account: &mut LedgerAccount) -> BigDecimal {
        let debit_total = account.debit_total();
        let credit_total = account.credit_total();

        match debit_total.cmp(&credit_total) {
            Ordering::Greater => {
                let difference = &debit_total - &credit_total;
                debug!(account = %account.name, amount = %difference, "carrying down debit balance");
                account
                    .entries
                    .push(LedgerLine::carried_down(difference, Side::Credit));
                debit_total
            }
            Ordering::Less => {
                let difference = &credit_total - &debit_total;
                debug!(account = %account.name, amount = %difference, "carrying down credit balance");
                account
                    .entries
                    .push(LedgerLine::carried_down(difference, Side::Debit));
                credit_total
            }
            Ordering::Equal => debit_total,
        }
    }

    /// Post the journal into a pre-seeded registry and balance every account
    pub fn generate(
        mut registry: AccountRegistry,
        journal: &[JournalEntry],
    ) -> LedgerResult<Vec<LedgerAccount>> {
        Self::post_journal(&mut registry, journal)?;
        for account in registry.accounts_mut() {
            let total = Self::balance_account(account);
            debug!(account = %account.name, total = %total, "account balanced");
        }
        Ok(registry.into_accounts())
    }
}
