//! Opening balance loading

use tracing::debug;

use crate::ledger::AccountRegistry;
use crate::types::*;

/// Seeds a registry with "Balance b/d" lines from opening balances
pub struct BalanceLoader;

impl BalanceLoader {
    /// Load debit-side and credit-side opening balances into `registry`
    ///
    /// Entries with a blank account or a non-positive amount are dropped.
    /// Debit balances are loaded before credit balances, each group in input
    /// order. A name present in both groups gets two opening lines.
    ///
    /// Returns the number of opening lines posted.
    pub fn load(
        registry: &mut AccountRegistry,
        debit_balances: &[BalanceEntry],
        credit_balances: &[BalanceEntry],
    ) -> LedgerResult<usize> {
        let mut posted = 0;
        for (side, group) in [(Side::Debit, debit_balances), (Side::Credit, credit_balances)] {
            for entry in group {
                if !entry.is_valid() {
                    debug!(account = %entry.account, amount = %entry.amount, %side, "dropping opening balance");
                    continue;
                }
                registry.append_line(
                    entry.account.trim(),
                    LedgerLine::brought_down(entry.amount.clone(), side),
                )?;
                posted += 1;
            }
        }
        Ok(posted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    #[test]
    fn test_load_seeds_brought_down_lines() {
        let mut registry = AccountRegistry::new();
        let posted = BalanceLoader::load(
            &mut registry,
            &[BalanceEntry::new("Cash", BigDecimal::from(1000))],
            &[BalanceEntry::new("Capital", BigDecimal::from(1000))],
        )
        .unwrap();
        assert_eq!(posted, 2);

        let cash = registry.get("Cash").unwrap();
        assert_eq!(cash.entries.len(), 1);
        assert_eq!(cash.entries[0].particulars, BALANCE_BROUGHT_DOWN);
        assert_eq!(cash.entries[0].side, Side::Debit);
        assert_eq!(cash.entries[0].date, "");

        let capital = registry.get("Capital").unwrap();
        assert_eq!(capital.entries[0].side, Side::Credit);
    }

    #[test]
    fn test_load_drops_invalid_entries() {
        let mut registry = AccountRegistry::new();
        let posted = BalanceLoader::load(
            &mut registry,
            &[
                BalanceEntry::new("", BigDecimal::from(100)),
                BalanceEntry::new("Cash", BigDecimal::from(0)),
                BalanceEntry::parse("Bank", "not a number"),
            ],
            &[],
        )
        .unwrap();
        assert_eq!(posted, 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_same_name_on_both_sides_accumulates() {
        let mut registry = AccountRegistry::new();
        BalanceLoader::load(
            &mut registry,
            &[BalanceEntry::new("Cash", BigDecimal::from(700))],
            &[BalanceEntry::new("Cash", BigDecimal::from(200))],
        )
        .unwrap();
        assert_eq!(registry.len(), 1);
        let cash = registry.get("Cash").unwrap();
        assert_eq!(cash.debit_total(), BigDecimal::from(700));
        assert_eq!(cash.credit_total(), BigDecimal::from(200));
    }
}
