//! Journal building from raw transaction rows

use tracing::{debug, warn};

use crate::config::MismatchPolicy;
use crate::types::*;

/// Validates transaction rows and turns them into journal entries
#[derive(Debug, Clone, Default)]
pub struct JournalBuilder {
    policy: MismatchPolicy,
}

impl JournalBuilder {
    /// Create a fail-fast journal builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a journal builder with the given mismatch policy
    pub fn with_policy(policy: MismatchPolicy) -> Self {
        Self { policy }
    }

    /// Build the journal, one entry per complete and balanced row, in input order
    ///
    /// Incomplete rows are drafts and are skipped without error. A complete
    /// row whose amounts differ is an error: under
    /// [`MismatchPolicy::FailFast`] the first one is returned and no later
    /// row is looked at; under [`MismatchPolicy::CollectAll`] every row is
    /// checked and all mismatches are returned together.
    pub fn build(&self, rows: &[TransactionRow]) -> LedgerResult<Vec<JournalEntry>> {
        let mut journal = Vec::with_capacity(rows.len());
        let mut mismatches = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            if !row.is_complete() {
                debug!(index, date = %row.date, "skipping incomplete transaction row");
                continue;
            }

            match JournalEntry::from_row(row) {
                Ok(entry) => journal.push(entry),
                Err(err @ LedgerError::UnbalancedRow { .. }) => {
                    warn!(
                        index,
                        date = %row.date,
                        debit = %row.debit_amount,
                        credit = %row.credit_amount,
                        "debit and credit amounts differ"
                    );
                    match self.policy {
                        MismatchPolicy::FailFast => return Err(err),
                        MismatchPolicy::CollectAll => mismatches.push(RowMismatch {
                            index,
                            date: row.date.trim().to_string(),
                            debit: row.debit_amount.clone(),
                            credit: row.credit_amount.clone(),
                        }),
                    }
                }
                Err(err) => return Err(err),
            }
        }

        if !mismatches.is_empty() {
            return Err(LedgerError::UnbalancedRows(RowMismatches(mismatches)));
        }

        Ok(journal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, debit: &str, dr: &str, credit: &str, cr: &str) -> TransactionRow {
        TransactionRow::parse(date, "Test transaction", debit, dr, credit, cr)
    }

    #[test]
    fn test_build_keeps_input_order() {
        let journal = JournalBuilder::new()
            .build(&[
                row("2024-01-02", "Cash", "100", "Sales", "100"),
                row("2024-01-01", "Rent", "50", "Cash", "50"),
            ])
            .unwrap();
        assert_eq!(journal.len(), 2);
        assert_eq!(journal[0].date, "2024-01-02");
        assert_eq!(journal[1].debit_account, "Rent");
    }

    #[test]
    fn test_build_skips_incomplete_rows() {
        let journal = JournalBuilder::new()
            .build(&[
                row("", "Cash", "100", "Sales", "100"),
                row("2024-01-01", "", "100", "Sales", "100"),
                row("2024-01-01", "Cash", "0", "Sales", "100"),
                row("2024-01-01", "Cash", "abc", "Sales", "abc"),
                TransactionRow::parse("2024-01-01", "  ", "Cash", "10", "Sales", "10"),
                row("2024-01-03", "Cash", "10", "Sales", "10"),
            ])
            .unwrap();
        assert_eq!(journal.len(), 1);
        assert_eq!(journal[0].date, "2024-01-03");
    }

    #[test]
    fn test_incomplete_mismatch_is_skipped_not_reported() {
        let journal = JournalBuilder::new()
            .build(&[row("", "Cash", "500", "Sales", "400")])
            .unwrap();
        assert!(journal.is_empty());
    }

    #[test]
    fn test_fail_fast_stops_at_first_mismatch() {
        let err = JournalBuilder::new()
            .build(&[
                row("2024-01-01", "Cash", "100", "Sales", "100"),
                row("2024-01-05", "Cash", "500", "Sales", "400"),
                row("2024-01-09", "Cash", "7", "Sales", "8"),
            ])
            .unwrap_err();
        match err {
            LedgerError::UnbalancedRow { date, .. } => assert_eq!(date, "2024-01-05"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_collect_all_reports_every_mismatch() {
        let err = JournalBuilder::with_policy(MismatchPolicy::CollectAll)
            .build(&[
                row("2024-01-01", "Cash", "100", "Sales", "100"),
                row("2024-01-05", "Cash", "500", "Sales", "400"),
                row("2024-01-09", "Cash", "7", "Sales", "8"),
            ])
            .unwrap_err();
        match err {
            LedgerError::UnbalancedRows(mismatches) => {
                let dates: Vec<_> = mismatches.iter().map(|m| m.date.as_str()).collect();
                assert_eq!(dates, vec!["2024-01-05", "2024-01-09"]);
                assert_eq!(mismatches.0[0].index, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_equal_amounts_with_different_scale_are_balanced() {
        let journal = JournalBuilder::new()
            .build(&[row("2024-01-01", "Cash", "500", "Sales", "500.00")])
            .unwrap();
        assert_eq!(journal.len(), 1);
    }
}
