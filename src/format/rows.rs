//! Display rows for the journal and for T-account tables

use serde::{Deserialize, Serialize};

use crate::config::FormatConfig;
use crate::format::AmountFormatter;
use crate::ledger::LedgerReport;
use crate::types::*;

/// One journal line ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRow {
    pub date: String,
    /// Multi-line narrative, lines separated by `\n`
    pub particulars: String,
    pub dr: String,
    pub cr: String,
}

/// The cells of one side of a T-account row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineCells {
    pub date: String,
    pub particulars: String,
    pub jf: String,
    pub amount: String,
}

impl LineCells {
    pub fn is_blank(&self) -> bool {
        self.date.is_empty()
            && self.particulars.is_empty()
            && self.jf.is_empty()
            && self.amount.is_empty()
    }
}

/// A debit line and a credit line shown side by side
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LedgerRow {
    pub debit: LineCells,
    pub credit: LineCells,
}

/// A whole T-account ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTable {
    pub name: String,
    pub rows: Vec<LedgerRow>,
    pub debit_total: String,
    pub credit_total: String,
}

/// Converts engine output into display rows
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    formatter: AmountFormatter,
}

impl Presenter {
    pub fn new(config: &FormatConfig) -> Self {
        Self {
            formatter: AmountFormatter::new(config),
        }
    }

    /// Journal rows in journal order
    pub fn journal_rows(&self, journal: &[JournalEntry]) -> Vec<JournalRow> {
        journal
            .iter()
            .map(|entry| JournalRow {
                date: entry.date.clone(),
                particulars: entry.particulars.clone(),
                dr: self.formatter.format(&entry.dr),
                cr: self.formatter.format(&entry.cr),
            })
            .collect()
    }

    /// Lay out one account as side-by-side rows
    ///
    /// The shorter side is padded with blank cells so both sides have the
    /// same number of rows.
    pub fn ledger_table(&self, account: &LedgerAccount) -> LedgerTable {
        let debits: Vec<_> = account.debit_lines().collect();
        let credits: Vec<_> = account.credit_lines().collect();
        let height = debits.len().max(credits.len());

        let rows = (0..height)
            .map(|i| LedgerRow {
                debit: debits.get(i).map(|l| self.cells(l)).unwrap_or_default(),
                credit: credits.get(i).map(|l| self.cells(l)).unwrap_or_default(),
            })
            .collect();

        LedgerTable {
            name: account.name.clone(),
            rows,
            debit_total: self.formatter.format_total(&account.debit_total()),
            credit_total: self.formatter.format_total(&account.credit_total()),
        }
    }

    /// Tables for every account in the report, in first-referenced order
    pub fn ledger_tables(&self, report: &LedgerReport) -> Vec<LedgerTable> {
        report.accounts().map(|a| self.ledger_table(a)).collect()
    }

    fn cells(&self, line: &LedgerLine) -> LineCells {
        LineCells {
            date: line.date.clone(),
            particulars: line.particulars.clone(),
            jf: line.jf.clone(),
            amount: self.formatter.format(&line.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerEngine;
    use bigdecimal::BigDecimal;

    fn report() -> LedgerReport {
        LedgerEngine::default()
            .generate(
                &[BalanceEntry::new("Cash", BigDecimal::from(150000))],
                &[],
                &[
                    TransactionRow::parse("2024-01-02", "Paid rent", "Rent", "12000", "Cash", "12000"),
                    TransactionRow::parse("2024-01-03", "Paid wages", "Wages", "8000", "Cash", "8000"),
                ],
            )
            .unwrap()
    }

    #[test]
    fn test_journal_rows_format_amounts() {
        let presenter = Presenter::default();
        let rows = presenter.journal_rows(&report().journal);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "2024-01-02");
        assert_eq!(rows[0].particulars, "Rent\nTo Cash\n(Paid rent)");
        assert_eq!(rows[0].dr, "12,000");
        assert_eq!(rows[0].cr, "12,000");
    }

    #[test]
    fn test_ledger_table_pads_shorter_side() {
        let presenter = Presenter::default();
        let report = report();
        let table = presenter.ledger_table(report.account("Cash").unwrap());

        // debit: b/d; credit: Rent, Wages, c/d
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].debit.particulars, BALANCE_BROUGHT_DOWN);
        assert_eq!(table.rows[0].debit.amount, "1,50,000");
        assert!(table.rows[1].debit.is_blank());
        assert!(table.rows[2].debit.is_blank());
        assert_eq!(table.rows[2].credit.particulars, BALANCE_CARRIED_DOWN);
        assert_eq!(table.rows[2].credit.amount, "1,30,000");
        assert_eq!(table.debit_total, "1,50,000");
        assert_eq!(table.credit_total, "1,50,000");
    }

    #[test]
    fn test_rows_serialize_to_json() {
        let presenter = Presenter::default();
        let tables = presenter.ledger_tables(&report());
        let json = serde_json::to_value(&tables).unwrap();
        assert_eq!(json[0]["name"], "Cash");
        assert_eq!(json[0]["rows"][0]["debit"]["particulars"], "Balance b/d");
        assert_eq!(json[1]["name"], "Rent");
    }
}
