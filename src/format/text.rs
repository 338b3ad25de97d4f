//! Plain-text rendering for terminals

use std::fmt;

use crate::format::{JournalRow, LedgerTable, LineCells};

const SIDE_SEPARATOR: &str = " | ";

/// A journal and its ledgers laid out as plain text tables
#[derive(Debug, Clone, Copy)]
pub struct TextReport<'a> {
    pub journal: &'a [JournalRow],
    pub ledgers: &'a [LedgerTable],
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_journal(f, self.journal)?;
        for table in self.ledgers {
            writeln!(f)?;
            write_ledger(f, table)?;
        }
        Ok(())
    }
}

/// Render a journal and its ledgers as plain text tables
pub fn render_text(journal: &[JournalRow], ledgers: &[LedgerTable]) -> String {
    TextReport { journal, ledgers }.to_string()
}

fn write_journal(out: &mut impl fmt::Write, journal: &[JournalRow]) -> fmt::Result {
    let date_w = column_width("Date", journal.iter().map(|r| r.date.as_str()));
    let part_w = column_width(
        "Particulars",
        journal.iter().flat_map(|r| r.particulars.lines()),
    );
    let dr_w = column_width("Dr", journal.iter().map(|r| r.dr.as_str()));
    let cr_w = column_width("Cr", journal.iter().map(|r| r.cr.as_str()));

    writeln!(out, "Journal")?;
    writeln!(
        out,
        "{:<date_w$}  {:<part_w$}  {:>dr_w$}  {:>cr_w$}",
        "Date", "Particulars", "Dr", "Cr"
    )?;
    for row in journal {
        let mut lines = row.particulars.lines();
        let first = lines.next().unwrap_or_default();
        writeln!(
            out,
            "{:<date_w$}  {:<part_w$}  {:>dr_w$}  {:>cr_w$}",
            row.date, first, row.dr, row.cr
        )?;
        for line in lines {
            writeln!(out, "{:<date_w$}  {line}", "")?;
        }
    }
    Ok(())
}

fn write_ledger(out: &mut impl fmt::Write, table: &LedgerTable) -> fmt::Result {
    let cells = || table.rows.iter().flat_map(|r| [&r.debit, &r.credit]);
    let date_w = column_width("Date", cells().map(|c| c.date.as_str()));
    let part_w = column_width("Particulars", cells().map(|c| c.particulars.as_str()));
    let jf_w = column_width("J.F.", cells().map(|c| c.jf.as_str()));
    let amount_w = column_width(
        "Amount",
        cells()
            .map(|c| c.amount.as_str())
            .chain([table.debit_total.as_str(), table.credit_total.as_str()]),
    );
    let widths = (date_w, part_w, jf_w, amount_w);

    writeln!(out, "{}", table.name)?;
    let header = LineCells {
        date: "Date".to_string(),
        particulars: "Particulars".to_string(),
        jf: "J.F.".to_string(),
        amount: "Amount".to_string(),
    };
    writeln!(
        out,
        "{}{SIDE_SEPARATOR}{}",
        side(&header, widths),
        side(&header, widths)
    )?;
    for row in &table.rows {
        writeln!(
            out,
            "{}{SIDE_SEPARATOR}{}",
            side(&row.debit, widths),
            side(&row.credit, widths)
        )?;
    }
    let label_w = date_w + part_w + jf_w + 4;
    writeln!(
        out,
        "{:<label_w$}  {:>amount_w$}{SIDE_SEPARATOR}{:<label_w$}  {:>amount_w$}",
        "Total", table.debit_total, "Total", table.credit_total
    )
}

fn side(cells: &LineCells, (date_w, part_w, jf_w, amount_w): (usize, usize, usize, usize)) -> String {
    format!(
        "{:<date_w$}  {:<part_w$}  {:<jf_w$}  {:>amount_w$}",
        cells.date, cells.particulars, cells.jf, cells.amount
    )
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.chars().count())
}
