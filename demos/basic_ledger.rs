//! Basic journal and ledger generation example

use journal_ledger::{
    render_text, row_from_text, BalanceEntry, EngineConfig, KeywordParser, LedgerEngine,
    Presenter, TransactionRow,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = EngineConfig::default();
    let engine = LedgerEngine::new(config.clone())?;

    // 1. Opening balances, as typed into a form
    let debit_balances = vec![
        BalanceEntry::parse("Cash A/c", "1,50,000"),
        BalanceEntry::parse("Furniture A/c", "25,000"),
    ];
    let credit_balances = vec![BalanceEntry::parse("Capital A/c", "1,75,000")];

    // 2. Transactions entered by hand
    let mut rows = vec![
        TransactionRow::parse(
            "2024-04-01",
            "Purchased goods for cash",
            "Purchase A/c",
            "40,000",
            "Cash A/c",
            "40,000",
        ),
        TransactionRow::parse(
            "2024-04-03",
            "Sold goods for cash",
            "Cash A/c",
            "55,000",
            "Revenue A/c",
            "55,000",
        ),
    ];

    // 3. One more from free text
    let parser = KeywordParser::new(&config.parser);
    let text = "On 5th April 2024 paid shop rent of ₹12,000";
    match row_from_text(&parser, text, config.parser.min_text_len).await {
        Some(row) => rows.push(row),
        None => println!("Could not process transaction text. Please enter details manually."),
    }

    // 4. Generate and display
    let report = engine.generate(&debit_balances, &credit_balances, &rows)?;
    let presenter = Presenter::new(&config.format);
    let journal = presenter.journal_rows(&report.journal);
    let ledgers = presenter.ledger_tables(&report);

    println!("{}", render_text(&journal, &ledgers));
    println!("{}", serde_json::to_string_pretty(&ledgers)?);

    Ok(())
}
