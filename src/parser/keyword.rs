//! Rule-based transaction parser driven by keyword lists

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::str::FromStr;
use tracing::debug;

use crate::config::ParserConfig;
use crate::parser::{AccountMap, ParseError, ParsedTransaction};
use crate::traits::TransactionParser;

const CURRENCY_SYMBOLS: &[char] = &['₹', '$', '£', '€'];

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Kind of business event a keyword points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Payment,
    Receipt,
    Borrowing,
    Investment,
    Purchase,
    Rent,
    Withdrawal,
}

/// Keyword lists, checked in this order; a later match overrides an earlier one
const CATEGORIES: &[(Category, &[&str])] = &[
    (
        Category::Payment,
        &[
            "paid", "expense", "spent", "cost", "charged", "withdrew", "deducted", "used",
            "donated", "sent", "transferred to", "disbursed", "expended", "lost", "owed",
        ],
    ),
    (
        Category::Receipt,
        &[
            "received", "sale", "sold", "income", "revenue", "earned", "gained", "deposited",
            "collected", "credited", "refunded", "returned", "reimbursed", "transferred from",
            "acquired", "won", "got",
        ],
    ),
    (
        Category::Borrowing,
        &[
            "borrowed", "loan from", "lent by", "took loan", "financed by", "advanced by",
            "funded by",
        ],
    ),
    (
        Category::Investment,
        &["invested", "capital", "started business", "contributed"],
    ),
    (Category::Purchase, &["purchased", "bought", "acquired"]),
    (Category::Rent, &["rent", "paid as rent", "rental", "lease"]),
    (
        Category::Withdrawal,
        &[
            "withdrawn", "withdrawal", "drew", "taken out", "for his own use", "for her own use",
            "for personal use",
        ],
    ),
];

const PURCHASED_ITEMS: &[&str] = &["furniture", "goods", "equipment", "stock"];
const PERSONAL_RENT: &[&str] = &["home", "house", "residence", "personal", "family"];
const BUSINESS_RENT: &[&str] = &["shop", "office", "business", "store", "warehouse"];

/// Parses transaction descriptions using fixed keyword rules
///
/// No language model is involved: dates and amounts are recognised from
/// their written forms, and the debit/credit accounts are inferred from
/// keywords such as "paid", "sold" or "borrowed".
#[derive(Debug, Clone, Default)]
pub struct KeywordParser {
    accounts: AccountMap,
}

impl KeywordParser {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            accounts: AccountMap::new(config.fallback_account.clone()),
        }
    }

    /// Extract whatever can be recognised from `text`
    pub fn extract(&self, text: &str) -> ParsedTransaction {
        let tokens = tokenize(text);
        let date = find_date(&tokens);
        let amount = find_amount(&tokens, date.map(|(_, span)| span));
        let (debit, credit, description) = self.infer_accounts(&text.to_lowercase());

        debug!(
            date = ?date.map(|(d, _)| d),
            amount = ?amount,
            debit = %debit,
            credit = %credit,
            "parsed transaction text"
        );

        ParsedTransaction {
            date: date.map(|(d, _)| d),
            description,
            debit_account: Some(debit),
            credit_account: Some(credit),
            amount,
        }
    }

    fn infer_accounts(&self, lower: &str) -> (String, String, String) {
        let cash = || self.accounts.standard_name("cash");
        let mut inferred: Option<(String, String, String)> = None;

        for (category, keywords) in CATEGORIES {
            if !keywords.iter().any(|k| contains_phrase(lower, k)) {
                continue;
            }

            inferred = Some(match category {
                Category::Payment => (
                    self.accounts.fallback().to_string(),
                    cash(),
                    "Being amount paid for expenses".to_string(),
                ),
                Category::Receipt => (
                    cash(),
                    self.accounts.standard_name("revenue"),
                    "Being amount received from revenue".to_string(),
                ),
                Category::Borrowing => (
                    cash(),
                    self.accounts.standard_name("loan payable"),
                    "Being amount borrowed from loan payable".to_string(),
                ),
                Category::Investment => (
                    cash(),
                    self.accounts.standard_name("capital"),
                    "Being amount invested as capital in the business".to_string(),
                ),
                Category::Purchase => {
                    let item = PURCHASED_ITEMS
                        .iter()
                        .find(|item| contains_phrase(lower, item))
                        .copied();
                    let debit = self.accounts.standard_name(item.unwrap_or("purchase"));
                    let item = item.unwrap_or("goods");
                    if contains_phrase(lower, "cash") {
                        (debit, cash(), format!("Being {item} purchased for cash"))
                    } else if contains_phrase(lower, "credit") {
                        (
                            debit,
                            self.accounts.standard_name("creditors"),
                            format!("Being {item} purchased on credit"),
                        )
                    } else {
                        (debit, cash(), format!("Being {item} purchased"))
                    }
                }
                Category::Rent => {
                    if PERSONAL_RENT.iter().any(|w| contains_phrase(lower, w)) {
                        (
                            self.accounts.standard_name("drawings"),
                            cash(),
                            "Being rent paid for the home, treated as personal expense"
                                .to_string(),
                        )
                    } else if BUSINESS_RENT.iter().any(|w| contains_phrase(lower, w)) {
                        (
                            self.accounts.standard_name("rent"),
                            cash(),
                            "Being rent paid for the shop".to_string(),
                        )
                    } else {
                        (
                            self.accounts.standard_name("rent"),
                            cash(),
                            "Being rent paid (unspecified purpose)".to_string(),
                        )
                    }
                }
                Category::Withdrawal => (
                    self.accounts.standard_name("drawings"),
                    cash(),
                    "Being cash withdrawn for personal use".to_string(),
                ),
            });
        }

        inferred.unwrap_or_else(|| {
            (
                cash(),
                self.accounts.fallback().to_string(),
                "Being general transaction".to_string(),
            )
        })
    }
}

#[async_trait]
impl TransactionParser for KeywordParser {
    async fn parse(&self, text: &str) -> Result<ParsedTransaction, ParseError> {
        if text.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(self.extract(text))
    }
}

/// Whether `phrase` occurs in `text` on word boundaries
fn contains_phrase(text: &str, phrase: &str) -> bool {
    text.match_indices(phrase).any(|(start, _)| {
        let end = start + phrase.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Whitespace-separated words with surrounding punctuation removed
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| matches!(c, ',' | '.' | ';' | ':' | '(' | ')' | '!' | '?')))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Find the first date in the token stream, with the token range it occupies
fn find_date(tokens: &[&str]) -> Option<(NaiveDate, (usize, usize))> {
    for i in 0..tokens.len() {
        if let Ok(date) = NaiveDate::parse_from_str(tokens[i], "%Y-%m-%d") {
            return Some((date, (i, i + 1)));
        }

        if i + 2 < tokens.len() {
            let year = parse_year(tokens[i + 2]);
            // 5th January 2024
            if let (Some(day), Some(month), Some(year)) =
                (parse_day(tokens[i]), parse_month(tokens[i + 1]), year)
            {
                if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                    return Some((date, (i, i + 3)));
                }
            }
            // January 5, 2024
            if let (Some(month), Some(day), Some(year)) =
                (parse_month(tokens[i]), parse_day(tokens[i + 1]), year)
            {
                if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                    return Some((date, (i, i + 3)));
                }
            }
        }
    }
    None
}

fn parse_day(token: &str) -> Option<u32> {
    let token = token.to_lowercase();
    let digits = ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| token.strip_suffix(suffix))
        .unwrap_or(&token);
    if digits.is_empty() || digits.len() > 2 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|d| (1..=31).contains(d))
}

fn parse_month(token: &str) -> Option<u32> {
    let token = token.to_lowercase();
    if token.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| *m == token || (token.len() <= 4 && m.starts_with(token.as_str())))
        .and_then(|idx| u32::try_from(idx + 1).ok())
}

fn parse_year(token: &str) -> Option<i32> {
    if token.len() == 4 && token.chars().all(|c| c.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}

/// Find the transaction amount
///
/// A number written after a currency symbol wins; otherwise the first plain
/// number outside the date is used.
fn find_amount(tokens: &[&str], date_span: Option<(usize, usize)>) -> Option<BigDecimal> {
    let in_date = |i: usize| date_span.is_some_and(|(start, end)| (start..end).contains(&i));

    for (i, token) in tokens.iter().enumerate() {
        if let Some(rest) = token.strip_prefix(CURRENCY_SYMBOLS) {
            let rest = if rest.is_empty() {
                tokens.get(i + 1).copied().unwrap_or_default()
            } else {
                rest
            };
            if let Some(amount) = parse_number(rest) {
                return Some(amount);
            }
        }
    }

    tokens
        .iter()
        .enumerate()
        .filter(|(i, _)| !in_date(*i))
        .find_map(|(_, token)| parse_number(token))
}

fn parse_number(token: &str) -> Option<BigDecimal> {
    let token = token.trim_end_matches(|c: char| !c.is_ascii_digit());
    if !token.starts_with(|c: char| c.is_ascii_digit())
        || !token.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.')
    {
        return None;
    }
    let cleaned: String = token.chars().filter(|c| *c != ',').collect();
    BigDecimal::from_str(&cleaned).ok()
}
