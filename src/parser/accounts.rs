//! Mapping of loosely written account names onto standard ledger names

use tracing::warn;

/// Standard account names and the lowercase aliases that map to them
const STANDARD_ACCOUNTS: &[(&str, &[&str])] = &[
    (
        "Rent Expense A/c",
        &["rent a/c", "shop rent a/c", "rental expense a/c", "rent", "shop rent", "lease a/c", "rent expense"],
    ),
    (
        "Drawings A/c",
        &["drawings", "withdrawal", "personal withdrawal a/c", "owner's drawings a/c"],
    ),
    ("Cash A/c", &["cash", "cash in hand a/c", "cash account"]),
    ("Furniture A/c", &["furniture", "furniture a/c"]),
    ("Equipment A/c", &["equipment", "equipment a/c", "machinery"]),
    ("Purchase A/c", &["purchase", "purchases", "goods", "stock"]),
    ("Revenue A/c", &["revenue", "sales", "income"]),
    ("Loan Payable A/c", &["loan payable", "loan", "borrowed"]),
    ("Capital A/c", &["capital", "owner's capital"]),
    ("Creditors A/c", &["creditors", "accounts payable"]),
    (
        "Miscellaneous Expense A/c",
        &["expense a/c", "cash expense a/c", "general expense a/c", "expenses", "miscellaneous expense"],
    ),
];

/// Resolves free-form account names to standard ones
#[derive(Debug, Clone)]
pub struct AccountMap {
    fallback: String,
}

impl AccountMap {
    /// Create a map that sends unknown names to `fallback`
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Standard name for `input`, matched case-insensitively against known aliases
    pub fn standard_name(&self, input: &str) -> String {
        let needle = input.trim().to_lowercase();
        let found = STANDARD_ACCOUNTS.iter().find(|(standard, aliases)| {
            standard.to_lowercase() == needle || aliases.contains(&needle.as_str())
        });

        match found {
            Some((standard, _)) => standard.to_string(),
            None => {
                warn!(account = %needle, fallback = %self.fallback, "unrecognised account name");
                self.fallback.clone()
            }
        }
    }

    /// Every standard account name
    pub fn standard_names() -> impl Iterator<Item = &'static str> {
        STANDARD_ACCOUNTS.iter().map(|(standard, _)| *standard)
    }
}

impl Default for AccountMap {
    fn default() -> Self {
        Self::new("Miscellaneous Expense A/c")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_map_to_standard_names() {
        let map = AccountMap::default();
        assert_eq!(map.standard_name("Shop Rent"), "Rent Expense A/c");
        assert_eq!(map.standard_name(" cash "), "Cash A/c");
        assert_eq!(map.standard_name("Sales"), "Revenue A/c");
        assert_eq!(map.standard_name("accounts payable"), "Creditors A/c");
        assert_eq!(map.standard_name("Capital A/c"), "Capital A/c");
    }

    #[test]
    fn test_unknown_names_use_fallback() {
        let map = AccountMap::new("Suspense A/c");
        assert_eq!(map.standard_name("General Account"), "Suspense A/c");
        assert_eq!(map.fallback(), "Suspense A/c");
    }

    #[test]
    fn test_standard_names_are_unique() {
        let names: Vec<_> = AccountMap::standard_names().collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }
}
