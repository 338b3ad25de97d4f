//! Account registry scoped to a single generation run

use std::collections::HashMap;

use crate::types::*;
use crate::utils::validate_account_name;

/// Lookup-or-create store of ledger accounts keyed by name
///
/// Accounts live in a vector in first-referenced order; the map only holds
/// indices into it. A registry is created for one run and dropped after.
#[derive(Debug, Clone, Default)]
pub struct AccountRegistry {
    accounts: Vec<LedgerAccount>,
    index: HashMap<String, usize>,
}

impl AccountRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the account with this name, creating it if it has not been seen
    pub fn get_or_create(&mut self, name: &str) -> &mut LedgerAccount {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                let idx = self.accounts.len();
                self.accounts.push(LedgerAccount::new(name));
                self.index.insert(name.to_string(), idx);
                idx
            }
        };
        &mut self.accounts[idx]
    }

    /// Append a line to the named account
    pub fn append_line(&mut self, name: &str, line: LedgerLine) -> LedgerResult<()> {
        validate_account_name(name)?;
        self.get_or_create(name).entries.push(line);
        Ok(())
    }

    /// Look up an account without creating it
    pub fn get(&self, name: &str) -> Option<&LedgerAccount> {
        self.index.get(name).map(|&idx| &self.accounts[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Accounts in first-referenced order
    pub fn accounts(&self) -> impl Iterator<Item = &LedgerAccount> {
        self.accounts.iter()
    }

    pub(crate) fn accounts_mut(&mut self) -> impl Iterator<Item = &mut LedgerAccount> {
        self.accounts.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Consume the registry, yielding accounts in first-referenced order
    pub fn into_accounts(self) -> Vec<LedgerAccount> {
        self.accounts
    }
}
