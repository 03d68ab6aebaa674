//! In-memory account ledger.

use crate::account::Account;
use log::warn;
use std::collections::HashMap;

/// Accounts in input order, with a card number index for lookup.
///
/// If the account file repeats a card number, lookups resolve to the first
/// occurrence; later duplicates are kept for output but never matched.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    accounts: Vec<Account>,

    /// Card number to position of its first occurrence in `accounts`.
    index: HashMap<String, usize>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from accounts in file order.
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        let mut ledger = Ledger {
            accounts: Vec::with_capacity(accounts.len()),
            index: HashMap::with_capacity(accounts.len()),
        };
        for account in accounts {
            ledger.push(account);
        }
        ledger
    }

    /// Appends an account, keeping any earlier account with the same card number
    /// as the lookup target.
    pub fn push(&mut self, account: Account) {
        let position = self.accounts.len();
        if self.index.contains_key(&account.card_number) {
            warn!(
                "Duplicate card number {:?} at record {}, lookups use the first occurrence",
                account.card_number,
                position + 1
            );
        } else {
            self.index.insert(account.card_number.clone(), position);
        }
        self.accounts.push(account);
    }

    /// Position of the account whose card number exactly equals `card_number`.
    pub fn find(&self, card_number: &str) -> Option<usize> {
        self.index.get(card_number).copied()
    }

    pub fn get(&self, position: usize) -> Option<&Account> {
        self.accounts.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Account> {
        self.accounts.get_mut(position)
    }

    /// Looks up an account by card number.
    pub fn account(&self, card_number: &str) -> Option<&Account> {
        self.find(card_number).and_then(|pos| self.get(pos))
    }

    /// Iterates accounts in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn into_accounts(self) -> Vec<Account> {
        self.accounts
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Account;
    type IntoIter = std::slice::Iter<'a, Account>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Decimal2;

    fn account(card: &str, name: &str) -> Account {
        Account::new(card, name, Decimal2::from_cents(100_000), Decimal2::ZERO, 'A')
    }

    #[test]
    fn test_find_by_exact_card_number() {
        let ledger = Ledger::from_accounts(vec![
            account("CARD0001        ", "ALICE"),
            account("CARD0002        ", "BOB"),
        ]);

        assert_eq!(ledger.find("CARD0002        "), Some(1));
        assert_eq!(ledger.find("CARD0002"), None);
        assert_eq!(ledger.find("CARD0003        "), None);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let ledger = Ledger::from_accounts(vec![
            account("CARD0001        ", "FIRST"),
            account("CARD0002        ", "OTHER"),
            account("CARD0001        ", "SECOND"),
        ]);

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.find("CARD0001        "), Some(0));
        assert_eq!(ledger.account("CARD0001        ").unwrap().name, "FIRST");
    }

    #[test]
    fn test_iteration_preserves_input_order() {
        let ledger = Ledger::from_accounts(vec![
            account("CARD0003        ", "C"),
            account("CARD0001        ", "A"),
            account("CARD0002        ", "B"),
        ]);

        let names: Vec<&str> = ledger.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut ledger = Ledger::from_accounts(vec![account("CARD0001        ", "ALICE")]);
        let pos = ledger.find("CARD0001        ").unwrap();
        ledger.get_mut(pos).unwrap().charge(Decimal2::from_cents(500));

        assert_eq!(ledger.get(pos).unwrap().balance.to_string(), "5.00");
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.find("CARD0001        "), None);
    }
}
