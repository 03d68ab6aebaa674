//! Card account model and operations.
//!
//! The over-limit flag is monotonic: once set during a run it is never cleared.

use crate::decimal::Decimal2;

/// Status code marking an account as blocked.
pub const BLOCKED_STATUS: char = 'B';

/// Represents a card account loaded from the account master file.
///
/// # Invariants
///
/// - `card_number` identifies the account within the ledger
/// - Once `overlimit == true`, it stays true for the rest of the run
/// - An account with status `'B'` is never mutated by the processor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// 16-character card number, kept exactly as read (including padding).
    pub card_number: String,

    /// Display name, at most 20 characters, trailing spaces removed.
    pub name: String,

    /// Credit limit. Never negative.
    pub credit_limit: Decimal2,

    /// Current balance. Positive means the cardholder owes money.
    pub balance: Decimal2,

    /// Single character status code; `'B'` means blocked.
    pub status: char,

    /// Balance exceeded the credit limit at some point during this run.
    pub overlimit: bool,
}

impl Account {
    /// Creates an active account with the given limit and balance.
    pub fn new(
        card_number: impl Into<String>,
        name: impl Into<String>,
        credit_limit: Decimal2,
        balance: Decimal2,
        status: char,
    ) -> Self {
        Account {
            card_number: card_number.into(),
            name: name.into(),
            credit_limit,
            balance,
            status,
            overlimit: false,
        }
    }

    /// Returns `true` if the account rejects all transactions.
    pub fn is_blocked(&self) -> bool {
        self.status == BLOCKED_STATUS
    }

    /// Adds to the balance (purchases and fees).
    pub fn charge(&mut self, amount: Decimal2) {
        self.balance += amount;
    }

    /// Subtracts from the balance (refunds and payments).
    pub fn credit(&mut self, amount: Decimal2) {
        self.balance -= amount;
    }

    /// Sets the over-limit flag if the balance is above the credit limit.
    ///
    /// Returns `true` if the balance is currently over the limit. The flag
    /// itself is never cleared.
    pub fn refresh_overlimit(&mut self) -> bool {
        let over = self.balance > self.credit_limit;
        if over {
            self.overlimit = true;
        }
        over
    }
}
