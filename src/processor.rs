//! Core transaction processor.
//!
//! Applies transactions to the ledger in file order. Each transaction is
//! validated in a fixed sequence (amount, account, status) and either rejected
//! or applied exactly once. There is no rollback across transactions.

use crate::account::Account;
use crate::ledger::Ledger;
use crate::transaction::{RejectReason, RejectedTransaction, Transaction, TxKind};
use log::{debug, info, warn};

/// Counters collected while processing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Transactions that changed a balance.
    pub applied: usize,

    /// Transactions with an unrecognised type code. Accepted, no balance effect.
    pub passed_through: usize,

    pub rejected: usize,
}

impl ProcessingStats {
    pub fn total(&self) -> usize {
        self.applied + self.passed_through + self.rejected
    }
}

/// Final state after all transactions have been applied.
#[derive(Debug, Clone)]
pub struct ProcessingOutcome {
    pub ledger: Ledger,

    /// Rejected transactions in input order.
    pub rejects: Vec<RejectedTransaction>,

    pub stats: ProcessingStats,
}

/// The transaction processor.
///
/// Owns the ledger for the duration of the run and hands it back, together
/// with the rejects, from [`TransactionProcessor::finish`].
pub struct TransactionProcessor {
    ledger: Ledger,
    rejects: Vec<RejectedTransaction>,
    stats: ProcessingStats,
}

impl TransactionProcessor {
    pub fn new(ledger: Ledger) -> Self {
        TransactionProcessor {
            ledger,
            rejects: Vec::new(),
            stats: ProcessingStats::default(),
        }
    }

    /// Processes transactions in iteration order.
    pub fn process_all<I>(&mut self, transactions: I)
    where
        I: IntoIterator<Item = Transaction>,
    {
        for (idx, tx) in transactions.into_iter().enumerate() {
            self.process_transaction(tx, idx + 1);
        }
    }

    /// Validates and applies a single transaction.
    ///
    /// Returns the reject reason if the transaction was rejected.
    pub fn process_transaction(&mut self, tx: Transaction, seq: usize) -> Option<RejectReason> {
        let position = match self.validate(&tx) {
            Ok(position) => position,
            Err(reason) => {
                warn!(
                    "Txn {}: REJECTED {} - {} ({})",
                    seq,
                    tx.description,
                    reason.describe(),
                    reason
                );
                self.stats.rejected += 1;
                self.rejects.push(RejectedTransaction {
                    transaction: tx,
                    reason,
                });
                return Some(reason);
            }
        };

        // Safety: validate returned a position taken from the ledger index
        let account = self
            .ledger
            .get_mut(position)
            .expect("validated position exists");
        if apply(account, &tx, seq) {
            self.stats.applied += 1;
        } else {
            self.stats.passed_through += 1;
        }

        if account.refresh_overlimit() {
            warn!(
                "Txn {}: OVER LIMIT on {} (limit {}, balance {})",
                seq, account.name, account.credit_limit, account.balance
            );
        }

        None
    }

    /// Checks amount, account existence and block status, in that order.
    ///
    /// Returns the ledger position of the target account on success.
    pub fn validate(&self, tx: &Transaction) -> Result<usize, RejectReason> {
        if !tx.amount.is_positive() {
            return Err(RejectReason::BadAmount);
        }

        let position = self
            .ledger
            .find(&tx.card_number)
            .ok_or(RejectReason::NoAccount)?;

        match self.ledger.get(position) {
            Some(account) if account.is_blocked() => Err(RejectReason::Blocked),
            Some(_) => Ok(position),
            None => Err(RejectReason::NoAccount),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn rejects(&self) -> &[RejectedTransaction] {
        &self.rejects
    }

    pub fn stats(&self) -> ProcessingStats {
        self.stats
    }

    /// Consumes the processor, returning the final ledger and rejects.
    pub fn finish(self) -> ProcessingOutcome {
        ProcessingOutcome {
            ledger: self.ledger,
            rejects: self.rejects,
            stats: self.stats,
        }
    }
}

/// Applies a validated transaction to its account.
///
/// Returns `false` for unrecognised type codes, which leave the balance as is.
fn apply(account: &mut Account, tx: &Transaction, seq: usize) -> bool {
    let old_balance = account.balance;

    match tx.kind {
        TxKind::Purchase | TxKind::Fee => account.charge(tx.amount),
        TxKind::Refund | TxKind::Payment => account.credit(tx.amount),
        TxKind::Other(code) => {
            warn!(
                "Txn {}: unknown type {:?} on {}, accepted with no balance change",
                seq, code, account.name
            );
            return false;
        }
    }

    info!(
        "{}: {} on {} - Balance: {} -> {}",
        tx.kind.label(),
        tx.amount,
        account.name,
        old_balance,
        account.balance
    );
    debug!("Txn {}: applied to {:?}", seq, account.card_number);
    true
}

/// Applies `transactions` to `ledger` in order and returns the outcome.
pub fn process<I>(ledger: Ledger, transactions: I) -> ProcessingOutcome
where
    I: IntoIterator<Item = Transaction>,
{
    let mut processor = TransactionProcessor::new(ledger);
    processor.process_all(transactions);
    processor.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Decimal2;

    const ALICE: &str = "CARD0001        ";
    const BOB: &str = "CARD0002        ";

    fn ledger() -> Ledger {
        Ledger::from_accounts(vec![
            Account::new(ALICE, "ALICE", Decimal2::from_cents(500_000), Decimal2::ZERO, 'A'),
            Account::new(BOB, "BOB", Decimal2::from_cents(100_000), Decimal2::ZERO, 'B'),
        ])
    }

    fn tx(card: &str, code: char, cents: i64) -> Transaction {
        Transaction {
            card_number: card.to_string(),
            kind: TxKind::from_code(code),
            amount: Decimal2::from_cents(cents),
            description: "TEST".to_string(),
            date: "20240115".to_string(),
        }
    }

    fn balance(outcome: &ProcessingOutcome, card: &str) -> String {
        outcome.ledger.account(card).unwrap().balance.to_string()
    }

    #[test]
    fn test_purchase_then_overlimit() {
        let outcome = process(ledger(), vec![tx(ALICE, 'P', 12_500)]);
        assert_eq!(balance(&outcome, ALICE), "125.00");
        assert!(!outcome.ledger.account(ALICE).unwrap().overlimit);

        let outcome = process(
            outcome.ledger,
            vec![tx(ALICE, 'P', 600_000)],
        );
        assert_eq!(balance(&outcome, ALICE), "6125.00");
        assert!(outcome.ledger.account(ALICE).unwrap().overlimit);
        assert!(outcome.rejects.is_empty());
    }

    #[test]
    fn test_type_effects() {
        let outcome = process(
            ledger(),
            vec![
                tx(ALICE, 'P', 10_000),
                tx(ALICE, 'F', 500),
                tx(ALICE, 'R', 2_000),
                tx(ALICE, 'C', 3_000),
            ],
        );

        assert_eq!(balance(&outcome, ALICE), "55.00");
        assert_eq!(outcome.stats.applied, 4);
    }

    #[test]
    fn test_zero_amount_is_bad_amount() {
        let outcome = process(ledger(), vec![tx(ALICE, 'P', 0)]);

        assert_eq!(outcome.rejects.len(), 1);
        assert_eq!(outcome.rejects[0].reason, RejectReason::BadAmount);
        assert_eq!(balance(&outcome, ALICE), "0.00");
    }

    #[test]
    fn test_bad_amount_checked_before_account() {
        let outcome = process(ledger(), vec![tx("CARD9999        ", 'P', 0)]);
        assert_eq!(outcome.rejects[0].reason, RejectReason::BadAmount);
    }

    #[test]
    fn test_unknown_card_is_no_account() {
        let outcome = process(ledger(), vec![tx("CARD9999        ", 'P', 100)]);
        assert_eq!(outcome.rejects[0].reason, RejectReason::NoAccount);
    }

    #[test]
    fn test_blocked_account_rejects_valid_transaction() {
        let outcome = process(ledger(), vec![tx(BOB, 'C', 100)]);

        assert_eq!(outcome.rejects[0].reason, RejectReason::Blocked);
        assert_eq!(balance(&outcome, BOB), "0.00");
    }

    #[test]
    fn test_unknown_type_is_accepted_without_effect() {
        let outcome = process(ledger(), vec![tx(ALICE, 'X', 100)]);

        assert!(outcome.rejects.is_empty());
        assert_eq!(balance(&outcome, ALICE), "0.00");
        assert_eq!(outcome.stats.passed_through, 1);
        assert_eq!(outcome.stats.applied, 0);
    }

    #[test]
    fn test_overlimit_survives_later_refund() {
        let outcome = process(
            ledger(),
            vec![tx(ALICE, 'P', 600_000), tx(ALICE, 'R', 600_000)],
        );

        let alice = outcome.ledger.account(ALICE).unwrap();
        assert_eq!(alice.balance.to_string(), "0.00");
        assert!(alice.overlimit);
    }

    #[test]
    fn test_rejects_keep_input_order() {
        let outcome = process(
            ledger(),
            vec![
                tx(BOB, 'P', 100),
                tx(ALICE, 'P', 100),
                tx("CARD9999        ", 'P', 100),
                tx(ALICE, 'P', 0),
            ],
        );

        let reasons: Vec<RejectReason> = outcome.rejects.iter().map(|r| r.reason).collect();
        assert_eq!(
            reasons,
            vec![
                RejectReason::Blocked,
                RejectReason::NoAccount,
                RejectReason::BadAmount
            ]
        );
        assert_eq!(outcome.stats.total(), 4);
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let processor = TransactionProcessor::new(ledger());
        assert_eq!(processor.validate(&tx(ALICE, 'P', 100)), Ok(0));
        assert_eq!(
            processor.validate(&tx(BOB, 'P', 100)),
            Err(RejectReason::Blocked)
        );
        assert!(processor.rejects().is_empty());
        assert_eq!(processor.stats(), ProcessingStats::default());
    }
}
