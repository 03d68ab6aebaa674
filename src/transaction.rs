//! Transaction models and reject reasons.

use crate::decimal::Decimal2;
use std::fmt;

/// Transaction type, decoded from the single-character type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    /// `P`: adds to the balance.
    Purchase,

    /// `R`: subtracts from the balance.
    Refund,

    /// `F`: adds to the balance.
    Fee,

    /// `C`: credit or payment, subtracts from the balance.
    Payment,

    /// Any other code. Accepted without touching the balance.
    Other(char),
}

impl TxKind {
    pub fn from_code(code: char) -> Self {
        match code {
            'P' => TxKind::Purchase,
            'R' => TxKind::Refund,
            'F' => TxKind::Fee,
            'C' => TxKind::Payment,
            other => TxKind::Other(other),
        }
    }

    /// The type code as written in the transaction file.
    pub fn code(&self) -> char {
        match self {
            TxKind::Purchase => 'P',
            TxKind::Refund => 'R',
            TxKind::Fee => 'F',
            TxKind::Payment => 'C',
            TxKind::Other(c) => *c,
        }
    }

    /// Label used in progress logging.
    pub fn label(&self) -> &'static str {
        match self {
            TxKind::Purchase => "PURCHASE",
            TxKind::Refund => "REFUND",
            TxKind::Fee => "FEE",
            TxKind::Payment => "PAYMENT",
            TxKind::Other(_) => "UNKNOWN",
        }
    }
}

/// A transaction read from the transaction file. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// 16-character card number of the target account.
    pub card_number: String,

    pub kind: TxKind,

    /// Parsed from unsigned digits, so never negative; zero is possible.
    pub amount: Decimal2,

    /// Free text, at most 20 characters, trailing spaces removed.
    pub description: String,

    /// Opaque 8-character date, passed through unchanged.
    pub date: String,
}

/// Why a transaction was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Amount is zero or negative.
    BadAmount,

    /// No account with the transaction's card number.
    NoAccount,

    /// Target account has status `'B'`.
    Blocked,
}

impl RejectReason {
    /// Reason code written to the rejects file.
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::BadAmount => "BADAMT",
            RejectReason::NoAccount => "NOACCT",
            RejectReason::Blocked => "BLOCKED",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            RejectReason::BadAmount => "Invalid amount",
            RejectReason::NoAccount => "Account not found",
            RejectReason::Blocked => "Account blocked",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A transaction that failed validation, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedTransaction {
    pub transaction: Transaction,
    pub reason: RejectReason,
}
