//! # Card Batch
//!
//! A batch card-processing job: reads a fixed-width account master file and a
//! fixed-width transaction file, applies each transaction to its account, and
//! writes updated accounts, statements and rejected transactions.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: 2 implied decimal places via `rust_decimal`
//! - **Declarative layouts**: every record field is described once in [`layout`]
//! - **Ordered processing**: transactions are applied strictly in file order
//! - **All or nothing**: fatal errors abort before any output file is written
//!
//! ## Example
//!
//! ```
//! use card_batch::{process, Account, Decimal2, Ledger, Transaction, TxKind};
//!
//! let ledger = Ledger::from_accounts(vec![Account::new(
//!     "CARD0001        ",
//!     "ALICE",
//!     Decimal2::from_cents(500_000),
//!     Decimal2::ZERO,
//!     'A',
//! )]);
//! let purchase = Transaction {
//!     card_number: "CARD0001        ".to_string(),
//!     kind: TxKind::Purchase,
//!     amount: Decimal2::from_cents(12_500),
//!     description: "GROCERIES".to_string(),
//!     date: "20240115".to_string(),
//! };
//!
//! let outcome = process(ledger, vec![purchase]);
//! let alice = outcome.ledger.account("CARD0001        ").unwrap();
//! assert_eq!(alice.balance.to_string(), "125.00");
//! assert!(outcome.rejects.is_empty());
//! ```

pub mod account;
pub mod codec;
pub mod config;
pub mod decimal;
pub mod error;
pub mod layout;
pub mod ledger;
pub mod pipeline;
pub mod processor;
pub mod report;
pub mod transaction;
pub mod writer;

pub use account::Account;
pub use codec::{load_records, read_records, FixedWidthRecord};
pub use config::{BatchConfig, Cli};
pub use decimal::Decimal2;
pub use error::{BatchError, FieldError, Result};
pub use ledger::Ledger;
pub use processor::{process, ProcessingOutcome, ProcessingStats, TransactionProcessor};
pub use report::BatchReport;
pub use transaction::{RejectReason, RejectedTransaction, Transaction, TxKind};
pub use writer::{write_outputs, OutputFiles};
