//! End-to-end batch run: load, process, write.

use crate::account::Account;
use crate::codec::load_records;
use crate::config::BatchConfig;
use crate::error::{BatchError, Result};
use crate::ledger::Ledger;
use crate::processor;
use crate::report::BatchReport;
use crate::transaction::Transaction;
use crate::writer::write_outputs;
use log::info;

/// Runs one batch.
///
/// Both inputs are loaded before anything is processed. A missing or empty
/// input, or any malformed line, aborts the run without writing outputs.
pub fn run(config: &BatchConfig) -> Result<BatchReport> {
    let accounts: Vec<Account> = load_records(&config.accounts_path)?;
    info!("Loaded {} accounts", accounts.len());

    let transactions: Vec<Transaction> = load_records(&config.transactions_path)?;
    info!("Loaded {} transactions", transactions.len());

    if accounts.is_empty() {
        return Err(BatchError::EmptyInput {
            path: config.accounts_path.clone(),
        });
    }
    if transactions.is_empty() {
        return Err(BatchError::EmptyInput {
            path: config.transactions_path.clone(),
        });
    }

    let accounts_loaded = accounts.len();
    let transactions_loaded = transactions.len();

    info!("Processing transactions...");
    let outcome = processor::process(Ledger::from_accounts(accounts), transactions);

    let outputs = write_outputs(&config.output_dir, &outcome.ledger, &outcome.rejects)?;

    Ok(BatchReport {
        accounts_loaded,
        transactions_loaded,
        stats: outcome.stats,
        ledger: outcome.ledger,
        rejects: outcome.rejects,
        outputs,
    })
}
