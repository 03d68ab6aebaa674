//! Output file rendering.
//!
//! Three outputs are produced from the final ledger and the rejects:
//!
//! - `ACCOUNTS.OUT`: the account master layout, ready to be fed back in
//! - `STATEMENTS.OUT`: space-separated balances with an over-limit marker
//! - `REJECTS.OUT`: space-separated rejected transactions with reason codes
//!
//! Records keep ledger order and reject order; nothing is sorted.

use crate::codec::FixedWidthRecord;
use crate::error::{BatchError, Result};
use crate::ledger::Ledger;
use crate::transaction::RejectedTransaction;
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const ACCOUNTS_FILE: &str = "ACCOUNTS.OUT";
pub const STATEMENTS_FILE: &str = "STATEMENTS.OUT";
pub const REJECTS_FILE: &str = "REJECTS.OUT";

const OVERLIMIT_MARKER: &str = "OVERLIMIT";

/// Paths of the written output files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub accounts: PathBuf,
    pub statements: PathBuf,
    pub rejects: PathBuf,
}

/// Writes every account in the 52-character master layout.
pub fn write_accounts<W: Write>(ledger: &Ledger, mut writer: W) -> Result<()> {
    for account in ledger {
        let line = account.encode().map_err(|source| BatchError::Encode {
            record: "account",
            source,
        })?;
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes one statement line per account.
pub fn write_statements<W: Write>(ledger: &Ledger, mut writer: W) -> Result<()> {
    for account in ledger {
        let marker = if account.overlimit { OVERLIMIT_MARKER } else { "" };
        writeln!(
            writer,
            "{} {:<20} {:>10} {} {:<9}",
            account.card_number,
            account.name,
            account.balance.to_string(),
            account.status,
            marker
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes one line per rejected transaction.
pub fn write_rejects<W: Write>(rejects: &[RejectedTransaction], mut writer: W) -> Result<()> {
    for rejected in rejects {
        let tx = &rejected.transaction;
        writeln!(
            writer,
            "{} {} {:>9} {:<20} {} {:<8}",
            tx.card_number,
            tx.kind.code(),
            tx.amount.to_string(),
            tx.description,
            tx.date,
            rejected.reason.code()
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Renders all three outputs and writes them into `dir`.
///
/// Everything is rendered in memory first, so an encoding failure leaves no
/// output files behind.
pub fn write_outputs(
    dir: &Path,
    ledger: &Ledger,
    rejects: &[RejectedTransaction],
) -> Result<OutputFiles> {
    let mut accounts = Vec::new();
    write_accounts(ledger, &mut accounts)?;

    let mut statements = Vec::new();
    write_statements(ledger, &mut statements)?;

    let mut reject_lines = Vec::new();
    write_rejects(rejects, &mut reject_lines)?;

    fs::create_dir_all(dir)?;
    let files = OutputFiles {
        accounts: dir.join(ACCOUNTS_FILE),
        statements: dir.join(STATEMENTS_FILE),
        rejects: dir.join(REJECTS_FILE),
    };

    fs::write(&files.accounts, accounts)?;
    debug!("Wrote {}", files.accounts.display());
    fs::write(&files.statements, statements)?;
    debug!("Wrote {}", files.statements.display());
    fs::write(&files.rejects, reject_lines)?;
    debug!("Wrote {}", files.rejects.display());

    info!(
        "Output files created: {} ({} records), {} ({} records), {} ({} records)",
        ACCOUNTS_FILE,
        ledger.len(),
        STATEMENTS_FILE,
        ledger.len(),
        REJECTS_FILE,
        rejects.len()
    );

    Ok(files)
}
