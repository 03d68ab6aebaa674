//! Operator summary for a completed run.

use crate::ledger::Ledger;
use crate::processor::ProcessingStats;
use crate::transaction::RejectedTransaction;
use crate::writer::OutputFiles;
use std::fmt;

const RULE_WIDTH: usize = 60;

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub accounts_loaded: usize,
    pub transactions_loaded: usize,
    pub stats: ProcessingStats,
    pub ledger: Ledger,
    pub rejects: Vec<RejectedTransaction>,
    pub outputs: OutputFiles,
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(
            f,
            "Processed {} transactions against {} accounts: {} applied, {} passed through, {} rejected",
            self.transactions_loaded,
            self.accounts_loaded,
            self.stats.applied,
            self.stats.passed_through,
            self.stats.rejected
        )?;

        writeln!(f, "\nOutput files created:")?;
        writeln!(f, "  - {} ({} records)", self.outputs.accounts.display(), self.ledger.len())?;
        writeln!(f, "  - {} ({} records)", self.outputs.statements.display(), self.ledger.len())?;
        writeln!(f, "  - {} ({} records)", self.outputs.rejects.display(), self.rejects.len())?;

        writeln!(f, "\nFinal Account Balances:")?;
        writeln!(f, "{}", rule)?;
        for account in &self.ledger {
            write!(
                f,
                "{:<20} Balance: ${:>10}  Status: {}",
                account.name,
                account.balance.to_string(),
                account.status
            )?;
            if account.overlimit {
                write!(f, " OVER LIMIT")?;
            }
            writeln!(f)?;
        }

        if !self.rejects.is_empty() {
            writeln!(f, "\nRejected Transactions: {}", self.rejects.len())?;
            for rejected in &self.rejects {
                writeln!(
                    f,
                    "  - {:<20} Reason: {}",
                    rejected.transaction.description, rejected.reason
                )?;
            }
        }

        Ok(())
    }
}
