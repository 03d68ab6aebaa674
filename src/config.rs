//! Run configuration and command line parsing.

use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_ACCOUNTS_PATH: &str = "data/ACCOUNTS.IN";
pub const DEFAULT_TRANSACTIONS_PATH: &str = "data/TXNS.IN";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Input and output locations for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub accounts_path: PathBuf,
    pub transactions_path: PathBuf,

    /// Directory receiving `ACCOUNTS.OUT`, `STATEMENTS.OUT` and `REJECTS.OUT`.
    pub output_dir: PathBuf,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            accounts_path: PathBuf::from(DEFAULT_ACCOUNTS_PATH),
            transactions_path: PathBuf::from(DEFAULT_TRANSACTIONS_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Apply a fixed-width transaction file to a fixed-width account master file
#[derive(Parser, Debug)]
#[command(name = "card-batch", version)]
#[command(about = "Apply card transactions to an account master file", long_about = None)]
pub struct Cli {
    /// Account master file (52-character records)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_ACCOUNTS_PATH)]
    pub accounts: PathBuf,

    /// Transaction file (52-character records)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_TRANSACTIONS_PATH)]
    pub transactions: PathBuf,

    /// Directory for the output files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

impl From<Cli> for BatchConfig {
    fn from(cli: Cli) -> Self {
        BatchConfig {
            accounts_path: cli.accounts,
            transactions_path: cli.transactions,
            output_dir: cli.output_dir,
        }
    }
}
