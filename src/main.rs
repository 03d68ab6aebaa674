//! Card Batch CLI
//!
//! Applies a fixed-width transaction file to a fixed-width account master file
//! and writes `ACCOUNTS.OUT`, `STATEMENTS.OUT` and `REJECTS.OUT`.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --accounts data/ACCOUNTS.IN --transactions data/TXNS.IN --output-dir .
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: logging verbosity, `info` by default (progress per transaction)

use card_batch::{pipeline, BatchConfig, Cli, Result};
use clap::Parser;
use env_logger::Env;
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = BatchConfig::from(Cli::parse());

    let report = pipeline::run(&config)?;
    print!("{}", report);

    Ok(())
}
