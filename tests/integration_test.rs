//! Integration tests for the card batch CLI.
//!
//! These tests run the actual binary against input files in a temporary
//! directory and verify the three output files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ACCOUNTS_IN: &str = "\
CARD0001        ALICE               05000000000000+A
CARD0002        BOB                 01000000005000-A
CARD0003        CAROL               02000000010000+B
";

const TXNS_IN: &str = "\
CARD0001        P0012500GROCERIES           20240115
CARD0001        P0600000TELEVISION          20240116
CARD0002        C0002000PAYMENT             20240116
CARD0002        F0000500LATE FEE            20240117
CARD0003        P0001000BOOKS               20240117
CARD9999        P0004550UNKNOWN STORE       20240118
CARD0001        P0000000ZERO CHARGE         20240118
CARD0001        R0010000RETURN              20240119
";

/// Writes the inputs into `dir/data` and returns the command, run from `dir`.
fn setup(dir: &Path, accounts: Option<&str>, txns: Option<&str>) -> Command {
    let data = dir.join("data");
    fs::create_dir_all(&data).unwrap();
    if let Some(body) = accounts {
        fs::write(data.join("ACCOUNTS.IN"), body).unwrap();
    }
    if let Some(body) = txns {
        fs::write(data.join("TXNS.IN"), body).unwrap();
    }

    let mut cmd = Command::cargo_bin("card-batch").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

#[test]
fn test_default_paths_produce_all_outputs() {
    let dir = TempDir::new().unwrap();
    setup(dir.path(), Some(ACCOUNTS_IN), Some(TXNS_IN))
        .assert()
        .success()
        .stdout(predicate::str::contains("Final Account Balances:"))
        .stdout(predicate::str::contains("Rejected Transactions: 3"));

    let accounts = read(dir.path(), "ACCOUNTS.OUT");
    assert_eq!(
        accounts,
        "\
CARD0001        ALICE               05000000602500+A
CARD0002        BOB                 01000000006500-A
CARD0003        CAROL               02000000010000+B
"
    );

    let statements = read(dir.path(), "STATEMENTS.OUT");
    assert_eq!(
        statements.lines().collect::<Vec<_>>(),
        vec![
            "CARD0001         ALICE                   6025.00 A OVERLIMIT",
            "CARD0002         BOB                      -65.00 A          ",
            "CARD0003         CAROL                    100.00 B          ",
        ]
    );

    let rejects = read(dir.path(), "REJECTS.OUT");
    assert_eq!(
        rejects.lines().collect::<Vec<_>>(),
        vec![
            "CARD0003         P     10.00 BOOKS                20240117 BLOCKED ",
            "CARD9999         P     45.50 UNKNOWN STORE        20240118 NOACCT  ",
            "CARD0001         P      0.00 ZERO CHARGE          20240118 BADAMT  ",
        ]
    );
}

#[test]
fn test_explicit_paths_and_output_dir() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    let out = dir.path().join("out");

    setup(dir.path(), Some(ACCOUNTS_IN), Some(TXNS_IN))
        .arg("--accounts")
        .arg(data.join("ACCOUNTS.IN"))
        .arg("--transactions")
        .arg(data.join("TXNS.IN"))
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("ACCOUNTS.OUT").exists());
    assert!(out.join("STATEMENTS.OUT").exists());
    assert!(out.join("REJECTS.OUT").exists());
    assert!(!dir.path().join("ACCOUNTS.OUT").exists());
}

#[test]
fn test_accounts_output_can_be_reprocessed() {
    let dir = TempDir::new().unwrap();
    setup(dir.path(), Some(ACCOUNTS_IN), Some(TXNS_IN))
        .assert()
        .success();
    let first = read(dir.path(), "ACCOUNTS.OUT");

    let rerun = TempDir::new().unwrap();
    setup(
        rerun.path(),
        Some(first.as_str()),
        Some("CARD0002        P0006500ADJUSTMENT          20240120\n"),
    )
    .assert()
    .success();

    assert!(read(rerun.path(), "ACCOUNTS.OUT")
        .contains("CARD0002        BOB                 01000000000000+A"));
}

#[test]
fn test_missing_accounts_file_fails_without_output() {
    let dir = TempDir::new().unwrap();
    setup(dir.path(), None, Some(TXNS_IN))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find"))
        .stderr(predicate::str::contains("ACCOUNTS.IN"));

    assert!(!dir.path().join("ACCOUNTS.OUT").exists());
    assert!(!dir.path().join("REJECTS.OUT").exists());
}

#[test]
fn test_missing_transactions_file_fails_without_output() {
    let dir = TempDir::new().unwrap();
    setup(dir.path(), Some(ACCOUNTS_IN), None)
        .assert()
        .failure()
        .stderr(predicate::str::contains("TXNS.IN"));

    assert!(!dir.path().join("STATEMENTS.OUT").exists());
}

#[test]
fn test_empty_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    setup(dir.path(), Some(""), Some(TXNS_IN))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No records found"));

    assert!(!dir.path().join("ACCOUNTS.OUT").exists());
}

#[test]
fn test_malformed_line_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let txns = format!("{}CARD0001        P00ABC00BROKEN              20240120\n", TXNS_IN);

    setup(dir.path(), Some(ACCOUNTS_IN), Some(txns.as_str()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed transaction record at line 9"));

    assert!(!dir.path().join("ACCOUNTS.OUT").exists());
}
