//! Fixed-width decoding and encoding of account and transaction records.
//!
//! Field positions come from [`crate::layout`]; this module only maps them to
//! typed values and back.

use crate::account::Account;
use crate::decimal::Decimal2;
use crate::error::{BatchError, FieldError, Result};
use crate::layout::{self, FieldValue, Layout};
use crate::transaction::{Transaction, TxKind};
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A record stored as one fixed-width line.
pub trait FixedWidthRecord: Sized {
    /// Field layout shared by `decode` and `encode`.
    const LAYOUT: Layout;

    /// Decodes a single line. Characters beyond the layout width are ignored.
    fn decode(line: &str) -> std::result::Result<Self, FieldError>;

    /// Encodes into a line of exactly `LAYOUT.width` characters.
    fn encode(&self) -> std::result::Result<String, FieldError>;
}

impl FixedWidthRecord for Account {
    const LAYOUT: Layout = layout::account::LAYOUT;

    fn decode(line: &str) -> std::result::Result<Self, FieldError> {
        use layout::account::*;

        LAYOUT.check_width(line)?;

        let magnitude = BALANCE.digits(line)? as i64;
        let balance = if BALANCE_SIGN.is_negative(line)? {
            -magnitude
        } else {
            magnitude
        };

        Ok(Account::new(
            CARD_NUMBER.slice(line)?,
            NAME.text(line)?,
            Decimal2::from_cents(CREDIT_LIMIT.digits(line)? as i64),
            Decimal2::from_cents(balance),
            STATUS.code(line)?,
        ))
    }

    fn encode(&self) -> std::result::Result<String, FieldError> {
        Self::LAYOUT.encode(&[
            FieldValue::Text(&self.card_number),
            FieldValue::Text(&self.name),
            FieldValue::Digits(self.credit_limit.cents().unsigned_abs()),
            FieldValue::Digits(self.balance.cents().unsigned_abs()),
            FieldValue::Sign {
                negative: self.balance.is_negative(),
            },
            FieldValue::Code(self.status),
        ])
    }
}

impl FixedWidthRecord for Transaction {
    const LAYOUT: Layout = layout::transaction::LAYOUT;

    fn decode(line: &str) -> std::result::Result<Self, FieldError> {
        use layout::transaction::*;

        LAYOUT.check_width(line)?;

        Ok(Transaction {
            card_number: CARD_NUMBER.slice(line)?.to_string(),
            kind: TxKind::from_code(TYPE.code(line)?),
            amount: Decimal2::from_cents(AMOUNT.digits(line)? as i64),
            description: DESCRIPTION.text(line)?.to_string(),
            date: DATE.slice(line)?.to_string(),
        })
    }

    fn encode(&self) -> std::result::Result<String, FieldError> {
        Self::LAYOUT.encode(&[
            FieldValue::Text(&self.card_number),
            FieldValue::Code(self.kind.code()),
            FieldValue::Digits(self.amount.cents().unsigned_abs()),
            FieldValue::Text(&self.description),
            FieldValue::Text(&self.date),
        ])
    }
}

/// Decodes every non-blank line of `reader`, in order.
///
/// Whitespace-only lines are skipped. The first line that fails to decode
/// aborts the read with its 1-based line number.
pub fn read_records<T: FixedWidthRecord, R: BufRead>(reader: R) -> Result<Vec<T>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        if line.trim().is_empty() {
            debug!("{} line {}: blank, skipped", T::LAYOUT.name, line_no);
            continue;
        }

        let record = T::decode(&line).map_err(|source| BatchError::Malformed {
            record: T::LAYOUT.name,
            line: line_no,
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Opens `path` and decodes all of its records.
pub fn load_records<T: FixedWidthRecord>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => BatchError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => BatchError::Io(e),
    })?;

    read_records(BufReader::new(file))
}
