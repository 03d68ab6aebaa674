//! Declarative fixed-width record layouts.
//!
//! Each record kind is described once as an ordered list of fields with a
//! start offset, a length and a kind. Decoding slices fields out of a line and
//! encoding renders values back into the same positions, so the 52-byte
//! contract of both input files lives in this module only.

use crate::error::FieldError;

/// How a field's characters are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, right-padded with spaces.
    Text,
    /// Unsigned zero-padded ASCII digits.
    Digits,
    /// A single sign character: `-` is negative, anything else positive.
    Sign,
    /// A single code character.
    Code,
}

/// One field of a fixed-width record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub start: usize,
    pub len: usize,
    pub kind: FieldKind,
}

impl Field {
    const fn new(name: &'static str, start: usize, len: usize, kind: FieldKind) -> Self {
        Field {
            name,
            start,
            len,
            kind,
        }
    }

    /// Offset one past the last character of the field.
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Returns the raw characters of this field.
    ///
    /// The caller is expected to have checked the line width against the
    /// layout first.
    pub fn slice<'a>(&self, line: &'a str) -> Result<&'a str, FieldError> {
        if line.len() < self.end() {
            return Err(FieldError::TooShort {
                expected: self.end(),
                found: line.len(),
            });
        }
        line.get(self.start..self.end())
            .ok_or(FieldError::NotAscii { field: self.name })
    }

    /// Returns the field as text with trailing whitespace removed.
    pub fn text<'a>(&self, line: &'a str) -> Result<&'a str, FieldError> {
        Ok(self.slice(line)?.trim_end())
    }

    /// Parses the field as unsigned digits.
    pub fn digits(&self, line: &str) -> Result<u64, FieldError> {
        let raw = self.slice(line)?;
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldError::NonDigit {
                field: self.name,
                value: raw.to_string(),
            });
        }
        raw.parse().map_err(|_| FieldError::NonDigit {
            field: self.name,
            value: raw.to_string(),
        })
    }

    /// Returns `true` if the field holds a `-` sign.
    pub fn is_negative(&self, line: &str) -> Result<bool, FieldError> {
        Ok(self.slice(line)? == "-")
    }

    /// Returns the single code character of the field.
    pub fn code(&self, line: &str) -> Result<char, FieldError> {
        self.slice(line)?
            .chars()
            .next()
            .ok_or(FieldError::NotAscii { field: self.name })
    }
}

/// A value to be rendered into a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Digits(u128),
    Sign { negative: bool },
    Code(char),
}

/// An ordered, contiguous list of fields making up one record.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub name: &'static str,
    pub width: usize,
    pub fields: &'static [Field],
}

impl Layout {
    /// Fails if the line is shorter than the record width.
    pub fn check_width(&self, line: &str) -> Result<(), FieldError> {
        if line.len() < self.width {
            return Err(FieldError::TooShort {
                expected: self.width,
                found: line.len(),
            });
        }
        Ok(())
    }

    /// Renders one value per field, in layout order, into a record of exactly
    /// `width` characters.
    pub fn encode(&self, values: &[FieldValue<'_>]) -> Result<String, FieldError> {
        if values.len() != self.fields.len() {
            return Err(FieldError::ValueCount {
                layout: self.name,
                expected: self.fields.len(),
                found: values.len(),
            });
        }

        let mut out = String::with_capacity(self.width);
        for (field, value) in self.fields.iter().zip(values) {
            debug_assert_eq!(out.len(), field.start, "layout `{}` has a gap", self.name);
            let rendered = match (field.kind, *value) {
                (FieldKind::Text, FieldValue::Text(s)) => {
                    format!("{:<width$}", s, width = field.len)
                }
                (FieldKind::Digits, FieldValue::Digits(n)) => {
                    format!("{:0width$}", n, width = field.len)
                }
                (FieldKind::Sign, FieldValue::Sign { negative }) => {
                    String::from(if negative { "-" } else { "+" })
                }
                (FieldKind::Code, FieldValue::Code(c)) => c.to_string(),
                _ => return Err(FieldError::KindMismatch { field: field.name }),
            };
            if rendered.len() != field.len {
                return Err(FieldError::Overflow {
                    field: field.name,
                    width: field.len,
                    value: rendered,
                });
            }
            out.push_str(&rendered);
        }
        Ok(out)
    }
}

/// Account master record: 52 characters.
pub mod account {
    use super::{Field, FieldKind, Layout};

    pub const CARD_NUMBER: Field = Field::new("card_number", 0, 16, FieldKind::Text);
    pub const NAME: Field = Field::new("name", 16, 20, FieldKind::Text);
    pub const CREDIT_LIMIT: Field = Field::new("credit_limit", 36, 7, FieldKind::Digits);
    pub const BALANCE: Field = Field::new("balance", 43, 7, FieldKind::Digits);
    pub const BALANCE_SIGN: Field = Field::new("balance_sign", 50, 1, FieldKind::Sign);
    pub const STATUS: Field = Field::new("status", 51, 1, FieldKind::Code);

    pub const LAYOUT: Layout = Layout {
        name: "account",
        width: 52,
        fields: &[CARD_NUMBER, NAME, CREDIT_LIMIT, BALANCE, BALANCE_SIGN, STATUS],
    };
}

/// Transaction record: 52 characters.
pub mod transaction {
    use super::{Field, FieldKind, Layout};

    pub const CARD_NUMBER: Field = Field::new("card_number", 0, 16, FieldKind::Text);
    pub const TYPE: Field = Field::new("type", 16, 1, FieldKind::Code);
    pub const AMOUNT: Field = Field::new("amount", 17, 7, FieldKind::Digits);
    pub const DESCRIPTION: Field = Field::new("description", 24, 20, FieldKind::Text);
    pub const DATE: Field = Field::new("date", 44, 8, FieldKind::Text);

    pub const LAYOUT: Layout = Layout {
        name: "transaction",
        width: 52,
        fields: &[CARD_NUMBER, TYPE, AMOUNT, DESCRIPTION, DATE],
    };
}
