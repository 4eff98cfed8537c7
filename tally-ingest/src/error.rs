//! Errors raised while reading a statement export

use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Which amount column failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    Debit,
    Credit,
    Balance,
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AmountField::Debit => "debit amount",
            AmountField::Credit => "credit amount",
            AmountField::Balance => "balance",
        })
    }
}

/// First failure encountered while parsing; parsing never continues past it.
///
/// `line` is the 1-based physical line of the input, the header being line 1.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not read statement: {0}")]
    Read(#[from] csv::Error),

    #[error("line {line}: expected {expected} columns, got: {found}")]
    ColumnCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// `source` is `None` when the field is not shaped like `DD/MM/YYYY` at all
    #[error("line {line}: could not parse date {value:?}, expected DD/MM/YYYY")]
    Date {
        line: u64,
        value: String,
        source: Option<chrono::ParseError>,
    },

    #[error("line {line}: could not parse account number {value:?}: {source}")]
    AccountNumber {
        line: u64,
        value: String,
        source: ParseIntError,
    },

    #[error("line {line}: could not parse {field} {value:?}: {source}")]
    Amount {
        line: u64,
        field: AmountField,
        value: String,
        source: rust_decimal::Error,
    },
}

impl ParseError {
    /// Input line the error is attributed to, when there is one
    pub fn line(&self) -> Option<u64> {
        match self {
            ParseError::Open { .. } | ParseError::Read(_) => None,
            ParseError::ColumnCount { line, .. }
            | ParseError::Date { line, .. }
            | ParseError::AccountNumber { line, .. }
            | ParseError::Amount { line, .. } => Some(*line),
        }
    }
}
