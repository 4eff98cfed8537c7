//! Parse Lloyds-style statement CSV exports into typed transactions.
//!
//! Exports have one header row, then 8 columns per transaction:
//! Transaction Date,Transaction Type,Sort Code,Account Number,
//! Transaction Description,Debit Amount,Credit Amount,Balance

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tally_core::{STATEMENT_DATE_FORMAT, TransactionRecord, TypeCode};
use tracing::{debug, warn};

use crate::error::{AmountField, ParseError};

/// Columns every data row must have
pub const COLUMN_COUNT: usize = 8;

/// Parse a whole export. The first record is the header and is discarded.
///
/// Stops at the first bad row; no partial results are returned.
pub fn parse_statement<R: Read>(reader: R) -> Result<Vec<TransactionRecord>, ParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = result?;
        if i == 0 {
            continue;
        }

        let line = row.position().map(|p| p.line()).unwrap_or(i as u64 + 1);
        let fields: Vec<&str> = row.iter().collect();
        let record = parse_row(&fields, line)?;
        if record.is_two_sided() {
            warn!(line, "transaction has both a debit and a credit amount");
        }
        records.push(record);
    }

    debug!(records = records.len(), "parsed statement");
    Ok(records)
}

pub fn parse_statement_str(text: &str) -> Result<Vec<TransactionRecord>, ParseError> {
    parse_statement(text.as_bytes())
}

/// Open `path` and parse it as a statement export
pub fn parse_statement_file(path: impl AsRef<Path>) -> Result<Vec<TransactionRecord>, ParseError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading statement file");
    parse_statement(file)
}

/// Convert one already-split row. `line` is only used to attribute errors.
pub fn parse_row(fields: &[&str], line: u64) -> Result<TransactionRecord, ParseError> {
    if fields.len() != COLUMN_COUNT {
        return Err(ParseError::ColumnCount {
            line,
            expected: COLUMN_COUNT,
            found: fields.len(),
        });
    }

    let date = parse_date(fields[0], line)?;

    let account_number: i64 = fields[3].parse().map_err(|source| ParseError::AccountNumber {
        line,
        value: fields[3].to_string(),
        source,
    })?;

    let debit_amount = parse_amount(or_zero(fields[5]), AmountField::Debit, line)?;
    let credit_amount = parse_amount(or_zero(fields[6]), AmountField::Credit, line)?;
    // An empty balance is an error, unlike debit/credit
    let balance = parse_amount(fields[7], AmountField::Balance, line)?;

    Ok(TransactionRecord {
        date,
        type_code: TypeCode::new(fields[1]),
        sort_code: fields[2].to_string(),
        account_number,
        description: fields[4].to_string(),
        debit_amount,
        credit_amount,
        balance,
    })
}

/// Parse a fixed-width `DD/MM/YYYY` date.
///
/// chrono alone accepts unpadded days, signed or short years, so the shape is
/// checked first.
fn parse_date(value: &str, line: u64) -> Result<NaiveDate, ParseError> {
    let date_error = |source: Option<chrono::ParseError>| ParseError::Date {
        line,
        value: value.to_string(),
        source,
    };

    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(date_error(None));
    }

    NaiveDate::parse_from_str(value, STATEMENT_DATE_FORMAT).map_err(|e| date_error(Some(e)))
}

fn or_zero(value: &str) -> &str {
    if value.is_empty() { "0" } else { value }
}

fn parse_amount(value: &str, field: AmountField, line: u64) -> Result<Decimal, ParseError> {
    Decimal::from_str(value).map_err(|source| ParseError::Amount {
        line,
        field,
        value: value.to_string(),
        source,
    })
}
