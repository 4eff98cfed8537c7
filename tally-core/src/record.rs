//! Transaction record types parsed from a statement export

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::catalog::TypeCodeCatalog;

/// Date format used by statement exports, e.g. `13/12/2018`
pub const STATEMENT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Short transaction category code such as `DEB` or `SO`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TypeCode(String);

impl TypeCode {
    /// Code assigned to rows that carry no type
    pub const OTHER: &'static str = "OTH";

    /// Build a code from a raw field; an empty field becomes `OTH`
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.is_empty() {
            Self(Self::OTHER.to_string())
        } else {
            Self(raw)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Catalog display name, `None` for codes the catalog does not know
    pub fn label(&self) -> Option<&'static str> {
        TypeCodeCatalog::label(&self.0)
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of a statement export.
///
/// Serializes back into the export's column layout, so a parsed statement can
/// be written out again with the same field values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    #[serde(rename = "Transaction Date", serialize_with = "serialize_statement_date")]
    pub date: NaiveDate,
    #[serde(rename = "Transaction Type")]
    pub type_code: TypeCode,
    #[serde(rename = "Sort Code")]
    pub sort_code: String,
    #[serde(rename = "Account Number")]
    pub account_number: i64,
    #[serde(rename = "Transaction Description")]
    pub description: String,
    /// Money leaving the account; zero when the field was empty
    #[serde(rename = "Debit Amount")]
    pub debit_amount: Decimal,
    /// Money entering the account; zero when the field was empty
    #[serde(rename = "Credit Amount")]
    pub credit_amount: Decimal,
    #[serde(rename = "Balance")]
    pub balance: Decimal,
}

impl TransactionRecord {
    /// True when the record has no outgoing money
    pub fn is_zero_debit(&self) -> bool {
        self.debit_amount.is_zero()
    }

    /// True when both debit and credit are non-zero.
    ///
    /// Exports normally fill only one side; two-sided rows are still summed
    /// on both sides.
    pub fn is_two_sided(&self) -> bool {
        !self.debit_amount.is_zero() && !self.credit_amount.is_zero()
    }
}

fn serialize_statement_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(STATEMENT_DATE_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(debit: i64, credit: i64) -> TransactionRecord {
        TransactionRecord {
            date: NaiveDate::from_ymd_opt(2018, 12, 13).unwrap(),
            type_code: TypeCode::new("DEB"),
            sort_code: "12-34-56".to_string(),
            account_number: 12345678,
            description: "rent".to_string(),
            debit_amount: Decimal::new(debit, 0),
            credit_amount: Decimal::new(credit, 0),
            balance: Decimal::new(50, 0),
        }
    }

    #[test]
    fn test_empty_type_code_defaults_to_other() {
        let code = TypeCode::new("");
        assert_eq!(code.as_str(), "OTH");
        assert_eq!(code.label(), Some("Other"));
    }

    #[test]
    fn test_type_code_kept_verbatim() {
        assert_eq!(TypeCode::new("SO").as_str(), "SO");
        assert_eq!(TypeCode::new("so").as_str(), "so");
        assert_eq!(TypeCode::new("ZZZ").label(), None);
        assert_eq!(TypeCode::new("DD").to_string(), "DD");
    }

    #[test]
    fn test_zero_debit() {
        assert!(record(0, 20).is_zero_debit());
        assert!(!record(100, 0).is_zero_debit());
    }

    #[test]
    fn test_two_sided() {
        assert!(record(10, 5).is_two_sided());
        assert!(!record(10, 0).is_two_sided());
        assert!(!record(0, 5).is_two_sided());
        assert!(!record(0, 0).is_two_sided());
    }
}
