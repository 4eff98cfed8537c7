//! tally-core: data model for bank statement transactions and the type-code catalog

pub mod catalog;
pub mod record;

pub use catalog::TypeCodeCatalog;
pub use record::{TransactionRecord, TypeCode, STATEMENT_DATE_FORMAT};
