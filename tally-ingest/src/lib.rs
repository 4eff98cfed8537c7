//! tally-ingest: statement CSV parsing into typed transaction records, and
//! writing records back out in the same layout.

pub mod error;
pub mod parser;
pub mod writer;

pub use error::{AmountField, ParseError};
pub use parser::{parse_row, parse_statement, parse_statement_file, parse_statement_str, COLUMN_COUNT};
pub use writer::{write_statement, HEADER};
