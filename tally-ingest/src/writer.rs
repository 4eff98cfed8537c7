//! Write transaction records back out in the statement export layout

use std::io::Write;

use tally_core::TransactionRecord;

/// Column names of a Lloyds statement export, in order
pub const HEADER: [&str; 8] = [
    "Transaction Date",
    "Transaction Type",
    "Sort Code",
    "Account Number",
    "Transaction Description",
    "Debit Amount",
    "Credit Amount",
    "Balance",
];

/// Write `records` as a header line followed by one row per record.
///
/// The output parses back into the same records.
pub fn write_statement<W: Write>(records: &[TransactionRecord], writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if records.is_empty() {
        // Header is only derived from the first serialized record
        csv_writer.write_record(HEADER)?;
    }
    for record in records {
        csv_writer.serialize(record)?;
    }

    csv_writer.flush()?;
    Ok(())
}
