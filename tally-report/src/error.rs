use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("total {total} does not fit in a whole-pound integer")]
    AmountOutOfRange { total: Decimal },

    #[error("adding {amount} to {sum} on {date} overflows the decimal range")]
    SumOverflow {
        date: NaiveDate,
        sum: Decimal,
        amount: Decimal,
    },

    #[error("could not write report: {0}")]
    Io(#[from] std::io::Error),
}
