//! Plain-text rendering of a [`StatementSummary`]

use rust_decimal::{Decimal, RoundingStrategy};
use std::io::Write;
use tally_core::STATEMENT_DATE_FORMAT;

use crate::error::ReportError;
use crate::summary::StatementSummary;

const RULE: &str = "-----------";

/// Format an amount as pounds with exactly two decimal places
fn pounds(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("£{rounded}")
}

fn average_line(whole: Option<i64>, exact: Option<Decimal>) -> String {
    match (whole, exact) {
        (Some(whole), Some(exact)) => format!("£{whole} (exact {})", pounds(exact)),
        _ => "n/a".to_string(),
    }
}

/// Write the spending report for `summary` to `out`.
///
/// Averages are computed before anything is written, so an out-of-range
/// total produces no partial report.
pub fn render_report<W: Write>(summary: &StatementSummary, mut out: W) -> Result<(), ReportError> {
    let avg_spend = average_line(
        summary.average_spend_per_day()?,
        summary.exact_average_spend_per_day(),
    );
    let avg_earnings = average_line(
        summary.average_earnings_per_day()?,
        summary.exact_average_earnings_per_day(),
    );

    writeln!(out, "date\t\ttotal transactions\tspend")?;
    for day in &summary.days {
        writeln!(
            out,
            "{}\t\t{}\t\t{}",
            day.date.format(STATEMENT_DATE_FORMAT),
            day.transactions,
            pounds(day.spend)
        )?;
        writeln!(out, "{RULE}")?;
    }

    writeln!(
        out,
        "Total transactions:\t{} in {} days",
        summary.total_transactions,
        summary.day_count()
    )?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Total spend:\t\t{}", pounds(summary.total_spend))?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Total earnings:\t\t{}", pounds(summary.total_earnings))?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Average Spend / day:\t{avg_spend}")?;
    writeln!(out, "Average Earnings / day:\t{avg_earnings}")?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "You didn't spend money *at all* for {} days!",
        summary.days_without_spend()
    )?;
    writeln!(
        out,
        "Transactions with no debit:\t{}",
        summary.zero_debit_transactions
    )?;
    writeln!(out, "{RULE}")?;

    writeln!(out, "Transactions types by count:")?;
    for t in &summary.type_counts {
        writeln!(
            out,
            "* {}:\t{}\t{}",
            t.code,
            t.count,
            t.code.label().unwrap_or("")
        )?;
    }
    writeln!(out, "{RULE}")?;

    writeln!(out, "Total Spend By Month:")?;
    for m in &summary.monthly_spend {
        writeln!(out, "* {}:\t{}", m.month, pounds(m.spend))?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::summarize;
    use chrono::NaiveDate;
    use tally_core::{TransactionRecord, TypeCode};

    fn txn(date: (i32, u32, u32), code: &str, debit: &str, credit: &str) -> TransactionRecord {
        TransactionRecord {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            type_code: TypeCode::new(code),
            sort_code: "12-34-56".to_string(),
            account_number: 12345678,
            description: "test".to_string(),
            debit_amount: debit.parse().unwrap(),
            credit_amount: credit.parse().unwrap(),
            balance: Decimal::ZERO,
        }
    }

    fn render_to_string(summary: &StatementSummary) -> String {
        let mut out = Vec::new();
        render_report(summary, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_pounds_formatting() {
        assert_eq!(pounds(Decimal::new(100, 0)), "£100.00");
        assert_eq!(pounds(Decimal::new(15, 1)), "£1.50");
        assert_eq!(pounds(Decimal::new(12345, 3)), "£12.35");
        assert_eq!(pounds(Decimal::new(12344, 3)), "£12.34");
        assert_eq!(pounds(Decimal::ZERO), "£0.00");
    }

    #[test]
    fn test_single_record_report() {
        let summary = summarize(&[txn((2018, 12, 13), "DEB", "100", "0")]).unwrap();
        let expected = "\
date\t\ttotal transactions\tspend
13/12/2018\t\t1\t\t£100.00
-----------
Total transactions:\t1 in 1 days
-----------
Total spend:\t\t£100.00
-----------
Total earnings:\t\t£0.00
-----------
Average Spend / day:\t£100 (exact £100.00)
Average Earnings / day:\t£0 (exact £0.00)
-----------
You didn't spend money *at all* for 0 days!
Transactions with no debit:\t0
-----------
Transactions types by count:
* DEB:\t1\tDebit Card
-----------
Total Spend By Month:
* 12/2018:\t£100.00
";
        assert_eq!(render_to_string(&summary), expected);
    }

    #[test]
    fn test_empty_report_has_no_averages() {
        let text = render_to_string(&summarize(&[]).unwrap());
        assert!(text.contains("Total transactions:\t0 in 0 days"));
        assert!(text.contains("Average Spend / day:\tn/a"));
        assert!(text.contains("Average Earnings / day:\tn/a"));
        assert!(text.ends_with("Total Spend By Month:\n"));
    }

    #[test]
    fn test_unknown_type_code_has_empty_label() {
        let summary = summarize(&[txn((2019, 1, 1), "ZZZ", "1", "0")]).unwrap();
        let text = render_to_string(&summary);
        assert!(text.contains("* ZZZ:\t1\t\n"), "{text}");
    }

    #[test]
    fn test_out_of_range_writes_nothing() {
        let summary = StatementSummary {
            total_earnings: Decimal::MAX,
            ..summarize(&[txn((2019, 1, 1), "DEB", "1", "0")]).unwrap()
        };
        let mut out = Vec::new();
        let err = render_report(&summary, &mut out).unwrap_err();
        assert!(matches!(err, ReportError::AmountOutOfRange { .. }));
        assert!(out.is_empty());
    }
}
