//! Group statement transactions by date and fold them into report totals

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tally_core::{TransactionRecord, TypeCode};
use tracing::debug;

use crate::error::ReportError;

/// Calendar month key, ordered chronologically and displayed as `MM/YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

/// Totals for a single calendar date
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub transactions: usize,
    /// Sum of debit amounts
    pub spend: Decimal,
    /// Sum of credit amounts
    pub earnings: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeCount {
    pub code: TypeCode,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthSpend {
    pub month: YearMonth,
    pub spend: Decimal,
}

/// Everything the spending report shows, derived in one pass over the records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatementSummary {
    /// One entry per distinct date, ascending
    pub days: Vec<DaySummary>,
    pub total_transactions: usize,
    pub total_spend: Decimal,
    pub total_earnings: Decimal,
    /// Records whose debit is zero, counted per record rather than per day
    pub zero_debit_transactions: usize,
    /// Most frequent first; ties ordered by code
    pub type_counts: Vec<TypeCount>,
    /// Chronological
    pub monthly_spend: Vec<MonthSpend>,
}

impl StatementSummary {
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Distinct dates on which nothing was spent
    pub fn days_without_spend(&self) -> usize {
        self.days.iter().filter(|d| d.spend.is_zero()).count()
    }

    /// Total spend truncated to whole pounds, divided by the number of dates.
    ///
    /// `None` when there are no dates.
    pub fn average_spend_per_day(&self) -> Result<Option<i64>, ReportError> {
        whole_average(self.total_spend, self.day_count())
    }

    pub fn average_earnings_per_day(&self) -> Result<Option<i64>, ReportError> {
        whole_average(self.total_earnings, self.day_count())
    }

    /// Unrounded total spend divided by the number of dates
    pub fn exact_average_spend_per_day(&self) -> Option<Decimal> {
        exact_average(self.total_spend, self.day_count())
    }

    pub fn exact_average_earnings_per_day(&self) -> Option<Decimal> {
        exact_average(self.total_earnings, self.day_count())
    }
}

fn whole_average(total: Decimal, days: usize) -> Result<Option<i64>, ReportError> {
    if days == 0 {
        return Ok(None);
    }
    let whole = total
        .trunc()
        .to_i64()
        .ok_or(ReportError::AmountOutOfRange { total })?;
    Ok(Some(whole / days as i64))
}

fn exact_average(total: Decimal, days: usize) -> Option<Decimal> {
    if days == 0 {
        return None;
    }
    Some(total / Decimal::from(days as u64))
}

/// Bucket records by calendar date, dates ascending, input order kept per date
pub fn group_by_date(records: &[TransactionRecord]) -> BTreeMap<NaiveDate, Vec<&TransactionRecord>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&TransactionRecord>> = BTreeMap::new();
    for record in records {
        buckets.entry(record.date).or_default().push(record);
    }
    buckets
}

/// Add `amount` to `sum`, failing instead of overflowing the decimal range
fn checked_sum(sum: Decimal, amount: Decimal, date: NaiveDate) -> Result<Decimal, ReportError> {
    sum.checked_add(amount)
        .ok_or(ReportError::SumOverflow { date, sum, amount })
}

/// Fold records into daily, grand, type and monthly totals.
///
/// Fails when a running total leaves the range `Decimal` can represent.
pub fn summarize(records: &[TransactionRecord]) -> Result<StatementSummary, ReportError> {
    let by_date = group_by_date(records);
    debug!(records = records.len(), dates = by_date.len(), "summarizing statement");

    let mut summary = StatementSummary::default();
    let mut type_tally: HashMap<&TypeCode, usize> = HashMap::new();
    let mut monthly: BTreeMap<YearMonth, Decimal> = BTreeMap::new();

    for (date, day_records) in by_date {
        let mut day = DaySummary {
            date,
            transactions: day_records.len(),
            spend: Decimal::ZERO,
            earnings: Decimal::ZERO,
        };

        for record in day_records {
            day.spend = checked_sum(day.spend, record.debit_amount, date)?;
            day.earnings = checked_sum(day.earnings, record.credit_amount, date)?;
            *type_tally.entry(&record.type_code).or_insert(0) += 1;
            let month = monthly.entry(YearMonth::of(date)).or_default();
            *month = checked_sum(*month, record.debit_amount, date)?;
            if record.is_zero_debit() {
                summary.zero_debit_transactions += 1;
            }
        }

        summary.total_transactions += day.transactions;
        summary.total_spend = checked_sum(summary.total_spend, day.spend, date)?;
        summary.total_earnings = checked_sum(summary.total_earnings, day.earnings, date)?;
        summary.days.push(day);
    }

    let mut type_counts: Vec<TypeCount> = type_tally
        .into_iter()
        .map(|(code, count)| TypeCount {
            code: code.clone(),
            count,
        })
        .collect();
    type_counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.code.cmp(&b.code)));
    summary.type_counts = type_counts;

    summary.monthly_spend = monthly
        .into_iter()
        .map(|(month, spend)| MonthSpend { month, spend })
        .collect();

    Ok(summary)
}
