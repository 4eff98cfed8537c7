//! tally-report: fold parsed transactions into daily, monthly and type totals
//! and render them as a plain-text spending report.

pub mod error;
pub mod render;
pub mod summary;

pub use error::ReportError;
pub use render::render_report;
pub use summary::{
    DaySummary, MonthSpend, StatementSummary, TypeCount, YearMonth, group_by_date, summarize,
};
