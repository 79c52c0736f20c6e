use crate::models::ExpenseRecord;
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

pub const DEFAULT_RANGE_DAYS: u32 = 30;

/// Window of dates a dashboard is computed over, always ending today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSelector {
    /// From the first of the current month.
    Month,
    /// The last `n` calendar days, today included. Never zero.
    Days(u32),
}

impl Default for RangeSelector {
    fn default() -> Self {
        Self::Days(DEFAULT_RANGE_DAYS)
    }
}

impl RangeSelector {
    /// Anything other than `"month"` or a positive day count means the default window.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return Self::default();
        };
        if raw.eq_ignore_ascii_case("month") {
            return Self::Month;
        }
        match raw.parse::<u32>() {
            Ok(days) if days > 0 => Self::Days(days),
            _ => Self::default(),
        }
    }

    /// First day of the window ending on `today`.
    pub fn start(&self, today: NaiveDate) -> NaiveDate {
        match *self {
            Self::Month => today.with_day(1).unwrap_or(today),
            // windows reaching past the calendar's start cover every date
            Self::Days(days) => Duration::try_days(i64::from(days.max(1)) - 1)
                .and_then(|span| today.checked_sub_signed(span))
                .unwrap_or(NaiveDate::MIN),
        }
    }
}

impl fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month => f.write_str("month"),
            Self::Days(days) => write!(f, "{days}"),
        }
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

pub fn filter_by_range(
    records: &[ExpenseRecord],
    selector: RangeSelector,
    today: NaiveDate,
) -> Vec<ExpenseRecord> {
    let start = selector.start(today);
    records
        .iter()
        .filter(|record| {
            parse_date(&record.date).is_some_and(|date| date >= start && date <= today)
        })
        .cloned()
        .collect()
}
