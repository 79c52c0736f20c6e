use crate::aggregate::{category_totals, date_series, summarize, top_spending};
use crate::filter::{filter_by_range, RangeSelector};
use crate::models::{DashboardResponse, ExpenseRecord};
use crate::pacing::{reveal_delays, ProgressTicker};
use crate::tips::{build_tips, SpendingBuckets};
use chrono::{Local, NaiveDate};

pub fn build_dashboard(
    records: &[ExpenseRecord],
    selector: RangeSelector,
    budget: f64,
) -> DashboardResponse {
    build_dashboard_at(Local::now().date_naive(), records, selector, budget)
}

pub fn build_dashboard_at(
    today: NaiveDate,
    records: &[ExpenseRecord],
    selector: RangeSelector,
    budget: f64,
) -> DashboardResponse {
    let in_range = filter_by_range(records, selector, today);
    let categories = category_totals(&in_range);
    let tips = build_tips(&SpendingBuckets::from_totals(&categories));

    DashboardResponse {
        range: selector.to_string(),
        budget,
        summary: summarize(&in_range, budget),
        series: date_series(&in_range, budget),
        top_spending: top_spending(&categories),
        tip_reveal_ms: reveal_delays(tips.len()),
        progress_ticks: ProgressTicker::default().collect(),
        categories,
        tips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, category: &str, amount: f64, date: &str) -> ExpenseRecord {
        ExpenseRecord {
            id,
            title: format!("item {id}"),
            category: category.to_string(),
            amount,
            date: date.to_string(),
        }
    }

    #[test]
    fn dashboard_only_counts_records_in_range() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let records = vec![
            record(1, "Housing", 1500.0, "2026-03-01"),
            record(2, "Food", 200.0, "2026-03-09"),
            record(3, "Food", 999.0, "2026-02-27"),
            record(4, "Travel", 50.0, "someday"),
        ];

        let dashboard = build_dashboard_at(today, &records, RangeSelector::Month, 2000.0);

        assert_eq!(dashboard.range, "month");
        assert_eq!(dashboard.summary.total, 1700.0);
        assert_eq!(dashboard.summary.available, 300.0);
        assert_eq!(dashboard.categories.len(), 2);
        assert_eq!(dashboard.series.labels, ["2026-03-01", "2026-03-09"]);
        assert_eq!(dashboard.series.income, [2000.0, 2000.0]);
        assert_eq!(dashboard.top_spending[0].category, "Housing");
        assert_eq!(dashboard.tips[0].title, "Housing looks high");
        assert_eq!(dashboard.tip_reveal_ms.len(), dashboard.tips.len());
        assert_eq!(dashboard.progress_ticks.first(), Some(&6));
        assert_eq!(dashboard.progress_ticks.last(), Some(&100));
    }

    #[test]
    fn empty_dashboard_degrades_to_placeholders() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let dashboard = build_dashboard_at(today, &[], RangeSelector::default(), 0.0);

        assert_eq!(dashboard.range, "30");
        assert_eq!(dashboard.summary.total, 0.0);
        assert!(dashboard.categories.is_empty());
        assert!(dashboard.top_spending.is_empty());
        assert_eq!(dashboard.series.labels, ["No data"]);
        assert_eq!(dashboard.tips.len(), 1);
        assert_eq!(dashboard.tips[0].title, "Spending looks balanced");
        assert_eq!(dashboard.progress_ticks.len(), 17);
    }
}
