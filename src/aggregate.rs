use crate::models::{CategoryTotal, DateSeries, ExpenseRecord, Summary};
use std::collections::BTreeMap;

pub const FALLBACK_CATEGORY: &str = "Other";
pub const NO_DATA_LABEL: &str = "No data";
pub const TOP_SPENDING_LIMIT: usize = 4;

fn amount_of(record: &ExpenseRecord) -> f64 {
    if record.amount.is_finite() {
        record.amount
    } else {
        0.0
    }
}

fn category_of(record: &ExpenseRecord) -> &str {
    let category = record.category.trim();
    if category.is_empty() {
        FALLBACK_CATEGORY
    } else {
        category
    }
}

/// Per-category sums, in the order each category is first seen.
pub fn category_totals(records: &[ExpenseRecord]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for record in records {
        let category = category_of(record);
        match totals.iter_mut().find(|t| t.category == category) {
            Some(total) => total.amount += amount_of(record),
            None => totals.push(CategoryTotal {
                category: category.to_string(),
                amount: amount_of(record),
            }),
        }
    }
    totals
}

/// Daily spending sorted by date, paired with a flat income line at `budget`.
pub fn date_series(records: &[ExpenseRecord], budget: f64) -> DateSeries {
    let mut by_date: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        *by_date.entry(record.date.trim()).or_default() += amount_of(record);
    }

    if by_date.is_empty() {
        return DateSeries {
            labels: vec![NO_DATA_LABEL.to_string()],
            expenses: vec![0.0],
            income: vec![0.0],
        };
    }

    DateSeries {
        labels: by_date.keys().map(|d| d.to_string()).collect(),
        expenses: by_date.values().copied().collect(),
        income: vec![budget; by_date.len()],
    }
}

pub fn top_spending(totals: &[CategoryTotal]) -> Vec<CategoryTotal> {
    let mut ranked = totals.to_vec();
    // sort_by is stable, so equal totals keep encounter order
    ranked.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    ranked.truncate(TOP_SPENDING_LIMIT);
    ranked
}

pub fn summarize(records: &[ExpenseRecord], budget: f64) -> Summary {
    let total: f64 = records.iter().map(amount_of).sum();
    let subscriptions: f64 = records
        .iter()
        .filter(|r| category_of(r).eq_ignore_ascii_case("subscriptions"))
        .map(amount_of)
        .sum();

    Summary {
        total,
        subscriptions,
        available: budget - total,
    }
}
