use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub date: String,
}

/// Body of `POST /api/expenses`. Fields stay loose here so that missing or
/// mistyped values surface as validation messages instead of extractor errors.
/// Scalar text fields are coerced (`42` becomes `"42"`).
#[derive(Debug, Default, Deserialize)]
pub struct NewExpense {
    pub title: Option<Value>,
    pub category: Option<Value>,
    pub amount: Option<Value>,
    pub date: Option<Value>,
}

/// A [`NewExpense`] that passed validation, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidExpense {
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub date: String,
}

impl NewExpense {
    pub fn validate(self) -> Result<ValidExpense, AppError> {
        let (Some(title), Some(category), Some(date)) = (
            non_blank(self.title),
            non_blank(self.category),
            non_blank(self.date),
        ) else {
            return Err(AppError::bad_request(
                "title, category, and date are required.",
            ));
        };

        let amount = match coerce_amount(self.amount.as_ref()) {
            Some(amount) if amount.is_finite() && amount > 0.0 => amount,
            _ => return Err(AppError::bad_request("amount must be a positive number.")),
        };

        Ok(ValidExpense {
            title,
            category,
            amount,
            date,
        })
    }
}

fn non_blank(value: Option<Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn coerce_amount(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub removed: ExpenseRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tip {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateSeries {
    pub labels: Vec<String>,
    pub expenses: Vec<f64>,
    pub income: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: f64,
    pub subscriptions: f64,
    pub available: f64,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub range: String,
    pub budget: f64,
    pub summary: Summary,
    pub categories: Vec<CategoryTotal>,
    pub series: DateSeries,
    pub top_spending: Vec<CategoryTotal>,
    pub tips: Vec<Tip>,
    pub tip_reveal_ms: Vec<u64>,
    pub progress_ticks: Vec<u8>,
}
