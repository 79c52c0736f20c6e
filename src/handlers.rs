use crate::dashboard::build_dashboard;
use crate::errors::AppError;
use crate::filter::RangeSelector;
use crate::models::{DashboardResponse, DeleteResponse, ExpenseRecord, NewExpense};
use crate::state::AppState;
use crate::storage::load_investments;
use crate::ui::{render_index, render_investments};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub range: Option<String>,
    pub budget: Option<String>,
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.config.default_budget))
}

pub async fn investments_page() -> Html<String> {
    Html(render_investments())
}

pub async fn list_expenses(State(state): State<AppState>) -> Json<Vec<ExpenseRecord>> {
    let store = state.store.lock().await;
    Json(store.list().to_vec())
}

pub async fn create_expense(
    State(state): State<AppState>,
    payload: Result<Json<NewExpense>, JsonRejection>,
) -> Result<(StatusCode, Json<ExpenseRecord>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!("rejected expense body: {rejection}");
        AppError::bad_request(rejection.body_text())
    })?;
    let expense = payload.validate()?;

    let created = state.store.lock().await.add(expense);
    info!(id = created.id, category = %created.category, "expense added");

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete_expense(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = raw_id
        .trim()
        .parse::<u64>()
        .map_err(|_| AppError::bad_request("Invalid id."))?;

    let removed = state
        .store
        .lock()
        .await
        .delete(id)
        .ok_or_else(|| AppError::not_found("Expense not found."))?;
    info!(id, "expense deleted");

    Ok(Json(DeleteResponse {
        message: "Deleted".to_string(),
        removed,
    }))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Json<DashboardResponse> {
    let selector = RangeSelector::parse(query.range.as_deref());
    let budget = state.config.budget_or_default(query.budget.as_deref());
    let records = state.store.lock().await.list().to_vec();

    Json(build_dashboard(&records, selector, budget))
}

pub async fn get_investments(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let investments = load_investments(&state.config.investments_path()).await?;
    Ok(Json(investments))
}

pub async fn not_found() -> AppError {
    AppError::not_found("Route not found.")
}
