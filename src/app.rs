use crate::handlers;
use crate::state::AppState;
use axum::{
    handler::HandlerWithoutStateExt,
    routing::{delete, get},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(handlers::not_found.into_service());

    Router::new()
        .route("/", get(handlers::index))
        .route("/investments", get(handlers::investments_page))
        .route(
            "/api/expenses",
            get(handlers::list_expenses)
                .post(handlers::create_expense)
                .fallback(handlers::not_found),
        )
        .route(
            "/api/expenses/:id",
            delete(handlers::delete_expense).fallback(handlers::not_found),
        )
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/investments", get(handlers::get_investments))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
