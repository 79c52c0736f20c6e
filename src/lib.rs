pub mod aggregate;
pub mod app;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod pacing;
pub mod state;
pub mod storage;
pub mod store;
pub mod tips;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use store::ExpenseStore;
