use crate::config::Config;
use crate::store::ExpenseStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<Mutex<ExpenseStore>>,
}

impl AppState {
    pub fn new(config: Config, store: ExpenseStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(Mutex::new(store)),
        }
    }
}
