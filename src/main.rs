use finmate::{router, AppState, Config, ExpenseStore};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let store = if config.seed_demo_data {
        ExpenseStore::seeded()
    } else {
        ExpenseStore::new()
    };
    let addr = config.listen_addr();
    info!(
        public_dir = %config.public_dir.display(),
        records = store.len(),
        "starting finmate"
    );

    let app = router(AppState::new(config, store));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
