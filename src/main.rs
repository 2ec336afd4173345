use anyhow::Result;
use tracing_subscriber::EnvFilter;

use statement_dashboard::config::Config;
use statement_dashboard::view::DashboardModel;
use statement_dashboard::{app, bind, AppState};

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutting down");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let state = AppState::new(DashboardModel::sample());
    let app = app(state);

    let listener = bind(&config).await?;
    tracing::info!("dashboard listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
