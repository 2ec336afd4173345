pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod stat;
pub mod view;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::{AppError, AppResult};

pub use routes::{app, AppState};

/// Opens the listening socket, mapping failure to a startup error.
pub async fn bind(config: &Config) -> AppResult<TcpListener> {
    TcpListener::bind(config.addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: config.addr,
            source,
        })
}
