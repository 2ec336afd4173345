use std::sync::Arc;

use axum::{routing::get, Router};

use crate::services;
use crate::view::DashboardModel;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(services::index_handler))
        .route("/_dash-layout", get(services::layout_handler))
        .route("/_dash-dependencies", get(services::dependencies_handler))
        .with_state(state)
}

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<DashboardModel>,
}

impl AppState {
    pub fn new(model: DashboardModel) -> Self {
        Self {
            model: Arc::new(model),
        }
    }
}
