use axum::{extract::State, Json};
use maud::Markup;
use serde_json::Value as JsonValue;

use crate::routes::AppState;
use crate::view::{build_layout, render, Widget};

pub async fn index_handler(State(state): State<AppState>) -> Markup {
    tracing::debug!("rendering dashboard page");
    render::page(&build_layout(&state.model))
}

pub async fn layout_handler(State(state): State<AppState>) -> Json<Widget> {
    tracing::debug!("serving dashboard layout");
    Json(build_layout(&state.model))
}

/// The page registers no callbacks, so the list is always empty.
pub async fn dependencies_handler() -> Json<Vec<JsonValue>> {
    Json(Vec::new())
}
