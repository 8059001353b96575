use axum::{
    extract::State,
    response::Html,
    http::StatusCode,
};
use std::sync::Arc;

use super::{render, AppState};
use crate::models::ModuleCard;
use crate::router::Route;
use crate::templates::{DashboardTemplate, PageContext};

/// GET / - Zobrazí seznam modulů
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    state.store.fetch_modules().await;
    let snapshot = state.store.snapshot();

    let modules = snapshot
        .modules
        .iter()
        .enumerate()
        .map(|(index, record)| ModuleCard::from_record(index, record))
        .collect();

    let ctx = PageContext::new(Some(&Route::Dashboard), &snapshot, &state.config.api_url);
    render(DashboardTemplate { ctx, modules })
}
