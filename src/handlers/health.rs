use axum::{
    extract::State,
    response::Html,
    http::StatusCode,
};
use std::sync::Arc;

use super::{render, AppState};
use crate::models::HealthSummary;
use crate::router::Route;
use crate::templates::{PageContext, SystemHealthTemplate};

/// GET /system/health - Zobrazí health Cardinal API
pub async fn system_health(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    state.store.fetch_health().await;
    let snapshot = state.store.snapshot();

    let health = HealthSummary::from_record(&snapshot.health);
    let ctx = PageContext::new(Some(&Route::SystemHealth), &snapshot, &state.config.api_url);
    render(SystemHealthTemplate { ctx, health })
}
