use axum::{
    extract::{Path, State},
    response::Html,
    http::StatusCode,
};
use std::sync::Arc;

use super::{render, AppState};
use crate::models::ModuleDetail;
use crate::router::Route;
use crate::templates::{ModuleDetailsTemplate, PageContext};

/// GET /modules/{module_name} - Zobrazí detail modulu
///
/// Modul, který API nehlásí, není chyba: stránka jen řekne, že o něm nic neví.
pub async fn module_details(
    State(state): State<Arc<AppState>>,
    Path(module_name): Path<String>,
) -> Result<Html<String>, (StatusCode, String)> {
    state.store.fetch_modules().await;
    let snapshot = state.store.snapshot();

    let detail = ModuleDetail::lookup(&snapshot.modules, &module_name);
    if detail.is_none() && snapshot.error.is_none() {
        tracing::debug!("Module not reported by API: {}", module_name);
    }

    let route = Route::ModuleDetails { module_name: module_name.clone() };
    let ctx = PageContext::new(Some(&route), &snapshot, &state.config.api_url);
    render(ModuleDetailsTemplate { ctx, module_name, detail })
}
