pub mod dashboard;
pub mod health;
pub mod modules;

use askama::Template;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::router::Route;
use crate::store::DashboardStore;
use crate::templates::{NotFoundTemplate, PageContext};

pub struct AppState {
    pub store: DashboardStore,
    pub config: DashboardConfig,
}

/// Liveness samotného dashboardu
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Fallback pro neznámé cesty
///
/// Cesta, která odpovídá stránce jen s trailing slashem, se přesměruje
/// na kanonický tvar. Všechno ostatní je 404.
pub async fn not_found(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    if let Some(route) = Route::resolve(uri.path()) {
        let target = match uri.query() {
            Some(query) => format!("{}?{}", route.path(), query),
            None => route.path(),
        };
        return Redirect::permanent(&target).into_response();
    }

    tracing::debug!("No page for path: {}", uri.path());

    let ctx = PageContext::new(None, &state.store.snapshot(), &state.config.api_url);
    let template = NotFoundTemplate { ctx, path: uri.path().to_string() };

    match render(template) {
        Ok(html) => (StatusCode::NOT_FOUND, html).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) fn render<T: Template>(template: T) -> Result<Html<String>, (StatusCode, String)> {
    template.render()
        .map(Html)
        .map_err(|e| {
            tracing::error!("Failed to render template: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })
}
