use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers::{self, AppState};

pub const DASHBOARD: &str = "/";
pub const MODULE_DETAILS: &str = "/modules/{module_name}";
pub const SYSTEM_HEALTH: &str = "/system/health";

/// Jedna ze tří stránek dashboardu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    ModuleDetails { module_name: String },
    SystemHealth,
}

impl Route {
    /// Najde stránku pro danou cestu (query a fragment se ignorují)
    pub fn resolve(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();

        if path == DASHBOARD {
            return Some(Self::Dashboard);
        }

        let trimmed = path.strip_prefix('/')?.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').collect();

        match segments.as_slice() {
            ["modules", name] if !name.is_empty() => {
                let module_name = urlencoding::decode(name).ok()?.into_owned();
                Some(Self::ModuleDetails { module_name })
            }
            ["system", "health"] => Some(Self::SystemHealth),
            _ => None,
        }
    }

    /// Kanonická cesta stránky (pro odkazy a přesměrování)
    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => DASHBOARD.to_string(),
            Self::ModuleDetails { module_name } => {
                format!("/modules/{}", urlencoding::encode(module_name))
            }
            Self::SystemHealth => SYSTEM_HEALTH.to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::ModuleDetails { .. } => "ModuleDetails",
            Self::SystemHealth => "SystemHealth",
        }
    }
}

/// Vytvoř axum router se všemi stránkami
pub fn build(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route(DASHBOARD, get(handlers::dashboard::dashboard))
        .route(MODULE_DETAILS, get(handlers::modules::module_details))
        .route(SYSTEM_HEALTH, get(handlers::health::system_health))
        .route("/healthz", get(handlers::healthz))
        .nest_service("/static", assets)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
