use askama::Template;

use crate::models::{HealthSummary, ModuleCard, ModuleDetail};
use crate::router::Route;
use crate::store::DashboardState;

// Shared context pro všechny stránky
#[derive(Clone)]
pub struct PageContext {
    pub active: Option<&'static str>,
    pub loading: bool,
    pub error: Option<String>,
    pub api_url: String,
    pub rendered_at: String,
}

impl PageContext {
    pub fn new(route: Option<&Route>, state: &DashboardState, api_url: &str) -> Self {
        Self {
            active: route.map(Route::name),
            loading: state.loading,
            error: state.error.clone(),
            api_url: api_url.to_string(),
            rendered_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }

    /// CSS třída pro položku navigace
    pub fn nav_class(&self, route_name: &str) -> &'static str {
        if self.active == Some(route_name) {
            "nav-link active"
        } else {
            "nav-link"
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub modules: Vec<ModuleCard>,
}

#[derive(Template)]
#[template(path = "module_details.html")]
pub struct ModuleDetailsTemplate {
    pub ctx: PageContext,
    pub module_name: String,
    pub detail: Option<ModuleDetail>,
}

#[derive(Template)]
#[template(path = "system_health.html")]
pub struct SystemHealthTemplate {
    pub ctx: PageContext,
    pub health: HealthSummary,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
    pub path: String,
}
