use serde::Serialize;
use serde_json::{Map, Value};
use tokio::sync::watch;

use crate::api::ApiClient;

pub const MODULES_ERROR: &str = "Failed to fetch modules";
pub const HEALTH_ERROR: &str = "Failed to fetch system health";

/// Sdílený stav dashboardu
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    pub modules: Vec<Value>,
    pub health: Value,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            modules: Vec::new(),
            health: Value::Object(Map::new()),
            loading: false,
            error: None,
        }
    }
}

/// Jediná instance stavu pro celou aplikaci.
///
/// Views čtou pouze snapshoty, stav mění jen `fetch_modules` a `fetch_health`.
/// Každá změna projde přes `watch` kanál, takže odběratelé (`subscribe`)
/// dostanou notifikaci.
pub struct DashboardStore {
    api: ApiClient,
    state: watch::Sender<DashboardState>,
}

impl DashboardStore {
    pub fn new(api: ApiClient) -> Self {
        let (state, _) = watch::channel(DashboardState::default());
        Self { api, state }
    }

    /// Kopie aktuálního stavu
    pub fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }

    /// GET /api/modules a nahrazení `modules`
    pub async fn fetch_modules(&self) {
        let _loading = self.start_loading();

        match self.api.modules().await {
            Ok(modules) => self.state.send_modify(|state| {
                state.modules = modules;
                state.error = None;
            }),
            Err(e) => {
                self.state
                    .send_modify(|state| state.error = Some(MODULES_ERROR.to_string()));
                tracing::error!("Error fetching modules: {}", e);
            }
        }
    }

    /// GET /api/health a nahrazení `health`
    pub async fn fetch_health(&self) {
        let _loading = self.start_loading();

        match self.api.health().await {
            Ok(health) => self.state.send_modify(|state| {
                state.health = health;
                state.error = None;
            }),
            Err(e) => {
                self.state
                    .send_modify(|state| state.error = Some(HEALTH_ERROR.to_string()));
                tracing::error!("Error fetching health: {}", e);
            }
        }
    }

    fn start_loading(&self) -> LoadingGuard<'_> {
        self.state.send_modify(|state| state.loading = true);
        LoadingGuard { state: &self.state }
    }
}

/// Shodí `loading` jako poslední krok operace, i když je future zahozena
/// uprostřed requestu.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<DashboardState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|state| state.loading = false);
    }
}

/// Loguje každou změnu stavu (debug)
pub async fn log_state_changes(mut rx: watch::Receiver<DashboardState>) {
    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();
        tracing::debug!(
            modules = state.modules.len(),
            loading = state.loading,
            error = ?state.error,
            "Dashboard state changed"
        );
    }
}
