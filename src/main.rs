mod api;
mod config;
mod handlers;
mod models;
mod router;
mod store;
mod templates;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::ApiClient;
use config::DashboardConfig;
use handlers::AppState;
use store::DashboardStore;

#[derive(Parser, Debug)]
#[command(name = "cardinal-dashboard")]
#[command(about = "Web dashboard for the Cardinal API", long_about = None)]
struct Args {
    /// Host pro HTTP server
    #[arg(long, env = "CARDINAL_DASHBOARD_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port pro HTTP server
    #[arg(short, long, env = "CARDINAL_DASHBOARD_PORT", default_value = "3000")]
    port: u16,

    /// Base URL Cardinal API (odtud se volá /api/modules a /api/health)
    #[arg(long, env = "CARDINAL_DASHBOARD_API_URL", default_value = "http://127.0.0.1:8000")]
    api_url: String,

    /// Adresář se statickými soubory servírovanými na /static
    #[arg(long, env = "CARDINAL_DASHBOARD_ASSETS_DIR", default_value = "dist")]
    assets_dir: PathBuf,

    /// Otevřít dashboard v prohlížeči po startu
    #[arg(long)]
    open_browser: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Inicializuj logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardinal_dashboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI argumenty
    let args = Args::parse();
    let config = DashboardConfig::new(
        &args.host,
        args.port,
        &args.api_url,
        args.assets_dir,
        args.open_browser,
    )?;

    tracing::info!("Starting Cardinal Dashboard...");

    let api = ApiClient::new(&config.api_url)?;
    tracing::info!("Using Cardinal API at {}", api.base_url());

    if !config.assets_dir.exists() {
        tracing::warn!("Assets directory {} does not exist", config.assets_dir.display());
    }

    // Jediná instance stavu pro celou aplikaci
    let store = DashboardStore::new(api);
    tokio::spawn(store::log_state_changes(store.subscribe()));

    let state = Arc::new(AppState { store, config: config.clone() });
    let app = router::build(state);

    // Adresa serveru
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on http://{}", addr);

    if config.open_browser {
        let url = config.public_url();
        if let Err(e) = utils::open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
            tracing::info!("Please open {} manually", url);
        }
    }

    axum::serve(listener, app).await?;

    Ok(())
}
