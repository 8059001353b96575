use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::path::PathBuf;

/// Konfigurace dashboardu (sestavená z CLI argumentů)
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub host: String,
    pub port: u16,
    /// Base URL Cardinal API, bez trailing slashe
    pub api_url: String,
    /// Adresář se statickými soubory (`/static`)
    pub assets_dir: PathBuf,
    pub open_browser: bool,
}

impl DashboardConfig {
    pub fn new(
        host: &str,
        port: u16,
        api_url: &str,
        assets_dir: impl Into<PathBuf>,
        open_browser: bool,
    ) -> Result<Self> {
        Ok(Self {
            host: host.to_string(),
            port,
            api_url: normalize_api_url(api_url)?,
            assets_dir: assets_dir.into(),
            open_browser,
        })
    }

    /// Adresa pro TcpListener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL pro prohlížeč (0.0.0.0 se v prohlížeči otevřít nedá)
    pub fn public_url(&self) -> String {
        let host = match self.host.as_str() {
            "0.0.0.0" | "::" => "127.0.0.1",
            other => other,
        };
        format!("http://{}:{}", host, self.port)
    }
}

/// Ověří base URL Cardinal API a ořízne trailing slash
pub fn normalize_api_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw.trim()).with_context(|| format!("Invalid API URL: {}", raw))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!("API URL must use http or https, got: {}", url.scheme());
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
