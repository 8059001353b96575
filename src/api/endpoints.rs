use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::{ApiClient, ApiError};

pub const MODULES_PATH: &str = "/api/modules";
pub const HEALTH_PATH: &str = "/api/health";

/// Odpověď `GET /api/modules`
#[derive(Debug, Serialize, Deserialize)]
pub struct ModulesResponse {
    pub modules: Vec<Value>,
}

impl ApiClient {
    /// Získá seznam modulů v pořadí, jak je vrátil server
    pub async fn modules(&self) -> Result<Vec<Value>, ApiError> {
        let response: ModulesResponse = self.get(MODULES_PATH).await?;
        Ok(response.modules)
    }

    /// Získá health záznam (bez obálky)
    pub async fn health(&self) -> Result<Value, ApiError> {
        self.get(HEALTH_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_modules_unwraps_envelope() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(MODULES_PATH);
                then.status(200)
                    .json_body(json!({"modules": ["zeta", "alpha", {"name": "beta"}]}));
            })
            .await;

        let client = ApiClient::new(&server.base_url()).unwrap();
        let modules = client.modules().await.unwrap();

        assert_eq!(modules, vec![json!("zeta"), json!("alpha"), json!({"name": "beta"})]);
    }

    #[tokio::test]
    async fn test_modules_without_envelope_is_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(MODULES_PATH);
                then.status(200).json_body(json!(["alpha"]));
            })
            .await;

        let client = ApiClient::new(&server.base_url()).unwrap();
        assert!(matches!(client.modules().await, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_health_returns_body_as_is() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(HEALTH_PATH);
                then.status(200).json_body(json!({"status": "healthy", "version": "0.1.0"}));
            })
            .await;

        let client = ApiClient::new(&server.base_url()).unwrap();
        let health = client.health().await.unwrap();

        assert_eq!(health, json!({"status": "healthy", "version": "0.1.0"}));
    }
}
