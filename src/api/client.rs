use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Chyba jednoho volání Cardinal API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to send GET request to {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Cardinal API error ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse response JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

/// HTTP klient pro Cardinal API
///
/// Žádný timeout, žádné retry, žádné hlavičky navíc. Každé volání `get`
/// je přesně jeden GET request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        // Ořízni trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { base_url, client })
    }

    /// Sestaví absolutní URL z relativní cesty
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Univerzální GET request
    pub async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport { url, source })?;

        Self::handle_response(response).await
    }

    async fn handle_response<T>(response: reqwest::Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(ApiError::Status { status, body });
        }

        response.json::<T>().await.map_err(ApiError::Decode)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::{json, Value};

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/api/health"), "http://localhost:8000/api/health");
        assert_eq!(client.url("api/health"), "http://localhost:8000/api/health");

        let prefixed = ApiClient::new("http://localhost:8000/cardinal").unwrap();
        assert_eq!(prefixed.url("/api/modules"), "http://localhost:8000/cardinal/api/modules");
    }

    #[tokio::test]
    async fn test_get_decodes_json() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/health");
                then.status(200).json_body(json!({"status": "healthy"}));
            })
            .await;

        let client = ApiClient::new(&server.base_url()).unwrap();
        let body: Value = client.get("/api/health").await.unwrap();

        assert_eq!(body["status"], "healthy");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/health");
                then.status(503).body("maintenance");
            })
            .await;

        let client = ApiClient::new(&server.base_url()).unwrap();
        let err = client.get::<Value>("/api/health").await.unwrap_err();

        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/health");
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let client = ApiClient::new(&server.base_url()).unwrap();
        let err = client.get::<Value>("/api/health").await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();
        let err = client.get::<Value>("/api/health").await.unwrap_err();

        assert!(matches!(err, ApiError::Transport { .. }));
        assert!(err.to_string().contains("http://127.0.0.1:1/api/health"));
    }
}
