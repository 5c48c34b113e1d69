use serde::de::DeserializeOwned;

use crate::query::{QueryParams, QueryResult};
use crate::record::Role;
use crate::wire::{AuthInfo, ErrorBody, Health};

use super::failure::RequestFailure;

/// Typed client for the roles API.
///
/// Clone-friendly: reqwest clients share their connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` like `"http://127.0.0.1:3000"`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/roles`
    pub async fn roles(&self, params: &QueryParams) -> Result<QueryResult<Role>, RequestFailure> {
        self.get_json("/api/roles", &params.to_query_pairs()).await
    }

    /// `GET /api/auth/info`
    pub async fn auth_info(&self) -> Result<AuthInfo, RequestFailure> {
        self.get_json("/api/auth/info", &[]).await
    }

    /// `GET /api/health`
    pub async fn health(&self) -> Result<Health, RequestFailure> {
        self.get_json("/api/health", &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, RequestFailure> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let fallback = status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string();
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => fallback,
            };
            tracing::debug!(%url, status = status.as_u16(), %message, "request failed");
            return Err(RequestFailure::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RequestFailure::Decode(e.to_string()))
    }
}
