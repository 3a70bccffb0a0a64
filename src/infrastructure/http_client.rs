// HTTP client for the dashboard backend
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::RequestBuilder;
use reqwest::multipart::Form;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{DashboardError, Result};
use crate::infrastructure::config::BackendSettings;
use crate::infrastructure::token_store::TokenProvider;

/// Preconfigured client: base URL, default timeout, and bearer-token
/// injection from the injected provider. No retries, no backoff; a failed
/// call surfaces directly to the caller.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    export_timeout: Duration,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(settings: &BackendSettings, tokens: Arc<dyn TokenProvider>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            http,
            export_timeout: Duration::from_millis(settings.export_timeout_ms),
            tokens,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach `Authorization: Bearer <token>` when the provider holds a
    /// token; leave the header off entirely when it does not.
    async fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        match self.tokens.current().await? {
            Some(token) => Ok(request.header("Authorization", format!("Bearer {token}"))),
            None => Ok(request),
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        let response = self.authorize(request).await?.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "backend request failed");
            return Err(DashboardError::Status { status: status.as_u16(), body });
        }

        Ok(response)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(path, "GET");
        let response = self.send(self.http.get(self.url(path))).await?;
        Ok(response.json().await?)
    }

    pub async fn get_query<Q, T>(&self, path: &str, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "GET");
        let response = self.send(self.http.get(self.url(path)).query(query)).await?;
        Ok(response.json().await?)
    }

    /// POST with parameters in the query string and an empty body.
    pub async fn post_query<Q, T>(&self, path: &str, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "POST");
        let response = self.send(self.http.post(self.url(path)).query(query)).await?;
        Ok(response.json().await?)
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "POST");
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "PUT");
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn delete_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "DELETE");
        let response = self.send(self.http.delete(self.url(path)).json(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        tracing::debug!(path, "POST multipart");
        let response = self.send(self.http.post(self.url(path)).multipart(form)).await?;
        Ok(response.json().await?)
    }

    /// Binary download with the extended export timeout instead of the
    /// default request timeout.
    pub async fn get_bytes(&self, path: &str) -> Result<Bytes> {
        self.get_bytes_query(path, &[] as &[(&str, &str)]).await
    }

    pub async fn get_bytes_query<Q>(&self, path: &str, query: &Q) -> Result<Bytes>
    where
        Q: Serialize + ?Sized,
    {
        tracing::debug!(path, "GET binary");
        let request = self
            .http
            .get(self.url(path))
            .query(query)
            .timeout(self.export_timeout);
        let response = self.send(request).await?;
        Ok(response.bytes().await?)
    }
}
