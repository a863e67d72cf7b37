//! `reqwest`-backed implementation of [`HttpTransport`].

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use bytes::BytesMut;
use futures::StreamExt;

use conspects_core::config::api::ApiConfig;
use conspects_core::error::{AppError, ErrorKind};
use conspects_core::result::AppResult;
use conspects_core::traits::transport::{ApiRequest, ApiResponse, HttpMethod, HttpTransport};

/// Sends requests to the backend with a shared connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    /// Pooled HTTP client.
    client: reqwest::Client,
    /// Base URL without a trailing slash.
    base_url: String,
}

impl ReqwestTransport {
    /// Build a transport from API configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to create HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Patch => reqwest::Method::PATCH,
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> AppResult<ApiResponse> {
        let url = self.url(&request.path);
        let mut builder = self.client.request(to_reqwest_method(request.method), &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Transport,
                format!("{} {} failed: {e}", request.method, url),
                e,
            )
        })?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        // Export archives can be large; collect chunk by chunk.
        let mut body = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Transport,
                    format!("Reading response body from {url} failed: {e}"),
                    e,
                )
            })?;
            body.extend_from_slice(&chunk);
        }

        tracing::debug!(
            method = %request.method,
            url = %url,
            status,
            bytes = body.len(),
            "Backend request completed"
        );

        Ok(ApiResponse {
            status,
            headers,
            body: body.freeze(),
        })
    }
}
