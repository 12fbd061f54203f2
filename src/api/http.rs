//! reqwest-backed implementation of the backend API traits.

use super::http_client::build_api_client;
use super::traits::{ApiFuture, InstanceApi, UserApi};
use super::types::{ApiResponse, ConfigResponse, InitResponse, PingResponse, UserProfile};
use crate::config::ApiConfig;
use crate::error::ApiError;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub struct HttpApi {
    client: Client,
    base_url: String,
    init_path: String,
    ping_path: String,
    config_path: String,
    user_profile_path: String,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(config, build_api_client(config))
    }

    pub fn with_client(config: &ApiConfig, client: Client) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            init_path: config.init_path.clone(),
            ping_path: config.ping_path.clone(),
            config_path: config.config_path.clone(),
            user_profile_path: config.user_profile_path.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        let url = self.endpoint(path);
        tracing::debug!(url = %url, "api.request");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            tracing::debug!(url = %url, status, "api.rejected");
            return Err(ApiError::Response {
                status,
                data: parse_error_body(&body),
            });
        }

        let data = serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(ApiResponse { status, data })
    }
}

/// JSON bodies are kept structured, anything else becomes a JSON string.
fn parse_error_body(body: &str) -> Value {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string()))
}

impl InstanceApi for HttpApi {
    fn get_init(&self) -> ApiFuture<'_, InitResponse> {
        Box::pin(self.get_json(&self.init_path))
    }

    fn get_ping(&self) -> ApiFuture<'_, PingResponse> {
        Box::pin(self.get_json(&self.ping_path))
    }

    fn get_config(&self) -> ApiFuture<'_, ConfigResponse> {
        Box::pin(self.get_json(&self.config_path))
    }
}

impl UserApi for HttpApi {
    fn get_user_profile(&self) -> ApiFuture<'_, UserProfile> {
        Box::pin(self.get_json(&self.user_profile_path))
    }
}
