use super::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Successful backend answer: HTTP status plus the decoded body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { status: 200, data }
    }
}

/// Application bootstrap payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitResponse {
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub authenticated: bool,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub superuser: bool,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub server_type: Option<String>,
    /// Keys this layer does not interpret, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Health-check payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PingResponse {
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub server_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub maintenance: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Public server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigResponse {
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub server_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub docs_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub collect_statistics: bool,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub user_self_registration: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub username: String,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
