use serde_json::Value;
use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `appstate`.
///
/// Library callers that mix config and API failures can collect both here.
/// Store actions never surface errors; they turn them into notifications.
/// `Config::validate` returns `ConfigError`, the API traits return
/// `ApiError`, and loading code uses `anyhow::Result` for context chains.
#[derive(Debug, Error)]
pub enum AppStateError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── API client ──────────────────────────────────────────────────────
    #[error("api: {0}")]
    Api(#[from] ApiError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── API errors ──────────────────────────────────────────────────────────────

/// Rejection of a backend call.
///
/// `Response` carries the nested backend body the form-error handler
/// inspects; the other variants never reached a backend response.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Backend answered with a non-success status. `data` is the JSON body,
    /// a JSON string when the body was not JSON, or null when it was empty.
    #[error("request failed with status {status}")]
    Response { status: u16, data: Value },

    #[error("{0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Backend response body, if the backend answered at all.
    pub fn response_data(&self) -> Option<&Value> {
        match self {
            Self::Response { data, .. } => Some(data),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, AppStateError>;
