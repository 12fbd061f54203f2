use super::types::{ApiResponse, ConfigResponse, InitResponse, PingResponse, UserProfile};
use crate::error::ApiError;
use std::future::Future;
use std::pin::Pin;

pub type ApiFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<ApiResponse<T>, ApiError>> + Send + 'a>>;

/// Application bootstrap endpoints.
pub trait InstanceApi: Send + Sync {
    fn get_init(&self) -> ApiFuture<'_, InitResponse>;

    fn get_ping(&self) -> ApiFuture<'_, PingResponse>;

    fn get_config(&self) -> ApiFuture<'_, ConfigResponse>;
}

/// Authenticated user endpoints.
pub trait UserApi: Send + Sync {
    fn get_user_profile(&self) -> ApiFuture<'_, UserProfile>;
}
