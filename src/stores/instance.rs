//! Application bootstrap state.
//!
//! Each action issues one backend call and stores the latest response. A
//! failed call is reported through the notification banner and the action
//! returns `None`; nothing is retried and nothing propagates. Concurrent
//! calls of the same action are not serialized: the last response to
//! arrive wins.

use super::notification::NotificationStore;
use super::user::UserProfileLoader;
use crate::api::{ApiResponse, ConfigResponse, InitResponse, InstanceApi, PingResponse};
use crate::error::ApiError;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

pub const INIT_FAILED: &str = "Failed to init application.";
pub const PING_FAILED: &str = "Failed to fetch ping data.";
pub const CONFIG_FAILED: &str = "Failed to fetch config data.";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InstanceState {
    pub init_data: Option<InitResponse>,
    /// Set once after the first successful init; never reset.
    pub initialized: bool,
    pub ping_data: Option<PingResponse>,
    pub config_data: Option<ConfigResponse>,
}

#[derive(Clone)]
pub struct InstanceStore {
    api: Arc<dyn InstanceApi>,
    user: Arc<dyn UserProfileLoader>,
    notifications: NotificationStore,
    state: Arc<watch::Sender<InstanceState>>,
}

impl InstanceStore {
    pub fn new(
        api: Arc<dyn InstanceApi>,
        user: Arc<dyn UserProfileLoader>,
        notifications: NotificationStore,
    ) -> Self {
        let (state, _) = watch::channel(InstanceState::default());
        Self {
            api,
            user,
            notifications,
            state: Arc::new(state),
        }
    }

    /// Fetch the init payload, load the user profile when authenticated,
    /// then mark the application initialized.
    pub async fn init_app(&self) -> Option<ApiResponse<InitResponse>> {
        tracing::debug!("instance.init_app");
        match self.api.get_init().await {
            Ok(response) => {
                let authenticated = response.data.authenticated;
                let init_data = response.data.clone();
                self.state.send_modify(|state| state.init_data = Some(init_data));
                if authenticated {
                    self.user.fetch_user_profile().await;
                }
                self.state.send_modify(|state| state.initialized = true);
                Some(response)
            }
            Err(err) => {
                self.report_failure("init_app", &err, INIT_FAILED);
                None
            }
        }
    }

    pub async fn fetch_ping(&self) -> Option<ApiResponse<PingResponse>> {
        tracing::debug!("instance.fetch_ping");
        match self.api.get_ping().await {
            Ok(response) => {
                let ping_data = response.data.clone();
                self.state.send_modify(|state| state.ping_data = Some(ping_data));
                Some(response)
            }
            Err(err) => {
                self.report_failure("fetch_ping", &err, PING_FAILED);
                None
            }
        }
    }

    pub async fn fetch_config(&self) -> Option<ApiResponse<ConfigResponse>> {
        tracing::debug!("instance.fetch_config");
        match self.api.get_config().await {
            Ok(response) => {
                let config_data = response.data.clone();
                self.state.send_modify(|state| state.config_data = Some(config_data));
                Some(response)
            }
            Err(err) => {
                self.report_failure("fetch_config", &err, CONFIG_FAILED);
                None
            }
        }
    }

    fn report_failure(&self, action: &str, err: &ApiError, message: &str) {
        tracing::warn!(action, error = %err, "instance action failed");
        self.notifications.error(message);
    }

    pub fn state(&self) -> InstanceState {
        self.state.borrow().clone()
    }

    pub fn initialized(&self) -> bool {
        self.state.borrow().initialized
    }

    pub fn subscribe(&self) -> watch::Receiver<InstanceState> {
        self.state.subscribe()
    }
}
