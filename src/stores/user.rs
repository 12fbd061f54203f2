use super::notification::NotificationStore;
use crate::api::{ApiResponse, UserApi, UserProfile};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::watch;

pub const USER_PROFILE_FAILED: &str = "Failed to fetch user profile.";

/// Profile loading as seen by `InstanceStore` after an authenticated init.
pub trait UserProfileLoader: Send + Sync {
    fn fetch_user_profile(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

/// Holds the authenticated user's profile.
#[derive(Clone)]
pub struct UserStore {
    api: Arc<dyn UserApi>,
    notifications: NotificationStore,
    profile: Arc<watch::Sender<Option<UserProfile>>>,
}

impl UserStore {
    pub fn new(api: Arc<dyn UserApi>, notifications: NotificationStore) -> Self {
        let (profile, _) = watch::channel(None);
        Self {
            api,
            notifications,
            profile: Arc::new(profile),
        }
    }

    pub async fn fetch_user_profile(&self) -> Option<ApiResponse<UserProfile>> {
        tracing::debug!("user.fetch_profile");
        match self.api.get_user_profile().await {
            Ok(response) => {
                self.profile.send_replace(Some(response.data.clone()));
                Some(response)
            }
            Err(err) => {
                tracing::warn!(error = %err, "user.fetch_profile failed");
                self.notifications.error(USER_PROFILE_FAILED);
                None
            }
        }
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.profile.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<UserProfile>> {
        self.profile.subscribe()
    }
}

impl UserProfileLoader for UserStore {
    fn fetch_user_profile(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(async move {
            UserStore::fetch_user_profile(self).await;
        })
    }
}
