pub mod dispatch;

use crate::api::{HttpApi, InstanceApi, UserApi};
use crate::config::{Config, NotificationConfig};
use crate::stores::{FormErrorStore, InstanceStore, NotificationStore, UserStore};
use std::sync::Arc;

/// Every store, wired to its collaborators.
#[derive(Clone)]
pub struct AppStores {
    pub notifications: NotificationStore,
    pub form_errors: FormErrorStore,
    pub user: UserStore,
    pub instance: InstanceStore,
}

impl AppStores {
    pub fn from_config(config: &Config) -> Self {
        let api = Arc::new(HttpApi::new(&config.api));
        Self::with_api(api.clone(), api, &config.notification)
    }

    pub fn with_api(
        instance_api: Arc<dyn InstanceApi>,
        user_api: Arc<dyn UserApi>,
        notification_config: &NotificationConfig,
    ) -> Self {
        let notifications = NotificationStore::new(notification_config);
        let form_errors = FormErrorStore::new(notifications.clone());
        let user = UserStore::new(user_api, notifications.clone());
        let instance = InstanceStore::new(
            instance_api,
            Arc::new(user.clone()),
            notifications.clone(),
        );
        Self {
            notifications,
            form_errors,
            user,
            instance,
        }
    }
}
