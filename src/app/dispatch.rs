use super::AppStores;
use crate::api::UserProfile;
use crate::cli::Commands;
use crate::stores::{InstanceState, Notification, Severity};
use serde::Serialize;
use tracing::info;

/// Store snapshot after a command ran.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub instance: InstanceState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

impl Report {
    pub fn failed(&self) -> bool {
        self.notification
            .as_ref()
            .is_some_and(|n| n.severity == Severity::Error)
    }
}

pub async fn dispatch(command: Commands, stores: &AppStores) -> Report {
    info!(?command, "dispatch");
    match command {
        Commands::Init => {
            stores.instance.init_app().await;
        }
        Commands::Ping => {
            stores.instance.fetch_ping().await;
        }
        Commands::ServerConfig => {
            stores.instance.fetch_config().await;
        }
        Commands::Bootstrap => {
            stores.instance.init_app().await;
            stores.instance.fetch_ping().await;
            stores.instance.fetch_config().await;
        }
    }

    Report {
        instance: stores.instance.state(),
        user: stores.user.profile(),
        notification: stores.notifications.current(),
    }
}
