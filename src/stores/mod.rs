pub mod form_error;
pub mod instance;
pub mod notification;
pub mod user;

pub use form_error::{ErrorRoute, FormErrorMap, FormErrorStore, FormErrors, classify_error};
pub use instance::{CONFIG_FAILED, INIT_FAILED, InstanceState, InstanceStore, PING_FAILED};
pub use notification::{Notification, NotificationPayload, NotificationStore, Severity};
pub use user::{USER_PROFILE_FAILED, UserProfileLoader, UserStore};
