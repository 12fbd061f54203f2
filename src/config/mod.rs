pub mod schema;

pub use schema::{ApiConfig, Config, LogLevel, NotificationConfig, ObservabilityConfig};
