pub mod http;
pub mod http_client;
pub mod lenient;
pub mod traits;
pub mod types;

pub use http::HttpApi;
pub use http_client::{build_api_client, build_api_client_with_timeout};
pub use traits::{ApiFuture, InstanceApi, UserApi};
pub use types::{ApiResponse, ConfigResponse, InitResponse, PingResponse, UserProfile};
