use crate::support::{backend, stores_for};
use appstate::app::dispatch::dispatch;
use appstate::cli::Commands;
use appstate::stores::{CONFIG_FAILED, INIT_FAILED, PING_FAILED, Severity, USER_PROFILE_FAILED};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn authenticated_init_loads_profile_before_initializing() {
    let (server, stores) = backend().await;
    Mock::given(method("GET"))
        .and(path("/app/init"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authenticated": true,
            "superuser": false,
            "version": "2024.3.0"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/app/auth/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "alice",
            "email": "alice@example.com",
            "storage": 104_857_600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = stores.instance.init_app().await.expect("init succeeds");

    assert_eq!(response.status, 200);
    assert!(stores.instance.initialized());
    let profile = stores.user.profile().expect("profile loaded during init");
    assert_eq!(profile.username, "alice");
    assert_eq!(profile.extra.get("storage"), Some(&json!(104_857_600)));
    assert!(stores.notifications.current().is_none());
}

#[tokio::test]
async fn anonymous_init_does_not_request_profile() {
    let (server, stores) = backend().await;
    Mock::given(method("GET"))
        .and(path("/app/init"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"authenticated": false})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/app/auth/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "x"})))
        .expect(0)
        .mount(&server)
        .await;

    assert!(stores.instance.init_app().await.is_some());
    assert!(stores.instance.initialized());
    assert!(stores.user.profile().is_none());
}

#[tokio::test]
async fn failed_profile_fetch_still_initializes() {
    let (server, stores) = backend().await;
    Mock::given(method("GET"))
        .and(path("/app/init"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"authenticated": true})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/app/auth/user/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "expired"})))
        .mount(&server)
        .await;

    assert!(stores.instance.init_app().await.is_some());
    assert!(stores.instance.initialized());
    assert_eq!(
        stores.notifications.current().unwrap().text,
        USER_PROFILE_FAILED
    );
}

#[tokio::test]
async fn init_tolerates_null_and_odd_typed_fields() {
    let (server, stores) = backend().await;
    Mock::given(method("GET"))
        .and(path("/app/init"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authenticated": false,
            "superuser": null,
            "version": 2024
        })))
        .mount(&server)
        .await;

    let response = stores.instance.init_app().await.expect("init succeeds");

    assert!(!response.data.superuser);
    assert_eq!(response.data.version.as_deref(), Some("2024"));
    assert!(stores.instance.initialized());
    assert!(stores.notifications.current().is_none());
}

#[tokio::test]
async fn init_rejection_reports_and_stays_uninitialized() {
    let (server, stores) = backend().await;
    Mock::given(method("GET"))
        .and(path("/app/init"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    assert!(stores.instance.init_app().await.is_none());
    assert!(!stores.instance.initialized());

    let notification = stores.notifications.current().unwrap();
    assert_eq!(notification.text, INIT_FAILED);
    assert_eq!(notification.severity, Severity::Error);
}

#[tokio::test]
async fn ping_and_config_store_latest_payloads() {
    let (server, stores) = backend().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "version": "2024.3.0",
            "server_type": "ce",
            "maintenance": false
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "server_type": "ce",
            "docs_url": "https://docs.example.com",
            "collect_statistics": false,
            "user_self_registration": true
        })))
        .mount(&server)
        .await;

    stores.instance.fetch_ping().await;
    stores.instance.fetch_config().await;

    let state = stores.instance.state();
    assert_eq!(state.ping_data.unwrap().server_type.as_deref(), Some("ce"));
    let config = state.config_data.unwrap();
    assert!(config.user_self_registration);
    assert_eq!(config.docs_url.as_deref(), Some("https://docs.example.com"));
}

#[tokio::test]
async fn undecodable_success_body_counts_as_failure() {
    let (server, stores) = backend().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    assert!(stores.instance.fetch_ping().await.is_none());
    assert!(stores.instance.state().ping_data.is_none());
    assert_eq!(stores.notifications.current().unwrap().text, PING_FAILED);
}

#[tokio::test]
async fn unreachable_backend_is_reported_not_propagated() {
    let stores = stores_for("http://127.0.0.1:9");

    assert!(stores.instance.fetch_config().await.is_none());
    assert_eq!(stores.notifications.current().unwrap().text, CONFIG_FAILED);
}

#[tokio::test]
async fn bootstrap_command_runs_all_three_calls() {
    let (server, stores) = backend().await;
    Mock::given(method("GET"))
        .and(path("/app/init"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"authenticated": false})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": "1"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/config"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"status": 503})))
        .mount(&server)
        .await;

    let report = dispatch(Commands::Bootstrap, &stores).await;

    assert!(report.instance.initialized);
    assert!(report.instance.ping_data.is_some());
    assert!(report.instance.config_data.is_none());
    assert_eq!(report.notification.as_ref().unwrap().text, CONFIG_FAILED);
    assert!(report.failed());
}
