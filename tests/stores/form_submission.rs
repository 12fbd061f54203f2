use crate::support::{api_config, backend};
use appstate::ApiError;
use appstate::api::{HttpApi, UserApi};
use appstate::stores::FormErrorStore;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn rejection(status: u16, body: ResponseTemplate) -> ApiError {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/app/auth/user/profile"))
        .respond_with(body)
        .mount(&server)
        .await;
    let api = HttpApi::new(&api_config(&server.uri()));
    let err = api
        .get_user_profile()
        .await
        .expect_err("backend rejects the request");
    assert_eq!(err.status(), Some(status));
    err
}

#[tokio::test]
async fn validation_body_lands_in_form_errors() {
    let (_, stores) = backend().await;
    let component = FormErrorStore::new_component_id();
    let err = rejection(
        400,
        ResponseTemplate::new(400).set_body_json(json!({
            "name": ["Project with the same name already exists"]
        })),
    )
    .await;

    stores
        .form_errors
        .handle_error(&component, Some(&err), Some("Failed to create project"));

    assert_eq!(
        stores.form_errors.get_error_by_component_id(&component),
        Some(json!({"name": ["Project with the same name already exists"]}))
    );
    assert!(stores.notifications.current().is_none());
}

#[tokio::test]
async fn detail_body_lands_in_banner() {
    let (_, stores) = backend().await;
    let err = rejection(
        403,
        ResponseTemplate::new(403).set_body_json(json!({"detail": "Permission denied"})),
    )
    .await;

    stores.form_errors.handle_error("upload", Some(&err), None);

    assert_eq!(
        stores.notifications.current().unwrap().text,
        "Permission denied"
    );
    assert!(stores.form_errors.is_empty());
}

#[tokio::test]
async fn plain_text_body_lands_in_banner() {
    let (_, stores) = backend().await;
    let err = rejection(
        502,
        ResponseTemplate::new(502).set_body_string("Bad Gateway"),
    )
    .await;

    stores
        .form_errors
        .handle_error("upload", Some(&err), Some("Upload failed"));

    assert_eq!(stores.notifications.current().unwrap().text, "Bad Gateway");
}

#[tokio::test]
async fn empty_body_falls_back_to_general_message() {
    let (_, stores) = backend().await;
    let err = rejection(500, ResponseTemplate::new(500)).await;

    stores
        .form_errors
        .handle_error("upload", Some(&err), Some("Upload failed"));

    assert_eq!(stores.notifications.current().unwrap().text, "Upload failed");
}

#[tokio::test]
async fn retry_clears_errors_and_stale_banner() {
    let (_, stores) = backend().await;
    let err = rejection(
        400,
        ResponseTemplate::new(400).set_body_json(json!({"email": ["Enter a valid email"]})),
    )
    .await;
    stores.notifications.error("Previous attempt failed");
    stores.form_errors.handle_error("signup", Some(&err), None);
    assert!(stores.form_errors.get_error_by_component_id("signup").is_some());

    stores.form_errors.clear_errors("signup", false);

    assert!(stores.form_errors.get_error_by_component_id("signup").is_none());
    assert!(stores.notifications.current().is_none());
}
