//! Integration tests for login, logout, and the role allow-list.
//!
//! These run the real client against a wiremock backend.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lobbydesk_domain::ClientError;
use lobbydesk_infrastructure::{ApiClient, ApiConfig};

fn user_json(role: &str) -> Value {
    json!({
        "id": 1,
        "username": "ops",
        "email": "ops@example.com",
        "user_type": role,
        "is_active": true,
        "is_verified": true
    })
}

fn login_body(role: &str) -> Value {
    json!({
        "data": {
            "access": "access-1",
            "refresh": "refresh-1",
            "user": user_json(role)
        },
        "message": "Login successful"
    })
}

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig::new(server.uri())).expect("client")
}

#[tokio::test]
async fn test_login_with_platform_role_installs_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/"))
        .and(body_partial_json(json!({ "username": "ops" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body("platform_admin")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.login("ops", "secret").await.expect("login");

    assert_eq!(response.access, "access-1");
    assert_eq!(response.user.username, "ops");
    assert!(client.session().is_authenticated().await);
    assert_eq!(
        client.session().access_token().await,
        Some("access-1".to_owned())
    );
    assert_eq!(
        client.session().refresh_token().await,
        Some("refresh-1".to_owned())
    );
}

#[tokio::test]
async fn test_login_by_email_sends_email_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/"))
        .and(body_partial_json(json!({
            "email": "ops@example.com",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body("platform_admin")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .login_with_email("ops@example.com", "secret")
        .await
        .expect("login");

    assert_eq!(response.user.email, "ops@example.com");
    assert!(client.session().is_authenticated().await);
}

#[tokio::test]
async fn test_login_with_hotel_role_is_forbidden_and_stores_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body("receptionist")))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.login("desk", "secret").await.expect_err("forbidden");

    assert!(matches!(err, ClientError::ForbiddenUser(_)));
    assert!(!client.session().is_authenticated().await);
    assert_eq!(client.session().access_token().await, None);
}

#[tokio::test]
async fn test_login_rejection_surfaces_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "detail": "Invalid credentials" })),
        )
        .mount(&server)
        .await;
    // No refresh mock mounted: a login 401 must never trigger refresh.

    let client = client_for(&server).await;
    let err = client.login("ops", "wrong").await.expect_err("rejected");

    match err {
        ClientError::Api { status, message, .. } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!client.session().is_authenticated().await);
}

#[tokio::test]
async fn test_logout_clears_session_even_when_backend_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body("platform_staff")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/logout/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "boom" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.login("ops", "secret").await.expect("login");
    client.logout().await;

    assert!(!client.session().is_authenticated().await);
    assert_eq!(client.session().refresh_token().await, None);
}

#[tokio::test]
async fn test_transport_failure_maps_to_status_zero() {
    // Nothing is listening on this port.
    let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:9")).expect("client");
    let err = client.login("ops", "secret").await.expect_err("refused");

    match err {
        ClientError::Api { status, message, .. } => {
            assert_eq!(status, 0);
            assert!(!message.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_password_reset_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/password-reset/request/"))
        .and(body_partial_json(json!({ "email": "ops@example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "sent" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/password-reset/confirm/"))
        .and(body_partial_json(json!({ "otp": "123456" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "done" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .request_password_reset("ops@example.com")
        .await
        .expect("request");
    client
        .confirm_password_reset("ops@example.com", "123456", "new-password")
        .await
        .expect("confirm");
}

#[tokio::test]
async fn test_password_reset_carries_bearer_when_logged_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body("platform_admin")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/password-reset/request/"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "sent" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.login("ops", "secret").await.expect("login");
    client
        .request_password_reset("ops@example.com")
        .await
        .expect("request");
}
