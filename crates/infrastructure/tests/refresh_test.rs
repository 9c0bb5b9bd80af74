//! Integration tests for 401 recovery: single-flight refresh and replay.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lobbydesk_domain::{ClientError, UserProfile, UserRole};
use lobbydesk_infrastructure::{ApiClient, ApiConfig, SessionEvent};

fn platform_admin() -> UserProfile {
    UserProfile {
        id: 1,
        username: "ops".to_owned(),
        email: "ops@example.com".to_owned(),
        user_type: UserRole::PlatformAdmin,
        phone_number: None,
        first_name: None,
        last_name: None,
        is_active: true,
        is_verified: true,
        hotel_id: None,
    }
}

fn hotel_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Harbor View",
        "status": "verified",
        "is_verified": true,
        "is_active": true,
        "registration_date": "2024-01-01T00:00:00Z",
        "updated_at": "2024-06-01T00:00:00Z"
    })
}

async fn authenticated_client(server: &MockServer) -> ApiClient {
    let client = ApiClient::new(ApiConfig::new(server.uri())).expect("client");
    client
        .session()
        .install_login("stale".to_owned(), "refresh-1".to_owned(), platform_admin())
        .await;
    client
}

#[tokio::test]
async fn test_401_refreshes_and_replays_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/hotels/h1/"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "expired" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/hotels/h1/"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": hotel_json("h1") })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login/refresh/"))
        .and(body_partial_json(json!({ "refresh": "refresh-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access": "fresh" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authenticated_client(&server).await;
    let hotel = client.hotels().get("h1").await.expect("hotel");

    assert_eq!(hotel.name, "Harbor View");
    assert_eq!(
        client.session().access_token().await,
        Some("fresh".to_owned())
    );
    // Rotation was not offered, so the old refresh token is retained.
    assert_eq!(
        client.session().refresh_token().await,
        Some("refresh-1".to_owned())
    );
}

#[tokio::test]
async fn test_concurrent_401s_share_one_refresh_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/hotels/h1/"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "expired" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/hotels/h1/"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": hotel_json("h1") })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login/refresh/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access": "fresh" }))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = Arc::new(authenticated_client(&server).await);
    let mut handles = Vec::new();
    for _ in 0..5 {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            client.hotels().get("h1").await
        }));
    }
    for handle in handles {
        let hotel = handle.await.expect("join").expect("hotel");
        assert_eq!(hotel.id, "h1");
    }
}

#[tokio::test]
async fn test_failed_refresh_clears_session_and_notifies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/hotels/h1/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "expired" })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login/refresh/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "detail": "Token is blacklisted" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = authenticated_client(&server).await;
    let events = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&events);
    client.on_session_event(move |event| {
        assert_eq!(event, SessionEvent::AuthenticationRequired);
        seen.fetch_add(1, Ordering::SeqCst);
    });

    let err = client.hotels().get("h1").await.expect_err("expired");

    assert!(matches!(err, ClientError::Authentication(_)));
    assert!(!client.session().is_authenticated().await);
    assert_eq!(events.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_replayed_401_surfaces_as_api_error_without_second_refresh() {
    let server = MockServer::start().await;
    // Still 401 even with the fresh token.
    Mock::given(method("GET"))
        .and(path("/admin/hotels/h1/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "no access" })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login/refresh/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access": "fresh" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authenticated_client(&server).await;
    let err = client.hotels().get("h1").await.expect_err("denied");

    match err {
        ClientError::Api { status, message, .. } => {
            assert_eq!(status, 401);
            assert_eq!(message, "no access");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_refresh_rotation_replaces_stored_refresh_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/hotels/h1/"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "expired" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/hotels/h1/"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": hotel_json("h1") })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login/refresh/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access": "fresh", "refresh": "refresh-2" })),
        )
        .mount(&server)
        .await;

    let client = authenticated_client(&server).await;
    client.hotels().get("h1").await.expect("hotel");

    assert_eq!(
        client.session().refresh_token().await,
        Some("refresh-2".to_owned())
    );
}
