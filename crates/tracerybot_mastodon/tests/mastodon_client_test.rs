//! Tests for the Mastodon client against a mock server.

use serde_json::json;
use tracerybot_core::{NotificationId, NotificationKind, StatusId, StatusPost};
use tracerybot_interface::{NotificationFetch, PlatformClient};
use tracerybot_mastodon::MastodonClient;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

async fn client_for(server: &MockServer) -> MastodonClient {
    MastodonClient::new(format!("{}/", server.uri()), TOKEN).expect("client builds")
}

#[tokio::test]
async fn test_list_notifications_newest_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/notifications"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "5",
                "type": "mention",
                "account": {"acct": "alice"},
                "status": {"id": "500", "account": {"acct": "alice"}}
            },
            {"id": "4", "type": "favourite", "account": {"acct": "bob"},
             "status": {"id": "400", "account": {"acct": "tracerybot"}}}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let NotificationFetch::Notifications(list) = client.list_notifications().await else {
        panic!("expected notifications");
    };

    assert_eq!(list.len(), 2);
    assert_eq!(*list[0].id(), NotificationId(5));
    assert_eq!(*list[0].kind(), NotificationKind::Mention);
    assert_eq!(list[0].source_status_id(), &Some(StatusId::from("500")));
    assert_eq!(*list[1].kind(), NotificationKind::Favourite);
}

#[tokio::test]
async fn test_error_payload_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/notifications"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "Something went wrong"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    match client.list_notifications().await {
        NotificationFetch::ApiError(message) => assert_eq!(message, "Something went wrong"),
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/notifications"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"error": "The access token is invalid"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    match client.list_notifications().await {
        NotificationFetch::TransportError(e) => assert_eq!(e.status, Some(401)),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_html_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/notifications"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body>502 Bad Gateway</body></html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    match client.list_notifications().await {
        NotificationFetch::TransportError(e) => assert_eq!(e.status, Some(200)),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/notifications"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert!(matches!(
        client.list_notifications().await,
        NotificationFetch::TransportError(_)
    ));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = MastodonClient::new(uri, TOKEN).expect("client builds");
    assert!(matches!(
        client.list_notifications().await,
        NotificationFetch::TransportError(_)
    ));
}

#[tokio::test]
async fn test_post_public_toot() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/statuses"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({"status": "beep boop", "visibility": "public"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "9001",
            "url": "https://example.social/@tracerybot/9001",
            "account": {"acct": "tracerybot"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let posted = client
        .post_status(&StatusPost::original("beep boop"))
        .await
        .expect("post succeeds");

    assert_eq!(posted.id(), &StatusId::from("9001"));
    assert_eq!(
        posted.url().as_deref(),
        Some("https://example.social/@tracerybot/9001")
    );
}

#[tokio::test]
async fn test_post_reply_targets_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/statuses"))
        .and(body_json(json!({"status": "@alice hi", "in_reply_to_id": "500"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "9002"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .post_status(&StatusPost::reply("@alice hi", StatusId::from("500")))
        .await
        .expect("reply succeeds");
}

#[tokio::test]
async fn test_rejected_post_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/statuses"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"error": "Text character limit"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .post_status(&StatusPost::original("too long"))
        .await
        .expect_err("post rejected");
    assert!(!err.is_fatal());
    assert!(format!("{err}").contains("character limit"));
}

#[tokio::test]
async fn test_verify_credentials_returns_acct() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/verify_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "acct": "tracerybot",
            "username": "tracerybot"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.verify_credentials().await.expect("verified"), "tracerybot");
    assert_eq!(client.platform_name(), "mastodon");
    assert_eq!(client.base_url(), server.uri());
}
