use super::*;
use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use shared::domain::UserId;
use tokio::net::TcpListener;

async fn directory() -> Json<Value> {
    Json(json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": { "name": "Romaguera-Crona" }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "phone": "010-692-6593 x09125"
        }
    ]))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn spawn_directory_server() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new()
        .route("/users", get(directory))
        .route("/broken", get(broken));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

#[tokio::test]
async fn http_source_decodes_directory_rows() {
    let server_url = spawn_directory_server().await.expect("spawn server");
    let url = Url::parse(&format!("{server_url}/users")).expect("url");
    let source = HttpUserSource::new(url);

    let users = source.fetch_users().await.expect("fetch users");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, UserId(1));
    assert_eq!(users[0].username, "Bret");
    assert_eq!(users[1].phone, "010-692-6593 x09125");
}

#[tokio::test]
async fn http_source_treats_error_status_as_failure() {
    let server_url = spawn_directory_server().await.expect("spawn server");
    let url = Url::parse(&format!("{server_url}/broken")).expect("url");
    let source = HttpUserSource::with_timeout(url, Duration::from_secs(5)).expect("source");

    let err = source.fetch_users().await.expect_err("should fail");
    assert!(matches!(err, FetchError::Transport(_)));
    assert!(err.display_message().contains("500"));
}

#[tokio::test]
async fn http_source_reports_unreachable_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let url = Url::parse(&format!("http://{addr}/users")).expect("url");
    let err = HttpUserSource::new(url)
        .fetch_users()
        .await
        .expect_err("should fail");
    assert!(!err.display_message().is_empty());
}

#[tokio::test]
async fn static_source_answers_once() {
    let source = StaticUserSource::ok(Vec::new());
    assert!(source.fetch_users().await.expect("first").is_empty());
    let err = source.fetch_users().await.expect_err("second");
    assert_eq!(err.display_message(), "user source already consumed");
}

#[tokio::test]
async fn failing_and_missing_sources_carry_messages() {
    let err = StaticUserSource::failing("Network Error")
        .fetch_users()
        .await
        .expect_err("should fail");
    assert_eq!(err.display_message(), "Network Error");

    let err = StaticUserSource::failing("  ")
        .fetch_users()
        .await
        .expect_err("should fail");
    assert_eq!(err.display_message(), crate::error::FALLBACK_FETCH_ERROR);

    let err = MissingUserSource.fetch_users().await.expect_err("missing");
    assert!(matches!(err, FetchError::Unavailable));
}

#[tokio::test]
async fn http_source_from_settings_targets_configured_url() {
    let server_url = spawn_directory_server().await.expect("spawn server");
    let settings = ClientSettings {
        users_url: format!("{server_url}/users"),
        request_timeout_secs: Some(5),
        ..ClientSettings::default()
    };
    let source = HttpUserSource::from_settings(&settings).expect("source");

    assert_eq!(source.users_url().as_str(), format!("{server_url}/users"));
    assert_eq!(source.fetch_users().await.expect("fetch users").len(), 2);
}
