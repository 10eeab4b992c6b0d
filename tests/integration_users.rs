#![allow(clippy::unwrap_used, clippy::panic, clippy::missing_panics_doc, unreachable_pub)]
use axum::http::StatusCode;
use serde_json::json;
use time::{Duration, OffsetDateTime};
mod common;

#[tokio::test]
async fn test_add_user() {
    let app = common::TestApp::spawn().await;
    let email = common::unique_email("michael");

    let resp = app
        .client
        .post(format!("{}/users", app.api_url))
        .json(&json!({ "username": "michael", "email": email }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], format!("{email} was added!"));
}

#[tokio::test]
async fn test_added_user_is_retrievable() {
    let app = common::TestApp::spawn().await;
    let email = common::unique_email("fletcher");

    let resp = app
        .client
        .post(format!("{}/users", app.api_url))
        .json(&json!({ "username": "fletcher", "email": email }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let id = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&app.pool)
        .await
        .unwrap();

    let resp = app.client.get(format!("{}/users/{id}", app.api_url)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["username"], "fletcher");
    assert_eq!(body["data"]["email"], email);
    assert!(body["data"]["created_at"].is_string());
}

#[tokio::test]
async fn test_add_user_empty_body() {
    let app = common::TestApp::spawn().await;

    let resp = app
        .client
        .post(format!("{}/users", app.api_url))
        .header("Content-Type", "application/json")
        .body("")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Invalid payload.");
}

#[tokio::test]
async fn test_add_user_empty_object() {
    let app = common::TestApp::spawn().await;

    let resp = app
        .client
        .post(format!("{}/users", app.api_url))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Invalid payload.");
}

#[tokio::test]
async fn test_add_user_missing_username() {
    let app = common::TestApp::spawn().await;

    let resp = app
        .client
        .post(format!("{}/users", app.api_url))
        .json(&json!({ "email": common::unique_email("michael") }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Invalid payload.");
}

#[tokio::test]
async fn test_add_user_blank_username() {
    let app = common::TestApp::spawn().await;

    let resp = app
        .client
        .post(format!("{}/users", app.api_url))
        .json(&json!({ "username": "", "email": common::unique_email("blank") }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Invalid payload.");
}

#[tokio::test]
async fn test_add_user_duplicate_email() {
    let app = common::TestApp::spawn().await;
    let email = common::unique_email("michael");
    let payload = json!({ "username": "michael", "email": email });

    let resp = app.client.post(format!("{}/users", app.api_url)).json(&payload).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app.client.post(format!("{}/users", app.api_url)).json(&payload).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Sorry. That email already exists.");
}

#[tokio::test]
async fn test_single_user() {
    let app = common::TestApp::spawn().await;
    let email = common::unique_email("michael");
    let id = common::add_user(&app.pool, "michael", &email, OffsetDateTime::now_utc()).await;

    let resp = app.client.get(format!("{}/users/{id}", app.api_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["username"], "michael");
    assert_eq!(body["data"]["email"], email);
    assert!(body["data"]["created_at"].is_string());
}

#[tokio::test]
async fn test_single_user_non_numeric_id() {
    let app = common::TestApp::spawn().await;

    let resp = app.client.get(format!("{}/users/blah", app.api_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "User does not exist");
}

#[tokio::test]
async fn test_single_user_incorrect_id() {
    let app = common::TestApp::spawn().await;

    let resp = app.client.get(format!("{}/users/9999999999", app.api_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "User does not exist");
}

#[tokio::test]
async fn test_all_users_ordered_by_created_at_desc() {
    let app = common::TestApp::spawn().await;
    let older_email = common::unique_email("michael");
    let newer_email = common::unique_email("fletcher");

    let now = OffsetDateTime::now_utc();
    common::add_user(&app.pool, "michael", &older_email, now - Duration::days(30)).await;
    common::add_user(&app.pool, "fletcher", &newer_email, now).await;

    let resp = app.client.get(format!("{}/users", app.api_url)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "success");

    let users = body["data"]["users"].as_array().unwrap();
    let position = |email: &str| {
        users
            .iter()
            .position(|u| u["email"] == email)
            .unwrap_or_else(|| panic!("{email} missing from listing"))
    };

    let newer = position(&newer_email);
    let older = position(&older_email);
    assert!(newer < older, "expected most recent user first");
    assert!(users[newer]["created_at"].is_string());
    assert!(users[older]["created_at"].is_string());
}
