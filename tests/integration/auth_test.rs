//! Integration tests for registration and login.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{SCHOOL_ID, TestApp};

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/register",
            Some(TestApp::registration("annak", "a@b.com")),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), Some("register_complete"));

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(json!({ "login": "annak", "password": "Passw0rd!" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = &response.body;
    assert!(body.get("userId").and_then(|v| v.as_str()).is_some());
    assert_eq!(body["firstName"], "Anna");
    assert_eq!(body["lastName"], "Kowalska");
    assert_eq!(body["login"], "annak");
    assert_eq!(body["email"], "a@b.com");
    assert_eq!(body["schoolId"], SCHOOL_ID);
    assert_eq!(body["role"], "student");
    assert_eq!(body["status"], "active");
    assert!(body["photoURL"].is_null());
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());
    assert!(response.session_cookie().is_some());
}

#[tokio::test]
async fn test_session_cookie_attributes() {
    let app = TestApp::new();
    app.register_user("annak", "a@b.com").await;

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(json!({ "login": "annak", "password": "Passw0rd!" })),
            None,
        )
        .await;

    let cookie = response
        .set_cookie
        .iter()
        .find(|c| c.starts_with("sid="))
        .expect("session cookie set");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[tokio::test]
async fn test_register_duplicate_login() {
    let app = TestApp::new();
    app.register_user("annak", "a@b.com").await;

    let response = app
        .request(
            "POST",
            "/api/register",
            Some(TestApp::registration("annak", "other@b.com")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.message(), Some("login_exists"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    app.register_user("annak", "a@b.com").await;

    let response = app
        .request(
            "POST",
            "/api/register",
            Some(TestApp::registration("annak2", "a@b.com")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.message(), Some("email_exists"));
    assert_eq!(app.store.user_count().await, 1);
}

#[tokio::test]
async fn test_register_unknown_school() {
    let app = TestApp::new();
    let mut body = TestApp::registration("annak", "a@b.com");
    body["schoolId"] = json!("0987654321");

    let response = app.request("POST", "/api/register", Some(body), None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), Some("bad_school"));
}

#[tokio::test]
async fn test_register_validation_codes() {
    let app = TestApp::new();

    let cases = [
        ("schoolId", json!("12345"), "bad_school"),
        ("name", json!("An"), "bad_data"),
        ("lastName", json!("Kowalska2"), "bad_data"),
        ("email", json!("not-an-email"), "bad_data"),
        ("login", json!("anna_k"), "bad_data"),
        ("password", json!("password1"), "bad_data"),
    ];

    for (field, value, code) in cases {
        let mut body = TestApp::registration("annak", "a@b.com");
        body[field] = value;

        let response = app.request("POST", "/api/register", Some(body), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{field}");
        assert_eq!(response.message(), Some(code), "{field}");
    }

    assert_eq!(app.store.user_count().await, 0);
}

#[tokio::test]
async fn test_register_malformed_body() {
    let app = TestApp::new();

    let response = app
        .request_raw("POST", "/api/register", "{not json", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), Some("bad_data"));

    let response = app
        .request("POST", "/api/register", Some(json!({})), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), Some("bad_school"));
}

#[tokio::test]
async fn test_login_wrong_password_matches_unknown_login() {
    let app = TestApp::new();
    app.register_user("annak", "a@b.com").await;

    let wrong = app
        .request(
            "POST",
            "/api/login",
            Some(json!({ "login": "annak", "password": "Passw0rd?" })),
            None,
        )
        .await;
    let unknown = app
        .request(
            "POST",
            "/api/login",
            Some(json!({ "login": "nobody", "password": "Passw0rd!" })),
            None,
        )
        .await;

    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status, unknown.status);
    assert_eq!(wrong.body, unknown.body);
    assert_eq!(wrong.message(), Some("bad_data"));
    assert!(wrong.session_cookie().is_none());
}

#[tokio::test]
async fn test_login_invalid_syntax() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(json!({ "login": "an", "password": "Passw0rd!" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), Some("bad_data"));

    let response = app
        .request_raw("POST", "/api/login", "", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), Some("bad_data"));
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "up");
}
