//! Integration tests for the session lifecycle.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

use helpers::TestApp;

#[tokio::test]
async fn test_check_session_without_cookie() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/checkSession", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, Value::Null);
}

#[tokio::test]
async fn test_session_lifecycle() {
    let app = TestApp::new();
    app.register_user("annak", "a@b.com").await;

    let login = app
        .request(
            "POST",
            "/api/login",
            Some(json!({ "login": "annak", "password": "Passw0rd!" })),
            None,
        )
        .await;
    let cookie = login.session_cookie().expect("session cookie");

    let check = app
        .request("GET", "/api/checkSession", None, Some(&cookie))
        .await;
    assert_eq!(check.status, StatusCode::OK);
    assert_eq!(check.body, login.body);

    let logout = app.request("GET", "/api/logout", None, Some(&cookie)).await;
    assert_eq!(logout.status, StatusCode::OK);
    assert_eq!(logout.message(), Some("logout_success"));
    assert!(logout.clears_session_cookie());

    let check = app
        .request("GET", "/api/checkSession", None, Some(&cookie))
        .await;
    assert_eq!(check.status, StatusCode::OK);
    assert_eq!(check.body, Value::Null);
}

#[tokio::test]
async fn test_logout_without_session() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/logout", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), Some("logout_success"));
    assert!(response.clears_session_cookie());
}

#[tokio::test]
async fn test_forged_cookie_is_ignored() {
    let app = TestApp::new();

    for cookie in ["sid=garbage", "sid=", "sid=AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"] {
        let response = app
            .request("GET", "/api/checkSession", None, Some(cookie))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, Value::Null, "{cookie}");
    }
}

#[tokio::test]
async fn test_login_rotates_session() {
    let app = TestApp::new();
    app.register_user("annak", "a@b.com").await;

    let first = app.login("annak", "Passw0rd!").await;

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(json!({ "login": "annak", "password": "Passw0rd!" })),
            Some(&first),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let second = response.session_cookie().expect("rotated cookie");
    assert_ne!(first, second);

    let old = app
        .request("GET", "/api/checkSession", None, Some(&first))
        .await;
    assert_eq!(old.body, Value::Null);

    let new = app
        .request("GET", "/api/checkSession", None, Some(&second))
        .await;
    assert_eq!(new.body["login"], "annak");
}

#[tokio::test]
async fn test_sessions_are_per_client() {
    let app = TestApp::new();
    app.register_user("annak", "a@b.com").await;
    app.register_user("janek", "j@b.com").await;

    let anna = app.login("annak", "Passw0rd!").await;
    let jan = app.login("janek", "Passw0rd!").await;

    app.request("GET", "/api/logout", None, Some(&anna)).await;

    let response = app
        .request("GET", "/api/checkSession", None, Some(&jan))
        .await;
    assert_eq!(response.body["login"], "janek");
}
