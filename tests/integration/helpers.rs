//! Shared test helpers for integration tests.
//!
//! The app runs against the in-memory credential store and the in-memory
//! session backend, so no database is needed.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use schoolauth_api::{AppState, build_app};
use schoolauth_auth::session::MemorySessionStore;
use schoolauth_core::config::AppConfig;
use schoolauth_database::store::MemoryCredentialStore;

/// School registered in every test app.
pub const SCHOOL_ID: &str = "1234567890";

const TEST_CONFIG: &str = r#"
[database]
url = "postgres://unused@localhost/unused"

[auth]
argon2_memory_kib = 1024
argon2_iterations = 1
argon2_parallelism = 1
operation_timeout_seconds = 5

[session]
cookie_name = "sid"
"#;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Credential store behind the router
    pub store: Arc<MemoryCredentialStore>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with [`SCHOOL_ID`] registered.
    pub fn new() -> Self {
        let config = AppConfig::from_toml(TEST_CONFIG).expect("Failed to parse test config");
        let store = Arc::new(MemoryCredentialStore::with_schools([SCHOOL_ID]));
        let sessions = Arc::new(MemorySessionStore::new(&config.session));

        let state = AppState::new(config.clone(), store.clone(), sessions)
            .expect("Failed to build app state");

        Self {
            router: build_app(state),
            store,
            config,
        }
    }

    /// A registration body that passes every field rule.
    pub fn registration(login: &str, email: &str) -> Value {
        serde_json::json!({
            "schoolId": SCHOOL_ID,
            "name": "Anna",
            "lastName": "Kowalska",
            "login": login,
            "password": "Passw0rd!",
            "email": email,
            "role": "student",
            "status": "active",
        })
    }

    /// Register a user and assert it succeeded.
    pub async fn register_user(&self, login: &str, email: &str) {
        let response = self
            .request("POST", "/api/register", Some(Self::registration(login, email)), None)
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Registration failed: {:?}",
            response.body
        );
    }

    /// Login and return the session cookie pair (`sid=...`).
    pub async fn login(&self, login: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/login",
                Some(serde_json::json!({ "login": login, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.session_cookie().expect("No session cookie in login response")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, body_str, cookie).await
    }

    /// Make an HTTP request with a raw body
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: impl Into<String>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let req = req
            .body(Body::from(body.into()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let set_cookie = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookie,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Raw `Set-Cookie` header values
    pub set_cookie: Vec<String>,
}

impl TestResponse {
    /// The `message` field of the body.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// The `sid=<value>` pair from a non-empty session cookie.
    pub fn session_cookie(&self) -> Option<String> {
        self.set_cookie
            .iter()
            .filter_map(|c| c.split(';').next())
            .find(|pair| pair.starts_with("sid=") && pair.len() > "sid=".len())
            .map(str::to_string)
    }

    /// Whether the response clears the session cookie.
    pub fn clears_session_cookie(&self) -> bool {
        self.set_cookie
            .iter()
            .any(|c| c.starts_with("sid=;") && c.contains("Max-Age=0"))
    }
}
