//! Shared test helpers for integration tests.
//!
//! These tests need a PostgreSQL database reachable at `DATABASE_URL` (or the
//! configured `database.url`). Every test namespaces its rows with a random
//! tag, so tests can share one database and run in parallel.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use cuti_api::{AppState, build_router};
use cuti_auth::{Claims, JwtDecoder, PasswordHasher};
use cuti_core::config::AppConfig;
use cuti_database::DatabasePool;

/// Password given to every seeded account.
pub const PASSWORD: &str = "Rahasia@123";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
    /// Lowercase letters unique to this test
    pub tag: String,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let mut config = AppConfig::load("test").expect("Failed to load test config");
        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database.url = url;
        }
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        cuti_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let db_pool = db.pool().clone();
        let router = build_router(AppState::new(config.clone(), db));

        Self {
            router,
            db_pool,
            config,
            tag: random_tag(),
        }
    }

    /// Department name unique to this test.
    pub fn department_name(&self, label: &str) -> String {
        format!("Departement {label} {}", self.tag)
    }

    /// Username unique to this test.
    pub fn username(&self, label: &str) -> String {
        format!("{label}.{}", self.tag)
    }

    /// Insert a department and return its ID
    pub async fn seed_department(&self, label: &str) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO departments (id, name, email) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(self.department_name(label))
            .bind(format!(
                "{}.{}@departement.go.id",
                label.to_lowercase().replace(' ', "."),
                self.tag
            ))
            .execute(&self.db_pool)
            .await
            .expect("Failed to create test department");
        id
    }

    /// Insert an active account with [`PASSWORD`] and return its username
    pub async fn seed_account(&self, label: &str, role: &str, department_id: Uuid) -> String {
        let hasher = PasswordHasher::new(&self.config.auth);
        let credential = hasher
            .hash_with_expiry(PASSWORD)
            .expect("Failed to hash password");
        let username = self.username(label);

        sqlx::query(
            r#"INSERT INTO accounts (username, name, email, password_hash, password_expired_at, flag_active, role, department_id)
               VALUES ($1, $2, $3, $4, $5, TRUE, $6::account_role, $7)"#,
        )
        .bind(&username)
        .bind("Test User")
        .bind(format!("{username}@test.go.id"))
        .bind(&credential.hash)
        .bind(credential.expires_at)
        .bind(role)
        .bind(department_id)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test account");

        username
    }

    /// Seed an account and log it in, returning its username and token
    pub async fn seed_and_login(&self, label: &str, role: &str, department_id: Uuid) -> (String, String) {
        let username = self.seed_account(label, role, department_id).await;
        let token = self.login(&username, PASSWORD).await;
        (username, token)
    }

    /// Login and return the bearer token from the `Authorization` header
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .request("POST", "/api/v1/user/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.bearer().expect("No bearer token in login response")
    }

    /// Decode a token issued by this app
    pub fn claims(&self, token: &str) -> Claims {
        JwtDecoder::new(&self.config.auth)
            .decode(token)
            .expect("Token should decode")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Token carried in the `Authorization: Bearer` response header.
    pub fn bearer(&self) -> Option<String> {
        self.headers
            .get(AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")
            .map(str::to_string)
    }

    /// The single error message, or the first of a list.
    pub fn error(&self) -> String {
        match &self.body["errors"] {
            Value::String(message) => message.clone(),
            Value::Array(items) => items
                .first()
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            _ => String::new(),
        }
    }
}

/// Ten lowercase letters; names and usernames accept them everywhere.
fn random_tag() -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(10)
        .map(|c| char::from(b'a' + c.to_digit(16).unwrap_or(0) as u8))
        .collect()
}
