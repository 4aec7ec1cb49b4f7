//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use onestay_auth::PasswordHasher;
use onestay_core::config::AppConfig;
use onestay_core::types::RoleId;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Per-instance marker keeping this test's rows distinct from
    /// every other test's, so the suite can run in parallel against a
    /// shared database without cleanup.
    suffix: String,
}

impl TestApp {
    /// Create a new test application wired to the `test` environment.
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db = onestay_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        onestay_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");
        onestay_database::seed::seed_roles(db.pool())
            .await
            .expect("Failed to seed roles");

        let db_pool = db.pool().clone();
        let state = onestay_api::app::build_state(&config, db);
        let router = onestay_api::router::build_router(state);

        Self {
            router,
            db_pool,
            suffix: Uuid::new_v4().simple().to_string(),
        }
    }

    /// An email address unique to this test instance.
    pub fn unique_email(&self, tag: &str) -> String {
        format!("{}-{}@integration.test", tag, self.suffix)
    }

    /// A display name unique to this test instance.
    pub fn unique_name(&self, base: &str) -> String {
        format!("{} {}", base, self.suffix)
    }

    /// A slug unique to this test instance.
    pub fn unique_slug(&self, base: &str) -> String {
        format!("{}-{}", base, self.suffix)
    }

    /// Insert a user directly into the database and return their email.
    pub async fn create_test_user(&self, tag: &str, password: &str, role_id: RoleId) -> String {
        let email = self.unique_email(tag);
        let hash = PasswordHasher::new()
            .hash_password(password)
            .expect("Failed to hash password");

        sqlx::query(
            "INSERT INTO users (first_name, last_name, email, password_hash, role_id) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(tag)
        .bind("Tester")
        .bind(&email)
        .bind(&hash)
        .bind(role_id)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test user");

        email
    }

    /// Login and return the JWT token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self
            .request("POST", "/api/v1/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.data()["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
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
            req = req.header("Authorization", format!("Bearer {}", token));
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
    /// The `data` payload of a success envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// The `error.code` of an error envelope.
    pub fn error_code(&self) -> &str {
        self.body["error"]["code"].as_str().unwrap_or("")
    }
}
