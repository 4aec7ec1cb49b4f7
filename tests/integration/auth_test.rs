//! Integration tests for login, token handling, and role management.

use http::StatusCode;

use onestay_core::types::RoleId;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_login_success() {
    let app = TestApp::new().await;
    let email = app
        .create_test_user("login-ok", "password123", RoleId::ADMIN)
        .await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(serde_json::json!({
                "email": email,
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let data = response.data();
    let token = data["token"].as_str().expect("token missing");
    assert!(!token.is_empty());
    assert!(data["expires_at"].is_string());
    assert_eq!(data["user"]["email"].as_str(), Some(email.as_str()));
    assert_eq!(data["user"]["role"]["slug"].as_str(), Some("admin"));

    // The token is also mirrored in the Authorization response header.
    let header = response
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .expect("Authorization header missing");
    assert_eq!(header, format!("Bearer {}", token));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    let email = app
        .create_test_user("login-bad-pw", "password123", RoleId::CLIENT)
        .await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(serde_json::json!({
                "email": email,
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.error_code(), "UNAUTHORIZED");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_login_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(serde_json::json!({
                "email": app.unique_email("nobody"),
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHORIZED");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_login_rejects_malformed_email() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(serde_json::json!({
                "email": "not-an-email",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_profile_requires_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/v1/users/profile", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHORIZED");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_profile_rejects_garbage_token() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/v1/users/profile", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_profile_returns_caller() {
    let app = TestApp::new().await;
    let email = app
        .create_test_user("profile", "password123", RoleId::LOUEUR)
        .await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request("GET", "/api/v1/users/profile", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["email"].as_str(), Some(email.as_str()));
    assert_eq!(response.data()["role"]["slug"].as_str(), Some("loueur"));
    assert!(response.data()["password_hash"].is_null());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_list_roles_requires_admin() {
    let app = TestApp::new().await;
    let client = app
        .create_test_user("roles-client", "password123", RoleId::CLIENT)
        .await;
    let admin = app
        .create_test_user("roles-admin", "password123", RoleId::ADMIN)
        .await;

    let client_token = app.login(&client, "password123").await;
    let response = app
        .request("GET", "/api/v1/auth/roles", None, Some(&client_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "FORBIDDEN");

    let admin_token = app.login(&admin, "password123").await;
    let response = app
        .request("GET", "/api/v1/auth/roles", None, Some(&admin_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let roles = response.data().as_array().expect("roles array");
    assert!(roles.len() >= 4);
    assert_eq!(roles[0]["slug"].as_str(), Some("client"));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_create_role_super_admin_only() {
    let app = TestApp::new().await;
    let admin = app
        .create_test_user("mkrole-admin", "password123", RoleId::ADMIN)
        .await;
    let super_admin = app
        .create_test_user("mkrole-super", "password123", RoleId::SUPER_ADMIN)
        .await;

    let slug = app.unique_slug("concierge");
    let body = serde_json::json!({ "name": "Concierge", "slug": slug });

    let admin_token = app.login(&admin, "password123").await;
    let response = app
        .request(
            "POST",
            "/api/v1/auth/roles",
            Some(body.clone()),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let super_token = app.login(&super_admin, "password123").await;
    let response = app
        .request(
            "POST",
            "/api/v1/auth/roles",
            Some(body.clone()),
            Some(&super_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["slug"].as_str(), Some(slug.as_str()));
    assert!(response.data()["id"].as_i64().expect("role id") > 4);

    // The slug is globally unique.
    let response = app
        .request("POST", "/api/v1/auth/roles", Some(body), Some(&super_token))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "CONFLICT");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_reserved_roles_cannot_be_deleted() {
    let app = TestApp::new().await;
    let super_admin = app
        .create_test_user("rmrole-super", "password123", RoleId::SUPER_ADMIN)
        .await;
    let token = app.login(&super_admin, "password123").await;

    let response = app
        .request("DELETE", "/api/v1/auth/roles/1", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "FORBIDDEN");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_delete_custom_role() {
    let app = TestApp::new().await;
    let super_admin = app
        .create_test_user("rmrole2-super", "password123", RoleId::SUPER_ADMIN)
        .await;
    let token = app.login(&super_admin, "password123").await;

    let created = app
        .request(
            "POST",
            "/api/v1/auth/roles",
            Some(serde_json::json!({
                "name": "Temporary",
                "slug": app.unique_slug("temporary"),
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let role_id = created.data()["id"].as_i64().expect("role id");

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/auth/roles/{}", role_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/auth/roles/{}", role_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
