//! Integration tests for user registration and management.

use http::StatusCode;

use onestay_core::types::RoleId;

use crate::helpers::TestApp;

fn register_body(email: &str, role_id: i64) -> serde_json::Value {
    serde_json::json!({
        "first_name": "New",
        "last_name": "User",
        "email": email,
        "password": "password123",
        "role_id": role_id,
    })
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_register_requires_admin() {
    let app = TestApp::new().await;
    let client = app
        .create_test_user("reg-client", "password123", RoleId::CLIENT)
        .await;

    let body = register_body(&app.unique_email("reg-target"), 1);

    let response = app
        .request("POST", "/api/v1/users/register", Some(body.clone()), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let token = app.login(&client, "password123").await;
    let response = app
        .request("POST", "/api/v1/users/register", Some(body), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "FORBIDDEN");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_register_duplicate_email_conflict() {
    let app = TestApp::new().await;
    let admin = app
        .create_test_user("reg-admin", "password123", RoleId::ADMIN)
        .await;
    let token = app.login(&admin, "password123").await;

    let first = app.unique_email("tenant-one");
    let second = app.unique_email("tenant-two");

    let response = app
        .request(
            "POST",
            "/api/v1/users/register",
            Some(register_body(&first, 1)),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["email"].as_str(), Some(first.as_str()));
    assert_eq!(response.data()["role"]["slug"].as_str(), Some("client"));

    let response = app
        .request(
            "POST",
            "/api/v1/users/register",
            Some(register_body(&second, 1)),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    // Same email again must be rejected.
    let response = app
        .request(
            "POST",
            "/api/v1/users/register",
            Some(register_body(&first, 1)),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "CONFLICT");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_register_validates_password_length() {
    let app = TestApp::new().await;
    let admin = app
        .create_test_user("reg-pw-admin", "password123", RoleId::ADMIN)
        .await;
    let token = app.login(&admin, "password123").await;

    let mut body = register_body(&app.unique_email("shortpw"), 1);
    body["password"] = serde_json::json!("12345");

    let response = app
        .request("POST", "/api/v1/users/register", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_register_rejects_unknown_role() {
    let app = TestApp::new().await;
    let admin = app
        .create_test_user("reg-role-admin", "password123", RoleId::ADMIN)
        .await;
    let token = app.login(&admin, "password123").await;

    let response = app
        .request(
            "POST",
            "/api/v1/users/register",
            Some(register_body(&app.unique_email("ghost-role"), 999_999)),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_list_users_admin_only() {
    let app = TestApp::new().await;
    let client = app
        .create_test_user("list-client", "password123", RoleId::CLIENT)
        .await;
    let admin = app
        .create_test_user("list-admin", "password123", RoleId::ADMIN)
        .await;

    let client_token = app.login(&client, "password123").await;
    let response = app
        .request("GET", "/api/v1/users", None, Some(&client_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let admin_token = app.login(&admin, "password123").await;
    let response = app
        .request("GET", "/api/v1/users?page=1&per_page=5", None, Some(&admin_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let data = response.data();
    assert!(data["items"].is_array());
    assert_eq!(data["page"].as_u64(), Some(1));
    assert_eq!(data["page_size"].as_u64(), Some(5));
    assert!(data["total_items"].as_u64().expect("total_items") >= 2);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_update_own_profile() {
    let app = TestApp::new().await;
    let email = app
        .create_test_user("profile-edit", "password123", RoleId::CLIENT)
        .await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request(
            "PUT",
            "/api/v1/users/profile",
            Some(serde_json::json!({ "first_name": "Renamed" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["first_name"].as_str(), Some("Renamed"));
    // Untouched fields keep their values.
    assert_eq!(response.data()["email"].as_str(), Some(email.as_str()));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_update_profile_email_collision() {
    let app = TestApp::new().await;
    let first = app
        .create_test_user("collide-one", "password123", RoleId::CLIENT)
        .await;
    let second = app
        .create_test_user("collide-two", "password123", RoleId::CLIENT)
        .await;
    let token = app.login(&first, "password123").await;

    let response = app
        .request(
            "PUT",
            "/api/v1/users/profile",
            Some(serde_json::json!({ "email": second })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "CONFLICT");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_admin_updates_user_role() {
    let app = TestApp::new().await;
    let admin = app
        .create_test_user("promote-admin", "password123", RoleId::ADMIN)
        .await;
    let token = app.login(&admin, "password123").await;

    let registered = app
        .request(
            "POST",
            "/api/v1/users/register",
            Some(register_body(&app.unique_email("promotee"), 1)),
            Some(&token),
        )
        .await;
    assert_eq!(registered.status, StatusCode::OK);
    let user_id = registered.data()["id"].as_str().expect("user id").to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/users/{}", user_id),
            Some(serde_json::json!({ "role_id": 2 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["role"]["slug"].as_str(), Some("loueur"));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_admin_update_missing_user() {
    let app = TestApp::new().await;
    let admin = app
        .create_test_user("update-ghost-admin", "password123", RoleId::ADMIN)
        .await;
    let token = app.login(&admin, "password123").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/users/{}", uuid::Uuid::new_v4()),
            Some(serde_json::json!({ "first_name": "Ghost" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_delete_user() {
    let app = TestApp::new().await;
    let admin = app
        .create_test_user("delete-admin", "password123", RoleId::ADMIN)
        .await;
    let admin_token = app.login(&admin, "password123").await;

    let victim = app
        .create_test_user("delete-victim", "password123", RoleId::CLIENT)
        .await;
    let victim_token = app.login(&victim, "password123").await;

    let registered = app
        .request("GET", "/api/v1/users/profile", None, Some(&victim_token))
        .await;
    let victim_id = registered.data()["id"].as_str().expect("user id").to_string();

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/users/{}", victim_id),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data()["message"].is_string());

    // The old token still decodes, but the account is gone.
    let response = app
        .request("GET", "/api/v1/users/profile", None, Some(&victim_token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_delete_user_requires_admin() {
    let app = TestApp::new().await;
    let client = app
        .create_test_user("nodelete-client", "password123", RoleId::CLIENT)
        .await;
    let token = app.login(&client, "password123").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/users/{}", uuid::Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
