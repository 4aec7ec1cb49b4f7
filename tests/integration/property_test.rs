//! Integration tests for property listings: creation, slugs, visibility.

use http::StatusCode;

use onestay_core::types::RoleId;

use crate::helpers::TestApp;

fn property_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "description": "Sea view, two bedrooms",
        "address": "12 Quai des Belges",
        "city": "Marseille",
        "country": "France",
        "zip_code": "13001",
        "images": ["https://cdn.example.test/cover.jpg"],
    })
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_create_requires_auth() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/properties",
            Some(property_body("Villa Anonyme")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_create_allocates_slug_sequence() {
    let app = TestApp::new().await;
    let name = app.unique_name("Villa Rose");
    let expected_base = app.unique_slug("villa-rose");

    let mut slugs = Vec::new();
    for host_tag in ["slug-host-a", "slug-host-b", "slug-host-c"] {
        let host = app
            .create_test_user(host_tag, "password123", RoleId::LOUEUR)
            .await;
        let token = app.login(&host, "password123").await;

        let response = app
            .request(
                "POST",
                "/api/v1/properties",
                Some(property_body(&name)),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        slugs.push(response.data()["slug"].as_str().expect("slug").to_string());
    }

    assert_eq!(
        slugs,
        vec![
            expected_base.clone(),
            format!("{}-1", expected_base),
            format!("{}-2", expected_base),
        ]
    );
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_duplicate_name_for_same_owner_conflicts() {
    let app = TestApp::new().await;
    let host = app
        .create_test_user("dup-host", "password123", RoleId::LOUEUR)
        .await;
    let token = app.login(&host, "password123").await;
    let name = app.unique_name("Chalet Neige");

    let response = app
        .request(
            "POST",
            "/api/v1/properties",
            Some(property_body(&name)),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    // A second listing with the same name is rejected even though a
    // fresh slug could have been allocated.
    let response = app
        .request(
            "POST",
            "/api/v1/properties",
            Some(property_body(&name)),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "CONFLICT");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_draft_hidden_until_published() {
    let app = TestApp::new().await;
    let host = app
        .create_test_user("draft-host", "password123", RoleId::LOUEUR)
        .await;
    let other = app
        .create_test_user("draft-other", "password123", RoleId::CLIENT)
        .await;
    let host_token = app.login(&host, "password123").await;
    let other_token = app.login(&other, "password123").await;

    let created = app
        .request(
            "POST",
            "/api/v1/properties",
            Some(property_body(&app.unique_name("Loft Secret"))),
            Some(&host_token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data()["status"].as_str(), Some("draft"));
    assert!(created.data()["published_at"].is_null());
    let slug = created.data()["slug"].as_str().expect("slug").to_string();
    let path = format!("/api/v1/properties/{}", slug);

    // Anonymous and non-owner viewers must not learn the draft exists.
    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", &path, None, Some(&other_token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", &path, None, Some(&host_token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("POST", &format!("{}/publish", path), None, Some(&host_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"].as_str(), Some("published"));
    assert!(response.data()["published_at"].is_string());

    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_published_listing_appears_in_public_list() {
    let app = TestApp::new().await;
    let host = app
        .create_test_user("list-host", "password123", RoleId::LOUEUR)
        .await;
    let token = app.login(&host, "password123").await;

    let created = app
        .request(
            "POST",
            "/api/v1/properties",
            Some(property_body(&app.unique_name("Mas Provençal"))),
            Some(&token),
        )
        .await;
    let slug = created.data()["slug"].as_str().expect("slug").to_string();

    app.request(
        "POST",
        &format!("/api/v1/properties/{}/publish", slug),
        None,
        Some(&token),
    )
    .await;

    let response = app
        .request("GET", "/api/v1/properties?per_page=100", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let items = response.data()["items"].as_array().expect("items");
    assert!(
        items.iter().any(|p| p["slug"].as_str() == Some(&slug)),
        "published listing missing from public list"
    );
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_rename_reallocates_slug() {
    let app = TestApp::new().await;
    let host = app
        .create_test_user("rename-host", "password123", RoleId::LOUEUR)
        .await;
    let token = app.login(&host, "password123").await;

    let created = app
        .request(
            "POST",
            "/api/v1/properties",
            Some(property_body(&app.unique_name("Loft Original"))),
            Some(&token),
        )
        .await;
    let slug = created.data()["slug"].as_str().expect("slug").to_string();

    let renamed = app.unique_name("Loft Renamed");
    let response = app
        .request(
            "PUT",
            &format!("/api/v1/properties/{}", slug),
            Some(serde_json::json!({ "name": renamed })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let new_slug = response.data()["slug"].as_str().expect("slug").to_string();
    assert_eq!(new_slug, app.unique_slug("loft-renamed"));

    // Renaming to a name that normalizes to the current slug keeps it.
    let respaced = renamed.replace(' ', "  ");
    let response = app
        .request(
            "PUT",
            &format!("/api/v1/properties/{}", new_slug),
            Some(serde_json::json!({ "name": respaced })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["slug"].as_str(), Some(new_slug.as_str()));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_update_requires_owner() {
    let app = TestApp::new().await;
    let host = app
        .create_test_user("owner-host", "password123", RoleId::LOUEUR)
        .await;
    let intruder = app
        .create_test_user("owner-intruder", "password123", RoleId::LOUEUR)
        .await;
    let host_token = app.login(&host, "password123").await;
    let intruder_token = app.login(&intruder, "password123").await;

    let created = app
        .request(
            "POST",
            "/api/v1/properties",
            Some(property_body(&app.unique_name("Villa Gardée"))),
            Some(&host_token),
        )
        .await;
    let slug = created.data()["slug"].as_str().expect("slug").to_string();

    app.request(
        "POST",
        &format!("/api/v1/properties/{}/publish", slug),
        None,
        Some(&host_token),
    )
    .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/properties/{}", slug),
            Some(serde_json::json!({ "city": "Nice" })),
            Some(&intruder_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "FORBIDDEN");

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/properties/{}", slug),
            None,
            Some(&intruder_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_host_listing_hides_drafts_from_others() {
    let app = TestApp::new().await;
    let host = app
        .create_test_user("mixed-host", "password123", RoleId::LOUEUR)
        .await;
    let token = app.login(&host, "password123").await;

    let draft = app
        .request(
            "POST",
            "/api/v1/properties",
            Some(property_body(&app.unique_name("Grange Brute"))),
            Some(&token),
        )
        .await;
    let host_id = draft.data()["host_id"].as_str().expect("host_id").to_string();

    let published = app
        .request(
            "POST",
            "/api/v1/properties",
            Some(property_body(&app.unique_name("Grange Finie"))),
            Some(&token),
        )
        .await;
    let published_slug = published.data()["slug"].as_str().expect("slug").to_string();
    app.request(
        "POST",
        &format!("/api/v1/properties/{}/publish", published_slug),
        None,
        Some(&token),
    )
    .await;

    let path = format!("/api/v1/properties/user/{}", host_id);

    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    let public_view = response.data().as_array().expect("array").len();
    assert_eq!(public_view, 1);

    let response = app.request("GET", &path, None, Some(&token)).await;
    let owner_view = response.data().as_array().expect("array").len();
    assert_eq!(owner_view, 2);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_resolves_by_id_and_slug() {
    let app = TestApp::new().await;
    let host = app
        .create_test_user("resolve-host", "password123", RoleId::LOUEUR)
        .await;
    let token = app.login(&host, "password123").await;

    let created = app
        .request(
            "POST",
            "/api/v1/properties",
            Some(property_body(&app.unique_name("Cabane Perchée"))),
            Some(&token),
        )
        .await;
    let id = created.data()["id"].as_str().expect("id").to_string();
    let slug = created.data()["slug"].as_str().expect("slug").to_string();

    let by_id = app
        .request(
            "GET",
            &format!("/api/v1/properties/{}", id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(by_id.status, StatusCode::OK);
    assert_eq!(by_id.data()["slug"].as_str(), Some(slug.as_str()));

    let by_slug = app
        .request(
            "GET",
            &format!("/api/v1/properties/{}", slug),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(by_slug.status, StatusCode::OK);
    assert_eq!(by_slug.data()["id"].as_str(), Some(id.as_str()));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_delete_property() {
    let app = TestApp::new().await;
    let host = app
        .create_test_user("rm-host", "password123", RoleId::LOUEUR)
        .await;
    let token = app.login(&host, "password123").await;

    let created = app
        .request(
            "POST",
            "/api/v1/properties",
            Some(property_body(&app.unique_name("Moulin Vendu"))),
            Some(&token),
        )
        .await;
    let slug = created.data()["slug"].as_str().expect("slug").to_string();

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/properties/{}", slug),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data()["message"].is_string());

    let response = app
        .request(
            "GET",
            &format!("/api/v1/properties/{}", slug),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
