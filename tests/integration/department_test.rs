//! Integration tests for the department directory.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use helpers::TestApp;

async fn admin(app: &TestApp) -> String {
    let home = app.seed_department("Admin").await;
    let (_, token) = app.seed_and_login("admin", "ADMIN", home).await;
    token
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_department() {
    let app = TestApp::new().await;
    let token = admin(&app).await;
    let name = app.department_name("Keuangan");

    let response = app
        .request(
            "POST",
            "/api/v1/departement",
            Some(json!({ "name": name, "email": format!("keuangan.{}@go.id", app.tag) })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["name"], name);
    let id = response.body["data"]["departementId"]
        .as_str()
        .expect("departementId");
    assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_duplicate_name_and_email_are_reported_by_field() {
    let app = TestApp::new().await;
    let token = admin(&app).await;
    let name = app.department_name("Hukum");
    let email = format!("hukum.{}@go.id", app.tag);

    let first = app
        .request(
            "POST",
            "/api/v1/departement",
            Some(json!({ "name": name, "email": email })),
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let same_name = app
        .request(
            "POST",
            "/api/v1/departement",
            Some(json!({ "name": name, "email": format!("lain.{}@go.id", app.tag) })),
            Some(&token),
        )
        .await;
    assert_eq!(same_name.status, StatusCode::BAD_REQUEST);
    assert_eq!(same_name.error(), "Nama departement sudah terdaftar");

    let same_email = app
        .request(
            "POST",
            "/api/v1/departement",
            Some(json!({ "name": app.department_name("Lain"), "email": email })),
            Some(&token),
        )
        .await;
    assert_eq!(same_email.status, StatusCode::BAD_REQUEST);
    assert_eq!(same_email.error(), "Email departement sudah terdaftar");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_update_keeps_own_name_and_rejects_taken_one() {
    let app = TestApp::new().await;
    let token = admin(&app).await;
    let id = app.seed_department("Umum").await;
    app.seed_department("Teknik").await;
    let path = format!("/api/v1/departement/{id}");

    let unchanged = app
        .request(
            "PATCH",
            &path,
            Some(json!({ "name": app.department_name("Umum") })),
            Some(&token),
        )
        .await;
    assert_eq!(unchanged.status, StatusCode::OK);

    let taken = app
        .request(
            "PATCH",
            &path,
            Some(json!({ "name": app.department_name("Teknik") })),
            Some(&token),
        )
        .await;
    assert_eq!(taken.status, StatusCode::BAD_REQUEST);
    assert_eq!(taken.error(), "Nama departement sudah terdaftar");

    let new_email = format!("umum.baru.{}@go.id", app.tag);
    let email_only = app
        .request("PATCH", &path, Some(json!({ "email": new_email })), Some(&token))
        .await;
    assert_eq!(email_only.status, StatusCode::OK);
    assert_eq!(email_only.body["data"]["name"], app.department_name("Umum"));
    assert_eq!(email_only.body["data"]["email"], new_email);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_get_and_missing_department() {
    let app = TestApp::new().await;
    let home = app.seed_department("Rumah").await;
    let (_, token) = app.seed_and_login("staff", "STAFF", home).await;

    let found = app
        .request("GET", &format!("/api/v1/departement/{home}"), None, Some(&token))
        .await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["data"]["departementId"], home.to_string());

    let missing = app
        .request(
            "GET",
            &format!("/api/v1/departement/{}", Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.error(), "Departement tidak ditemukan");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_delete_is_blocked_while_accounts_reference_it() {
    let app = TestApp::new().await;
    let token = admin(&app).await;
    let occupied = app.seed_department("Terisi").await;
    app.seed_account("penghuni", "STAFF", occupied).await;
    let empty = app.seed_department("Kosong").await;

    let blocked = app
        .request("DELETE", &format!("/api/v1/departement/{occupied}"), None, Some(&token))
        .await;
    assert_eq!(blocked.status, StatusCode::BAD_REQUEST);
    assert_eq!(blocked.error(), "Departemen masih digunakan oleh pengguna");

    let path = format!("/api/v1/departement/{empty}");
    let deleted = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["data"], "OK");

    let again = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_search_pages_are_bounded_by_size() {
    let app = TestApp::new().await;
    let letters = "abcdefghijklmno";
    for letter in letters.chars() {
        app.seed_department(&format!("Seri {}", letter.to_ascii_uppercase()))
            .await;
    }

    let first = app
        .request("GET", &format!("/api/v1/departement?name={}", app.tag), None, None)
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["data"].as_array().map(Vec::len), Some(10));
    assert_eq!(first.body["paging"]["page"], 1);
    assert_eq!(first.body["paging"]["totalItems"], 15);
    assert_eq!(first.body["paging"]["totalPages"], 2);

    let second = app
        .request(
            "GET",
            &format!("/api/v1/departement/search?name={}&page=2", app.tag),
            None,
            None,
        )
        .await;
    assert_eq!(second.body["data"].as_array().map(Vec::len), Some(5));

    let small = app
        .request(
            "GET",
            &format!("/api/v1/departement?name={}&size=3", app.tag),
            None,
            None,
        )
        .await;
    assert_eq!(small.body["data"].as_array().map(Vec::len), Some(3));
    assert_eq!(small.body["paging"]["totalPages"], 5);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_page_far_past_the_end_is_empty() {
    let app = TestApp::new().await;
    app.seed_department("Jauh").await;

    for page in ["1000000000000000000", "18446744073709551615"] {
        let response = app
            .request(
                "GET",
                &format!("/api/v1/departement?name={}&page={page}&size=100", app.tag),
                None,
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "page {page}: {:?}", response.body);
        assert_eq!(response.body["data"], json!([]));
        assert_eq!(response.body["paging"]["totalItems"], 1);
        assert_eq!(response.body["paging"]["totalPages"], 1);
    }
}
