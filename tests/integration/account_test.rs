//! Integration tests for registration, login and account management.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};

use cuti_entity::account::AccountRole;
use helpers::{PASSWORD, TestApp};

fn registration(app: &TestApp, label: &str, department: &uuid::Uuid) -> Value {
    json!({
        "username": app.username(label),
        "name": "Pegawai Baru",
        "email": format!("{}@test.go.id", app.username(label)),
        "password": PASSWORD,
        "departementId": department.to_string(),
    })
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_register_creates_inactive_staff_without_credentials_in_payload() {
    let app = TestApp::new().await;
    let department = app.seed_department("Pendaftaran").await;

    let response = app
        .request(
            "POST",
            "/api/v1/user",
            Some(registration(&app, "baru", &department)),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let data = response.body["data"].as_object().expect("data object");
    assert_eq!(data["username"], app.username("baru"));
    assert_eq!(data["departement"]["name"], app.department_name("Pendaftaran"));
    assert!(!data.contains_key("password"));
    assert!(!data.contains_key("passwordExpiredAt"));

    let login = app
        .request(
            "POST",
            "/api/v1/user/login",
            Some(json!({ "username": app.username("baru"), "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        login.error(),
        "Username atau password salah, atau akun belum aktif"
    );
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_register_reports_duplicates_and_unknown_department() {
    let app = TestApp::new().await;
    let department = app.seed_department("Ganda").await;
    let existing = app.seed_account("lama", "STAFF", department).await;

    let mut same_username = registration(&app, "lama", &department);
    same_username["email"] = json!(format!("lain.{}@test.go.id", app.tag));
    let response = app
        .request("POST", "/api/v1/user", Some(same_username), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Username sudah terdaftar");

    let mut same_email = registration(&app, "lain", &department);
    same_email["email"] = json!(format!("{existing}@test.go.id"));
    let response = app
        .request("POST", "/api/v1/user", Some(same_email), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Email sudah terdaftar");

    let orphan = registration(&app, "yatim", &uuid::Uuid::new_v4());
    let response = app.request("POST", "/api/v1/user", Some(orphan), None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Departemen tidak ditemukan");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_wrong_password_fails_like_unknown_user() {
    let app = TestApp::new().await;
    let department = app.seed_department("Masuk").await;
    let username = app.seed_account("masuk", "STAFF", department).await;

    let wrong = app
        .request(
            "POST",
            "/api/v1/user/login",
            Some(json!({ "username": username, "password": "Salah@123" })),
            None,
        )
        .await;
    let unknown = app
        .request(
            "POST",
            "/api/v1/user/login",
            Some(json!({ "username": app.username("hantu"), "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(wrong.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong.error(), unknown.error());
    assert!(wrong.bearer().is_none());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_register_activate_login_and_self_update_refreshes_token() {
    let app = TestApp::new().await;
    let first = app.seed_department("Awal").await;
    let second = app.seed_department("Pindahan").await;
    let (_, admin_token) = app.seed_and_login("admin", "ADMIN", first).await;

    let registered = app
        .request(
            "POST",
            "/api/v1/user",
            Some(registration(&app, "pegawai", &first)),
            None,
        )
        .await;
    assert_eq!(registered.status, StatusCode::CREATED);
    let username = app.username("pegawai");

    let activated = app
        .request(
            "PATCH",
            &format!("/api/v1/user/{username}"),
            Some(json!({ "flagActive": true, "currentPassword": PASSWORD })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(activated.status, StatusCode::OK);
    assert_eq!(activated.body["data"]["flagActive"], true);

    let token = app.login(&username, PASSWORD).await;
    let before = app.claims(&token);
    assert_eq!(before.sub, username);
    assert_eq!(before.role, AccountRole::Staff);
    assert_eq!(before.departement_name, app.department_name("Awal"));

    let updated = app
        .request(
            "PATCH",
            "/api/v1/user/current",
            Some(json!({
                "name": "Pegawai Pindahan",
                "departementId": second.to_string(),
                "newPassword": "Baru@4567",
                "currentPassword": PASSWORD,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["name"], "Pegawai Pindahan");
    assert_eq!(
        updated.body["data"]["email"],
        format!("{username}@test.go.id")
    );

    let fresh = app.claims(&updated.bearer().expect("fresh token"));
    assert_eq!(fresh.name, "Pegawai Pindahan");
    assert_eq!(fresh.departement_name, app.department_name("Pindahan"));
    assert!(fresh.password_expired_at >= before.password_expired_at);

    app.login(&username, "Baru@4567").await;
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_self_update_requires_current_password() {
    let app = TestApp::new().await;
    let department = app.seed_department("Profil").await;
    let (_, token) = app.seed_and_login("profil", "STAFF", department).await;

    let response = app
        .request(
            "PATCH",
            "/api/v1/user/current",
            Some(json!({ "name": "Nama Baru", "currentPassword": "Salah@123" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Password yang anda masukkan salah");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_admin_update_checks_admin_password_and_target() {
    let app = TestApp::new().await;
    let department = app.seed_department("Kelola").await;
    let (_, admin_token) = app.seed_and_login("admin", "ADMIN", department).await;
    let staff = app.seed_account("staf", "STAFF", department).await;

    let wrong_password = app
        .request(
            "PATCH",
            &format!("/api/v1/user/{staff}"),
            Some(json!({ "role": "manajer", "currentPassword": "Salah@123" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(wrong_password.status, StatusCode::BAD_REQUEST);

    let missing = app
        .request(
            "PATCH",
            &format!("/api/v1/user/{}", app.username("hilang")),
            Some(json!({ "role": "MANAJER", "currentPassword": PASSWORD })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.error(), "User tidak ditemukan");

    let promoted = app
        .request(
            "PATCH",
            &format!("/api/v1/user/{staff}"),
            Some(json!({ "role": "manajer", "currentPassword": PASSWORD })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(promoted.status, StatusCode::OK);
    assert_eq!(promoted.body["data"]["role"], "MANAJER");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_admin_search_filters_and_hides_credentials() {
    let app = TestApp::new().await;
    let department = app.seed_department("Cari").await;
    let (_, admin_token) = app.seed_and_login("admin", "ADMIN", department).await;
    app.seed_account("satu", "STAFF", department).await;
    app.seed_account("dua", "STAFF", department).await;
    app.seed_account("tiga", "MANAJER", department).await;

    let response = app
        .request(
            "GET",
            &format!("/api/v1/user/search?email={}&role=STAFF&size=1", app.tag),
            None,
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["paging"]["totalItems"], 2);
    assert_eq!(response.body["paging"]["totalPages"], 2);
    let items = response.body["data"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    let item = items[0].as_object().expect("item");
    assert_eq!(item["role"], "STAFF");
    assert!(!item.contains_key("password"));
    assert!(!item.contains_key("passwordHash"));
    assert!(!item.contains_key("passwordExpiredAt"));
}
