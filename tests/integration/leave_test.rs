//! Integration tests for the leave workflow.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use helpers::TestApp;

fn draft_body() -> Value {
    json!({
        "startDate": "2026-11-02",
        "endDate": "2026-11-04",
        "reason": "Menghadiri pernikahan keluarga",
    })
}

async fn save_draft(app: &TestApp, token: &str) -> String {
    let response = app
        .request("POST", "/api/v1/leave/draft", Some(draft_body()), Some(token))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["status"], "DRAFT");
    response.body["data"]["id"]
        .as_str()
        .expect("leave id")
        .to_string()
}

async fn submit(app: &TestApp, token: &str, id: &str) -> helpers::TestResponse {
    app.request("PUT", &format!("/api/v1/leave/{id}/submit"), None, Some(token))
        .await
}

async fn verify(app: &TestApp, token: &str, id: &str, status: &str) -> helpers::TestResponse {
    app.request(
        "PUT",
        &format!("/api/v1/leave/{id}/verify"),
        Some(json!({ "status": status })),
        Some(token),
    )
    .await
}

fn ids(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_submit_only_from_draft() {
    let app = TestApp::new().await;
    let department = app.seed_department("Kirim").await;
    let (username, token) = app.seed_and_login("staf", "STAFF", department).await;
    let id = save_draft(&app, &token).await;

    let submitted = submit(&app, &token, &id).await;
    assert_eq!(submitted.status, StatusCode::OK);
    assert_eq!(submitted.body["data"]["status"], "TERKIRIM");
    assert_eq!(submitted.body["data"]["username"], username);

    let again = submit(&app, &token, &id).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.error(), "Draft izin cuti tidak ditemukan");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_only_owner_may_submit() {
    let app = TestApp::new().await;
    let department = app.seed_department("Pemilik").await;
    let (_, owner) = app.seed_and_login("pemilik", "STAFF", department).await;
    let (_, other) = app.seed_and_login("orang", "STAFF", department).await;
    let id = save_draft(&app, &owner).await;

    let response = submit(&app, &other, &id).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_department_manager_verifies_once() {
    let app = TestApp::new().await;
    let department = app.seed_department("Setuju").await;
    let (_, staff) = app.seed_and_login("staf", "STAFF", department).await;
    let (manager, manager_token) = app.seed_and_login("atasan", "MANAJER", department).await;
    let id = save_draft(&app, &staff).await;

    let early = verify(&app, &manager_token, &id, "DITERIMA").await;
    assert_eq!(early.status, StatusCode::NOT_FOUND);
    assert_eq!(
        early.error(),
        "Izin cuti tidak ditemukan atau status tidak valid"
    );

    submit(&app, &staff, &id).await;
    let approved = verify(&app, &manager_token, &id, "diterima").await;
    assert_eq!(approved.status, StatusCode::OK);
    assert_eq!(approved.body["data"]["message"], "Izin cuti berhasil diterima");
    assert_eq!(approved.body["data"]["leave"]["status"], "DITERIMA");
    assert_eq!(approved.body["data"]["leave"]["managerUsername"], manager);

    let twice = verify(&app, &manager_token, &id, "DITOLAK").await;
    assert_eq!(twice.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_reject_with_action_key() {
    let app = TestApp::new().await;
    let department = app.seed_department("Tolak").await;
    let (_, staff) = app.seed_and_login("staf", "STAFF", department).await;
    let (_, manager) = app.seed_and_login("atasan", "MANAJER", department).await;
    let id = save_draft(&app, &staff).await;
    submit(&app, &staff, &id).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/leave/{id}/verify"),
            Some(json!({ "action": "DITOLAK" })),
            Some(&manager),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["message"], "Izin cuti berhasil ditolak");
    assert_eq!(response.body["data"]["leave"]["status"], "DITOLAK");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_foreign_manager_cannot_verify() {
    let app = TestApp::new().await;
    let home = app.seed_department("Asal").await;
    let elsewhere = app.seed_department("Seberang").await;
    let (_, staff) = app.seed_and_login("staf", "STAFF", home).await;
    let (_, foreign) = app.seed_and_login("asing", "MANAJER", elsewhere).await;
    let id = save_draft(&app, &staff).await;
    submit(&app, &staff, &id).await;

    let response = verify(&app, &foreign, &id, "DITERIMA").await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error(), "Anda tidak berhak memverifikasi izin ini");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_manager_cannot_verify_own_request() {
    let app = TestApp::new().await;
    let department = app.seed_department("Sendiri").await;
    let (_, manager) = app.seed_and_login("atasan", "MANAJER", department).await;
    let id = save_draft(&app, &manager).await;
    submit(&app, &manager, &id).await;

    let response = verify(&app, &manager, &id, "DITERIMA").await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_update_draft_changes_only_given_fields() {
    let app = TestApp::new().await;
    let department = app.seed_department("Ubah").await;
    let (_, token) = app.seed_and_login("staf", "STAFF", department).await;
    let id = save_draft(&app, &token).await;
    let path = format!("/api/v1/leave/{id}/update");

    let reason_only = app
        .request(
            "PUT",
            &path,
            Some(json!({ "reason": "Mengurus dokumen kependudukan" })),
            Some(&token),
        )
        .await;
    assert_eq!(reason_only.status, StatusCode::OK);
    assert_eq!(reason_only.body["data"]["reason"], "Mengurus dokumen kependudukan");
    assert_eq!(reason_only.body["data"]["startDate"], "2026-11-02");
    assert_eq!(reason_only.body["data"]["endDate"], "2026-11-04");

    let reversed = app
        .request("PUT", &path, Some(json!({ "endDate": "2026-11-01" })), Some(&token))
        .await;
    assert_eq!(reversed.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        reversed.error(),
        "Tanggal selesai harus lebih besar atau sama dengan tanggal mulai"
    );

    submit(&app, &token, &id).await;
    let locked = app
        .request("PUT", &path, Some(json!({ "reason": "Alasan yang lain sekali" })), Some(&token))
        .await;
    assert_eq!(locked.status, StatusCode::NOT_FOUND);
    assert_eq!(locked.error(), "Draft tidak ditemukan");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_remove_draft() {
    let app = TestApp::new().await;
    let department = app.seed_department("Hapus").await;
    let (_, token) = app.seed_and_login("staf", "STAFF", department).await;
    let draft = save_draft(&app, &token).await;
    let sent = save_draft(&app, &token).await;
    submit(&app, &token, &sent).await;

    let removed = app
        .request("DELETE", &format!("/api/v1/leave/{draft}"), None, Some(&token))
        .await;
    assert_eq!(removed.status, StatusCode::OK);
    assert_eq!(removed.body["data"], "Draft berhasil dihapus");

    let not_draft = app
        .request("DELETE", &format!("/api/v1/leave/{sent}"), None, Some(&token))
        .await;
    assert_eq!(not_draft.status, StatusCode::NOT_FOUND);

    let unknown = app
        .request(
            "DELETE",
            &format!("/api/v1/leave/{}", Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_search_is_scoped_by_role() {
    let app = TestApp::new().await;
    let department = app.seed_department("Lingkup").await;
    let elsewhere = app.seed_department("Luar").await;
    let (_, alice) = app.seed_and_login("alice", "STAFF", department).await;
    let (_, bob) = app.seed_and_login("bob", "STAFF", department).await;
    let (_, outsider) = app.seed_and_login("luar", "STAFF", elsewhere).await;
    let (_, manager) = app.seed_and_login("atasan", "MANAJER", department).await;
    let (_, admin) = app.seed_and_login("admin", "ADMIN", elsewhere).await;

    let alice_draft = save_draft(&app, &alice).await;
    let alice_sent = save_draft(&app, &alice).await;
    submit(&app, &alice, &alice_sent).await;
    let bob_draft = save_draft(&app, &bob).await;
    let outsider_sent = save_draft(&app, &outsider).await;
    submit(&app, &outsider, &outsider_sent).await;
    let manager_draft = save_draft(&app, &manager).await;

    let own = app.request("GET", "/api/v1/leave", None, Some(&alice)).await;
    assert_eq!(own.status, StatusCode::OK);
    let mut seen = ids(&own.body);
    seen.sort();
    let mut expected = vec![alice_draft.clone(), alice_sent.clone()];
    expected.sort();
    assert_eq!(seen, expected);

    let team = app
        .request("GET", "/api/v1/leave?size=100", None, Some(&manager))
        .await;
    let seen = ids(&team.body);
    assert!(seen.contains(&alice_sent));
    assert!(seen.contains(&manager_draft));
    assert!(!seen.contains(&alice_draft));
    assert!(!seen.contains(&bob_draft));
    assert!(!seen.contains(&outsider_sent));

    let filtered = app
        .request("GET", "/api/v1/leave?status=terkirim", None, Some(&alice))
        .await;
    assert_eq!(ids(&filtered.body), vec![alice_sent.clone()]);
    assert_eq!(filtered.body["data"][0]["owner"]["username"], app.username("alice"));
    assert_eq!(
        filtered.body["data"][0]["owner"]["departementName"],
        app.department_name("Lingkup")
    );

    let everything = app
        .request("GET", "/api/v1/leave?size=100&status=TERKIRIM", None, Some(&admin))
        .await;
    let seen = ids(&everything.body);
    assert!(seen.contains(&alice_sent));
    assert!(seen.contains(&outsider_sent));
}
