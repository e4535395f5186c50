mod common;

use serde_json::json;

#[tokio::test]
async fn create_rename_trash_restore_roundtrip() {
    let app = common::spawn_app().await;
    let server = &app.server;

    let create = server
        .post("/api/v1/folders")
        .json(&json!({"name": "reports", "parent_id": app.root_folder_id}))
        .await;
    create.assert_status(axum::http::StatusCode::OK);
    let body: serde_json::Value = create.json();
    let folder_id = body["_key"].as_str().unwrap().to_string();
    assert_eq!(body["name"], "reports");
    assert!(body["sync_event_id"].is_string());

    let renamed = server
        .patch(&format!("/api/v1/folders/{folder_id}/rename"))
        .json(&json!({"name": "reports-2024"}))
        .await;
    renamed.assert_status_ok();
    assert_eq!(renamed.json::<serde_json::Value>()["name"], "reports-2024");

    let trashed = server.post(&format!("/api/v1/folders/{folder_id}/trash")).await;
    trashed.assert_status_ok();
    assert_eq!(trashed.json::<serde_json::Value>()["state"], "TRASHED");

    let restored = server.post(&format!("/api/v1/folders/{folder_id}/restore")).await;
    restored.assert_status_ok();
    assert_eq!(restored.json::<serde_json::Value>()["state"], "ACTIVE");

    let status = server.get(&format!("/api/v1/folders/{folder_id}/sync-status")).await;
    status.assert_status_ok();
    let events = status.json::<serde_json::Value>()["events"].as_array().unwrap().clone();
    // create + trash + restore
    assert_eq!(events.len(), 3);
}

#[tokio::test]
async fn duplicate_name_without_conflict_strategy_is_conflict() {
    let app = common::spawn_app().await;
    let server = &app.server;

    let first = server
        .post("/api/v1/folders")
        .json(&json!({"name": "dup", "parent_id": app.root_folder_id}))
        .await;
    first.assert_status_ok();

    let second = server
        .post("/api/v1/folders")
        .json(&json!({"name": "dup", "parent_id": app.root_folder_id}))
        .await;
    second.assert_status(axum::http::StatusCode::CONFLICT);
    assert_eq!(second.json::<serde_json::Value>()["error"], "CONFLICT");
}

#[tokio::test]
async fn rename_strategy_auto_resolves_duplicate() {
    let app = common::spawn_app().await;
    let server = &app.server;

    server
        .post("/api/v1/folders")
        .json(&json!({"name": "dup", "parent_id": app.root_folder_id}))
        .await
        .assert_status_ok();

    let second = server
        .post("/api/v1/folders")
        .json(&json!({"name": "dup", "parent_id": app.root_folder_id, "conflict_strategy": "RENAME"}))
        .await;
    second.assert_status_ok();
    let name = second.json::<serde_json::Value>()["name"].as_str().unwrap().to_string();
    assert_ne!(name, "dup");
    assert!(name.starts_with("dup"));
}

#[tokio::test]
async fn missing_folder_is_not_found() {
    let app = common::spawn_app().await;
    let missing = uuid::Uuid::new_v4();
    let resp = app.server.post(&format!("/api/v1/folders/{missing}/trash")).await;
    resp.assert_status(axum::http::StatusCode::NOT_FOUND);
}
