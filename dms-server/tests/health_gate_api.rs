mod common;

use serde_json::json;

#[tokio::test]
async fn unhealthy_nas_blocks_command_endpoints_but_not_health() {
    let app = common::spawn_app().await;
    let server = &app.server;

    app.health.report_unhealthy("nas timeout");

    let blocked = server
        .post("/api/v1/folders")
        .json(&json!({"name": "x", "parent_id": app.root_folder_id}))
        .await;
    blocked.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(blocked.json::<serde_json::Value>()["error"], "NAS_UNAVAILABLE");

    let health = server.get("/api/v1/health").await;
    health.assert_status_ok();
    assert_eq!(health.json::<serde_json::Value>()["status"], "unhealthy");
}

#[tokio::test]
async fn healthz_liveness_ignores_nas_status() {
    let app = common::spawn_app().await;
    app.health.report_unhealthy("nas timeout");
    app.server.get("/healthz").await.assert_status_ok();
}

#[tokio::test]
async fn healthy_nas_allows_command_endpoints() {
    let app = common::spawn_app().await;
    let resp = app
        .server
        .post("/api/v1/folders")
        .json(&json!({"name": "ok", "parent_id": app.root_folder_id}))
        .await;
    resp.assert_status_ok();
}
