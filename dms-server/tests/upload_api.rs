mod common;

use serde_json::json;

#[tokio::test]
async fn multipart_upload_completes_and_creates_file() {
    let app = common::spawn_app().await;
    let server = &app.server;

    let initiate = server
        .post("/api/v1/uploads")
        .json(&json!({
            "file_name": "report.csv",
            "folder_id": app.root_folder_id,
            "total_size": 6u64,
            "mime_type": "text/csv",
        }))
        .await;
    initiate.assert_status(axum::http::StatusCode::CREATED);
    let body: serde_json::Value = initiate.json();
    assert_eq!(body["status"], "ACTIVE");
    let session_id = body["session_id"].as_str().unwrap().to_string();
    assert_eq!(body["total_parts"], 2); // part_size=4, total_size=6 -> parts of 4 + 2

    let part1 = server
        .put(&format!("/api/v1/uploads/{session_id}/parts/1"))
        .bytes(bytes::Bytes::from_static(b"abcd"))
        .await;
    part1.assert_status_ok();

    let mid_status = server.get(&format!("/api/v1/uploads/{session_id}")).await;
    mid_status.assert_status_ok();
    let mid: serde_json::Value = mid_status.json();
    assert_eq!(mid["next_missing_part"], 2);
    assert_eq!(mid["remaining_bytes"], 2);

    let part2 = server
        .put(&format!("/api/v1/uploads/{session_id}/parts/2"))
        .bytes(bytes::Bytes::from_static(b"ef"))
        .await;
    part2.assert_status_ok();
    let progress: serde_json::Value = part2.json();
    assert_eq!(progress["uploaded_bytes"], 6);

    let complete = server.post(&format!("/api/v1/uploads/{session_id}/complete")).await;
    complete.assert_status_ok();
    let file: serde_json::Value = complete.json();
    assert_eq!(file["name"], "report.csv");
    assert_eq!(file["size_bytes"], 6);
}

#[tokio::test]
async fn second_initiate_waits_when_active_cap_saturated() {
    let app = common::spawn_app().await;
    let server = &app.server;

    let request = json!({
        "file_name": "a.bin",
        "folder_id": app.root_folder_id,
        "total_size": 6u64,
        "mime_type": "application/octet-stream",
    });

    let first = server.post("/api/v1/uploads").json(&request).await;
    first.assert_status(axum::http::StatusCode::CREATED);

    let second = server
        .post("/api/v1/uploads")
        .json(&json!({
            "file_name": "b.bin",
            "folder_id": app.root_folder_id,
            "total_size": 6u64,
            "mime_type": "application/octet-stream",
        }))
        .await;
    second.assert_status(axum::http::StatusCode::ACCEPTED);
    let body: serde_json::Value = second.json();
    assert_eq!(body["status"], "WAITING");
    let ticket = body["queue_ticket"].as_str().unwrap().to_string();

    let polled = server.get(&format!("/api/v1/uploads/queue/{ticket}")).await;
    polled.assert_status_ok();
    assert_eq!(polled.json::<serde_json::Value>()["status"], "WAITING");

    // Aborting the first session frees the slot and promotes the ticket.
    let first_session = first.json::<serde_json::Value>()["session_id"].as_str().unwrap().to_string();
    server.post(&format!("/api/v1/uploads/{first_session}/abort")).await.assert_status_ok();

    let polled_after = server.get(&format!("/api/v1/uploads/queue/{ticket}")).await;
    polled_after.assert_status_ok();
    assert_eq!(polled_after.json::<serde_json::Value>()["status"], "READY");

    let claimed = server.post(&format!("/api/v1/uploads/queue/{ticket}/claim")).await;
    claimed.assert_status_ok();
    assert_eq!(claimed.json::<serde_json::Value>()["status"], "INIT");
}

#[tokio::test]
async fn cancel_ticket_is_idempotent() {
    let app = common::spawn_app().await;
    let server = &app.server;

    let request = json!({
        "file_name": "a.bin",
        "folder_id": app.root_folder_id,
        "total_size": 6u64,
        "mime_type": "application/octet-stream",
    });
    server.post("/api/v1/uploads").json(&request).await.assert_status(axum::http::StatusCode::CREATED);

    let second = server.post("/api/v1/uploads").json(&request).await;
    let ticket = second.json::<serde_json::Value>()["queue_ticket"].as_str().unwrap().to_string();

    server
        .post(&format!("/api/v1/uploads/queue/{ticket}/cancel"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);
    server
        .post(&format!("/api/v1/uploads/queue/{ticket}/cancel"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);
}
