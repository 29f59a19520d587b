mod common;

use axum::http::StatusCode;
use common::{ALICE_TOKEN, TestContext, bearer, qrcode};
use serde_json::{Value, json};
use std::sync::atomic::Ordering;

fn registry() -> TestContext {
    TestContext::new(vec![], vec![qrcode(42)])
}

fn valid_update(id: i64) -> Value {
    json!({
        "id": id,
        "college": 7,
        "department": "Library",
        "description": "Reading room feedback",
        "feedback_type": 2,
        "location": "Library Hall",
        "status": false
    })
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_overwrites_fields_and_is_readable() {
    let ctx = registry();
    ctx.qrcodes.set_counters(42, 120, 8);
    let server = ctx.server();

    let response = server
        .put("/api/qrcode")
        .add_header("Authorization", bearer(ALICE_TOKEN))
        .json(&valid_update(42))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "code": 200, "msg": "OK", "data": null }));

    let read: Value = server
        .get("/api/qrcode/42")
        .add_header("Authorization", bearer(ALICE_TOKEN))
        .await
        .json();
    let data = &read["data"];
    assert_eq!(data["college"], 7);
    assert_eq!(data["department"], "Library");
    assert_eq!(data["description"], "Reading room feedback");
    assert_eq!(data["feedback_type"], 2);
    assert_eq!(data["location"], "Library Hall");
    assert_eq!(data["status"], false);
    assert_eq!(data["scan_count"], 120);
    assert_eq!(data["feedback_count"], 8);
}

#[tokio::test]
async fn test_update_stores_text_fields_verbatim() {
    let ctx = registry();
    let server = ctx.server();
    let mut payload = valid_update(42);
    payload["department"] = json!(" Student Union ");
    payload["location"] = json!("Gate 4\n");

    server
        .put("/api/qrcode")
        .add_header("Authorization", bearer(ALICE_TOKEN))
        .json(&payload)
        .await
        .assert_status_ok();

    let read: Value = server
        .get("/api/qrcode/42")
        .add_header("Authorization", bearer(ALICE_TOKEN))
        .await
        .json();
    assert_eq!(read["data"]["department"], " Student Union ");
    assert_eq!(read["data"]["location"], "Gate 4\n");
}

#[tokio::test]
async fn test_update_without_description_stores_empty() {
    let ctx = registry();
    let mut payload = valid_update(42);
    payload.as_object_mut().unwrap().remove("description");

    ctx.server()
        .put("/api/qrcode")
        .add_header("Authorization", bearer(ALICE_TOKEN))
        .json(&payload)
        .await
        .assert_status_ok();

    assert_eq!(ctx.qrcodes.get(42).unwrap().description, "");
}

#[tokio::test]
async fn test_update_ignores_counter_fields() {
    let ctx = registry();
    ctx.qrcodes.set_counters(42, 5, 1);
    let mut payload = valid_update(42);
    payload["scan_count"] = json!(999);

    ctx.server()
        .put("/api/qrcode")
        .add_header("Authorization", bearer(ALICE_TOKEN))
        .json(&payload)
        .await
        .assert_status_ok();

    assert_eq!(ctx.qrcodes.get(42).unwrap().scan_count, 5);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found_without_write() {
    let ctx = registry();
    let response = ctx
        .server()
        .put("/api/qrcode")
        .add_header("Authorization", bearer(ALICE_TOKEN))
        .json(&valid_update(7))
        .await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["code"], 200404);
    assert_eq!(ctx.qrcodes.reads(), 1);
    assert_eq!(ctx.qrcodes.writes(), 0);
}

#[tokio::test]
async fn test_invalid_update_never_reaches_storage() {
    let ctx = registry();
    let server = ctx.server();

    let invalid = [
        json!({}),
        json!({ "id": 0, "college": 1, "department": "d", "feedback_type": 1, "location": "l" }),
        json!({ "id": 42, "college": 0, "department": "d", "feedback_type": 1, "location": "l" }),
        json!({ "id": 42, "college": 1, "department": "  ", "feedback_type": 1, "location": "l" }),
        json!({ "id": 42, "college": 1, "department": "d", "feedback_type": 0, "location": "l" }),
        json!({ "id": 42, "college": 1, "department": "d", "feedback_type": 1, "location": "" }),
        json!({ "id": "42", "college": 1, "department": "d", "feedback_type": 1, "location": "l" }),
    ];

    for payload in invalid {
        let response = server
            .put("/api/qrcode")
            .add_header("Authorization", bearer(ALICE_TOKEN))
            .json(&payload)
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["code"], 200501, "payload: {payload}");
    }

    assert_eq!(ctx.qrcodes.reads(), 0);
    assert_eq!(ctx.qrcodes.writes(), 0);

    let stored = ctx.qrcodes.get(42).unwrap();
    assert_eq!(stored.department, "Student Union");
    assert_eq!(stored.college, 3);
}

#[tokio::test]
async fn test_malformed_json_is_param_error() {
    let ctx = registry();
    let response = ctx
        .server()
        .put("/api/qrcode")
        .add_header("Authorization", bearer(ALICE_TOKEN))
        .add_header("Content-Type", "application/json")
        .text("{\"id\": 42,")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["code"], 200501);
    assert_eq!(ctx.qrcodes.reads(), 0);
}

#[tokio::test]
async fn test_update_storage_fault_is_server_error() {
    let ctx = registry();
    ctx.qrcodes.failing.store(true, Ordering::SeqCst);

    let response = ctx
        .server()
        .put("/api/qrcode")
        .add_header("Authorization", bearer(ALICE_TOKEN))
        .json(&valid_update(42))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["code"], 200500);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_update_requires_authentication() {
    let ctx = registry();
    ctx.server()
        .put("/api/qrcode")
        .json(&valid_update(42))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(ctx.qrcodes.reads(), 0);
}

// ─── Read ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_qrcode() {
    let ctx = registry();
    let response = ctx
        .server()
        .get("/api/qrcode/42")
        .add_header("Authorization", bearer(ALICE_TOKEN))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["code"], 200);
    assert_eq!(body["data"]["id"], 42);
    assert_eq!(body["data"]["department"], "Student Union");
}

#[tokio::test]
async fn test_get_unknown_qrcode_is_not_found() {
    let ctx = registry();
    ctx.server()
        .get("/api/qrcode/9")
        .add_header("Authorization", bearer(ALICE_TOKEN))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_get_qrcode_with_invalid_id_is_param_error() {
    let ctx = registry();
    let server = ctx.server();

    for path in ["/api/qrcode/abc", "/api/qrcode/0", "/api/qrcode/-3"] {
        let response = server
            .get(path)
            .add_header("Authorization", bearer(ALICE_TOKEN))
            .await;
        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["code"], 200501, "path: {path}");
    }

    assert_eq!(ctx.qrcodes.reads(), 0);
}
