mod support;

use axum::http::StatusCode;
use serde_json::Value;
use support::{app, send};

#[tokio::test]
async fn list_is_empty_before_any_create() {
    let (status, body) = send(app(), "GET", "/project-manage", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), serde_json::json!([]));
}

#[tokio::test]
async fn create_then_list_returns_record_with_server_id() {
    let router = app();

    let (status, body) = send(
        router.clone(),
        "POST",
        "/project-manage",
        Some(r#"{"name": "Alpha", "product": 1}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "true");

    let (status, body) = send(router, "GET", "/project-manage", None).await;
    assert_eq!(status, StatusCode::OK);
    let list: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Alpha");
    assert_eq!(list[0]["product"], 1);
    assert!(list[0]["id"].is_i64());
}

#[tokio::test]
async fn client_supplied_id_is_ignored() {
    let router = app();
    for _ in 0..2 {
        let (status, _) = send(
            router.clone(),
            "POST",
            "/project-manage",
            Some(r#"{"id": 500, "name": "Beta", "product": 2}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = send(router, "GET", "/project-manage", None).await;
    let list: Vec<Value> = serde_json::from_str(&body).unwrap();
    let ids: Vec<i64> = list.iter().map(|p| p["id"].as_i64().unwrap()).collect();
    assert_eq!(list.len(), 2);
    assert!(!ids.contains(&500));
    assert_ne!(ids[0], ids[1]);
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let (status, body) = send(app(), "POST", "/project-manage", Some(r#"{"name": "Alpha"}"#)).await;
    assert!(status.is_client_error());
    let err: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(err["error"], "Invalid Body");

    let (status, _) = send(app(), "POST", "/project-manage", Some("not json")).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn superseded_debug_route_is_not_served() {
    let (status, _) = send(app(), "GET", "/project-manage/list/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let (status, body) = send(app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["status"], "ok");

    let (status, body) = send(app(), "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    let doc: Value = serde_json::from_str(&body).unwrap();
    assert!(doc["paths"]["/project-manage"].is_object());
    assert!(doc["paths"]["/copywrite/{id}"].is_object());
}
