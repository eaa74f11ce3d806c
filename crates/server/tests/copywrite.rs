mod support;

use axum::http::StatusCode;
use support::{app, send};

#[tokio::test]
async fn create_and_find_all_return_fixed_messages() {
    let (status, body) = send(app(), "POST", "/copywrite", Some("{}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "This action adds a new copywrite");

    let (status, body) = send(app(), "GET", "/copywrite", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "This action returns all copywrite");
}

#[tokio::test]
async fn find_one_mentions_the_id() {
    let (status, body) = send(app(), "GET", "/copywrite/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains('5'));
    assert_eq!(body, "This action returns a #5 copywrite");
}

#[tokio::test]
async fn update_echoes_id_without_changing_state() {
    let router = app();
    let (status, body) =
        send(router.clone(), "PATCH", "/copywrite/12", Some(r#"{"anything": true}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "This action updates a #12 copywrite");

    let (_, after) = send(router, "GET", "/copywrite", None).await;
    assert_eq!(after, "This action returns all copywrite");
}

#[tokio::test]
async fn remove_mentions_the_id() {
    let (status, body) = send(app(), "DELETE", "/copywrite/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "This action removes a #7 copywrite");
}

#[tokio::test]
async fn non_numeric_ids_are_rejected() {
    for (method, body) in [("GET", None), ("PATCH", Some("{}")), ("DELETE", None)] {
        let (status, text) = send(app(), method, "/copywrite/abc", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
        let err: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(err["error"], "Bad Request");
    }
}

#[tokio::test]
async fn create_and_update_accept_any_body() {
    for body in [None, Some("[1]"), Some("\"x\""), Some("null"), Some("{not json")] {
        let (status, text) = send(app(), "POST", "/copywrite", body).await;
        assert_eq!(status, StatusCode::OK, "{body:?}");
        assert_eq!(text, "This action adds a new copywrite");

        let (status, text) = send(app(), "PATCH", "/copywrite/5", body).await;
        assert_eq!(status, StatusCode::OK, "{body:?}");
        assert_eq!(text, "This action updates a #5 copywrite");
    }
}
