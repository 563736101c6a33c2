mod common;

use axum::http::StatusCode;
use common::{get, send, test_router};

#[tokio::test]
async fn greet_returns_message_for_name() {
    let response = send(test_router(), get("/api/greet?name=World")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers["content-type"],
        "application/json"
    );
    assert_eq!(
        response.json(),
        serde_json::json!({ "message": "Hello, World!" })
    );
}

#[tokio::test]
async fn greet_accepts_empty_name() {
    let response = send(test_router(), get("/api/greet?name=")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["message"], "Hello, !");
}

#[tokio::test]
async fn greet_echoes_ascii_names_verbatim() {
    let names = ["a", "Ada Lovelace", "x_y-z.0", "<b>hi</b>", "100%", "a&b=c"];

    for name in names {
        let encoded: String = name
            .bytes()
            .map(|b| format!("%{:02X}", b))
            .collect();
        let response = send(test_router(), get(&format!("/api/greet?name={}", encoded))).await;

        assert_eq!(response.status, StatusCode::OK, "name = {:?}", name);
        assert_eq!(
            response.json()["message"],
            format!("Hello, {}!", name),
            "name = {:?}",
            name
        );
    }
}

#[tokio::test]
async fn greet_decodes_plus_as_space() {
    let response = send(test_router(), get("/api/greet?name=Grace+Hopper")).await;

    assert_eq!(response.json()["message"], "Hello, Grace Hopper!");
}

#[tokio::test]
async fn greet_echoes_control_characters_and_long_values() {
    let response = send(test_router(), get("/api/greet?name=tab%09bell%07")).await;
    assert_eq!(response.json()["message"], "Hello, tab\tbell\u{7}!");

    let long = "x".repeat(4096);
    let response = send(test_router(), get(&format!("/api/greet?name={}", long))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["message"], format!("Hello, {}!", long));
}

#[tokio::test]
async fn greet_ignores_unknown_parameters() {
    let response = send(test_router(), get("/api/greet?name=Bob&lang=fr")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["message"], "Hello, Bob!");
}

#[tokio::test]
async fn greet_without_name_is_validation_error() {
    let response = send(test_router(), get("/api/greet")).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json();
    assert_eq!(body["error"], "Validation error");
    assert!(body["details"].as_str().unwrap().contains("name"));
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn greet_with_other_parameters_but_no_name_is_validation_error() {
    let response = send(test_router(), get("/api/greet?nom=Bob")).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn greet_with_repeated_name_uses_last_value() {
    let response = send(test_router(), get("/api/greet?name=a&name=b")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        serde_json::json!({ "message": "Hello, b!" })
    );
}

#[tokio::test]
async fn greet_with_repeated_name_around_other_parameters_uses_last_value() {
    let response = send(test_router(), get("/api/greet?name=a&lang=fr&name=&x=1")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["message"], "Hello, !");
}

#[tokio::test]
async fn greet_rejects_other_methods() {
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/greet?name=World")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = send(test_router(), request).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = send(test_router(), get("/api/farewell?name=World")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
