use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use user_collection::{AppConfig, build_app};

fn app() -> Router {
    build_app(&AppConfig::default()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn seed() -> Value {
    json!([
        { "id": 1, "name": "John Doe", "email": "john@example.com" },
        { "id": 2, "name": "Jane Smith", "email": "jane@example.com" },
    ])
}

#[tokio::test]
async fn list_returns_seed_records_in_order() {
    let app = app();
    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, seed());
}

#[tokio::test]
async fn list_is_idempotent() {
    let app = app();
    let (_, first) = send(&app, get("/")).await;
    let (_, second) = send(&app, get("/")).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn get_existing_user() {
    let app = app();
    let (status, body) = send(&app, get("/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "name": "John Doe", "email": "john@example.com" })
    );
}

#[tokio::test]
async fn get_missing_user() {
    let app = app();
    for uri in ["/999", "/abc", "/-1"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({ "error": "User not found" }), "{uri}");
    }
}

#[tokio::test]
async fn create_assigns_next_id_and_persists() {
    let app = app();
    let (status, body) = send(
        &app,
        post("/", r#"{"name":"Alice","email":"alice@x.com"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let alice = json!({ "id": 3, "name": "Alice", "email": "alice@x.com" });
    assert_eq!(body, alice);

    let (status, body) = send(&app, get("/3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, alice);

    let (_, body) = send(&app, get("/")).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[2], alice);
}

#[tokio::test]
async fn create_missing_field_is_rejected_without_mutation() {
    let app = app();
    for payload in [
        "",
        "{}",
        "null",
        "[]",
        r#"["name","email"]"#,
        "not json",
        r#"{"name":"Bob"}"#,
    ] {
        let (status, body) = send(&app, post("/", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload:?}");
        assert_eq!(body, json!({ "error": "Name and email are required" }));
    }

    let (_, body) = send(&app, get("/")).await;
    assert_eq!(body, seed());
}

#[tokio::test]
async fn create_only_checks_key_presence() {
    let app = app();

    let (status, body) = send(&app, post("/", r#"{"name":null,"email":"a@x.com"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 3, "name": null, "email": "a@x.com" }));

    let (status, body) = send(&app, post("/", r#"{"name":7,"email":"b@x.com"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 4, "name": 7, "email": "b@x.com" }));

    let (status, body) = send(&app, get("/4")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], json!(7));
}

#[tokio::test]
async fn ids_increase_monotonically() {
    let app = app();
    for expected in 3..8u64 {
        let payload = format!(r#"{{"name":"user{expected}","email":"u{expected}@x.com"}}"#);
        let (status, body) = send(&app, post("/", &payload)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], json!(expected));
    }
}

#[tokio::test]
async fn separate_apps_do_not_share_state() {
    let first = app();
    send(&first, post("/", r#"{"name":"A","email":"a@x.com"}"#)).await;

    let second = app();
    let (_, body) = send(&second, get("/")).await;
    assert_eq!(body, seed());
}

#[tokio::test]
async fn routes_follow_configured_base_path() {
    let config = AppConfig {
        base_path: "/users".to_string(),
        ..AppConfig::default()
    };
    let app = build_app(&config).unwrap();

    let (status, body) = send(&app, get("/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, seed());

    let (status, body) = send(&app, get("/users/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Jane Smith");

    let (status, _) = send(&app, post("/users", r#"{"name":"C","email":"c@x.com"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn nested_collection_accepts_trailing_slash() {
    let config = AppConfig {
        base_path: "/users".to_string(),
        ..AppConfig::default()
    };
    let app = build_app(&config).unwrap();

    let (status, body) = send(&app, get("/users/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, seed());

    let (status, body) = send(&app, post("/users/", r#"{"name":"D","email":"d@x.com"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], json!(3));

    let (status, body) = send(&app, get("/users/3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "D");
}
