use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use daybook::server::router::{DaybookState, daybook_router};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tower::ServiceExt;

const FRONTEND: &str = "http://localhost:5173";

fn temp_db_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "daybook-{tag}-{}-{nanos}.sqlite",
        std::process::id()
    ))
}

async fn build_app(db_path: &PathBuf) -> Router {
    let db = daybook::db::spawn(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("failed to spawn DbActor");
    daybook_router(DaybookState::new(db), FRONTEND).expect("failed to build router")
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let resp = app
        .clone()
        .oneshot(
            builder
                .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body was not JSON")
    };
    (status, value)
}

#[tokio::test]
async fn health_and_unknown_routes() {
    let db_path = temp_db_path("route-health");
    let app = build_app(&db_path).await;

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status":"ok","service":"daybook"}));

    let (status, body) = send(&app, "GET", "/calendar", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn todo_routes_full_cycle() {
    let db_path = temp_db_path("route-todo");
    let app = build_app(&db_path).await;

    // 1) create without description -> defaults
    let (status, created) = send(&app, "POST", "/todos", Some(r#"{"title":"read"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "read");
    assert_eq!(created["description"], Value::Null);
    assert_eq!(created["category"], "today");
    assert_eq!(created["completed"], false);
    let id = created["id"].as_i64().expect("id is an integer");

    // 2) list (trailing slash accepted)
    let (status, listed) = send(&app, "GET", "/todos/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created.clone()]));

    // 3) PUT applies `completed`
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/todos/{id}"),
        Some(r#"{"completed":true}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["id"], id);

    // 4) PATCH .../complete without query toggles, with query sets
    let (status, toggled) = send(&app, "PATCH", &format!("/todos/{id}/complete"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["completed"], false);

    let (_, set) = send(
        &app,
        "PATCH",
        &format!("/todos/{id}/complete?completed=true"),
        None,
    )
    .await;
    assert_eq!(set["completed"], true);

    // 5) unknown id -> 404
    let (status, body) = send(&app, "PATCH", "/todos/9999/complete", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error":{"code":"NOT_FOUND","message":"Todo not found"}})
    );

    // 6) delete then delete again
    let (status, body) = send(&app, "DELETE", &format!("/todos/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message":"Todo deleted"}));

    let (status, _) = send(&app, "DELETE", &format!("/todos/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = send(&app, "GET", "/todos", None).await;
    assert_eq!(listed, json!([]));

    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn invalid_input_is_rejected_before_store_access() {
    let db_path = temp_db_path("route-invalid");
    let app = build_app(&db_path).await;

    // malformed JSON -> 400
    let (status, body) = send(&app, "POST", "/todos", Some("not-json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_JSON");

    // missing required field -> 422
    let (status, body) = send(&app, "POST", "/exercise", Some(r#"{"date":"2024-05-01","title":"run"}"#)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    // wrong type -> 422
    let (status, _) = send(&app, "POST", "/wellness", Some(r#"{"date":"2024-05-01","mood":"good","energy":3}"#)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // non-numeric id -> 400
    let (status, body) = send(&app, "DELETE", "/sleep/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_PATH");

    // bad query value -> 400
    let (status, body) = send(&app, "PATCH", "/todos/1/complete?completed=maybe", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_QUERY");

    // body without content-type -> 415
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/goals")
                .body(Body::from(r#"{"text":"x"}"#))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    // nothing was written
    let (_, listed) = send(&app, "GET", "/exercise", None).await;
    assert_eq!(listed, json!([]));
    let (_, listed) = send(&app, "GET", "/goals", None).await;
    assert_eq!(listed, json!([]));

    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn sleep_wellness_exercise_routes() {
    let db_path = temp_db_path("route-entries");
    let app = build_app(&db_path).await;

    // weekly average with no rows -> 0.0 over an 8-day inclusive window
    let (status, avg) = send(&app, "GET", "/sleep/weekly_average", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(avg["average_hours"], json!(0.0));
    let start = chrono::NaiveDate::parse_from_str(avg["week_start"].as_str().unwrap(), "%Y-%m-%d").unwrap();
    let end = chrono::NaiveDate::parse_from_str(avg["week_end"].as_str().unwrap(), "%Y-%m-%d").unwrap();
    assert_eq!((end - start).num_days(), 7);

    let today = chrono::Utc::now().date_naive();
    let (status, sleep) = send(
        &app,
        "POST",
        "/sleep",
        Some(&format!(r#"{{"date":"{today}","hours":7.25}}"#)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(sleep["notes"], Value::Null);

    let (_, avg) = send(&app, "GET", "/sleep/weekly_average", None).await;
    assert_eq!(avg["average_hours"], json!(7.25));

    let (status, wellness) = send(
        &app,
        "POST",
        "/wellness",
        Some(r#"{"date":"2024-05-01","mood":4,"energy":2,"notes":"tired"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(wellness["mood"], 4);

    let (status, exercise) = send(
        &app,
        "POST",
        "/exercise/",
        Some(r#"{"date":"2024-05-02","title":"run","duration":25}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(exercise["intensity"], Value::Null);
    assert_eq!(exercise["duration"], 25);

    for (prefix, row, message) in [
        ("sleep", &sleep, "Sleep entry deleted"),
        ("wellness", &wellness, "Wellness entry deleted"),
        ("exercise", &exercise, "Exercise entry deleted"),
    ] {
        let id = row["id"].as_i64().unwrap();
        let (status, body) = send(&app, "DELETE", &format!("/{prefix}/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], message);

        let (_, listed) = send(&app, "GET", &format!("/{prefix}"), None).await;
        assert_eq!(listed, json!([]));

        let (status, _) = send(&app, "DELETE", &format!("/{prefix}/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn cors_allows_only_the_configured_origin() {
    let db_path = temp_db_path("route-cors");
    let app = build_app(&db_path).await;

    let preflight = |origin: &'static str| {
        Request::builder()
            .method("OPTIONS")
            .uri("/goals/1")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .expect("failed to build request")
    };

    let resp = app
        .clone()
        .oneshot(preflight(FRONTEND))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], FRONTEND);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "PUT");
    assert!(headers.contains_key("x-request-id"));

    let resp = app
        .clone()
        .oneshot(preflight("https://elsewhere.example"))
        .await
        .expect("request failed");
    assert!(!resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));

    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn request_id_is_echoed_when_supplied() {
    let db_path = temp_db_path("route-reqid");
    let app = build_app(&db_path).await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/")
                .header("x-request-id", "abc-123")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.headers()["x-request-id"], "abc-123");

    let _ = std::fs::remove_file(&db_path);
}
