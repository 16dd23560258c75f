use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


/// Builds the API router on top of a fresh in-memory database.
///
/// The context is returned so the database outlives the router and can be seeded directly.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let app = router().with_state(AppState::new(db));

    (test, app)
}

/// Sends a request and returns the status with the decoded JSON body.
///
/// Empty bodies decode to `Value::Null`.
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
    };

    (status, value)
}

fn student_body(school: Option<i32>) -> Value {
    let mut body = json!({
        "first_name": "Hasan",
        "last_name": "Mahmud",
        "age": "10.5",
        "nationality": "Bangladeshi",
        "address": "House 12, Road 5, Dhanmondi",
    });
    if let Some(school) = school {
        body["school"] = json!(school);
    }
    body
}
