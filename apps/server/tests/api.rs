use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;
use wanderplan_server::{api::app_router, build_state, config::Config, events::NOTICE, AppState};

async fn build_test_app() -> (Router, Arc<AppState>, TempDir) {
    let tmp = tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_str().unwrap().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        planning_delay: Duration::from_millis(20),
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state.clone(), &config), state, tmp)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn trip_form() -> Value {
    json!({
        "destination": "Paris, France",
        "startDate": "2024-03-15",
        "endDate": "2024-03-22",
        "travelers": "2",
        "budget": "150000",
        "currency": "INR",
        "attractions": ["sightseeing", "food"]
    })
}

#[tokio::test]
async fn root_reports_liveness() {
    let (app, _state, _tmp) = build_test_app().await;
    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"API is running...");
}

#[tokio::test]
async fn health_and_readiness() {
    let (app, _state, _tmp) = build_test_app().await;
    let (status, body) = send(&app, Method::GET, "/api/v1/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");

    let (status, body) = send(&app, Method::GET, "/api/v1/readyz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn navigation_lists_header_links() {
    let (app, _state, _tmp) = build_test_app().await;
    let (status, json) = send_json(&app, Method::GET, "/api/v1/navigation", None).await;
    assert_eq!(status, StatusCode::OK);
    let paths: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["/", "/plan", "/dashboard", "/profile"]);
}

#[tokio::test]
async fn form_options_and_validation() {
    let (app, _state, _tmp) = build_test_app().await;
    let (status, options) = send_json(&app, Method::GET, "/api/v1/trips/options", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(options["travelers"].as_array().unwrap().len(), 8);
    assert_eq!(options["currencies"][0]["label"], "₹ INR");

    let (status, request) =
        send_json(&app, Method::POST, "/api/v1/trips/validate", Some(trip_form())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(request["destination"], "Paris, France");
    assert_eq!(request["travelers"], 2);

    let (status, error) = send_json(
        &app,
        Method::POST,
        "/api/v1/trips/validate",
        Some(json!({ "destination": "Paris", "budget": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 400);
    let message = error["message"].as_str().unwrap();
    assert!(message.contains("startDate"));
    assert!(message.contains("budget"));
}

#[tokio::test]
async fn plan_trip_answers_after_delay() {
    let (app, state, _tmp) = build_test_app().await;
    let mut events = state.event_bus.subscribe();

    let (status, json) = send_json(&app, Method::POST, "/api/v1/trips/plan", Some(trip_form())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["path"], "/itinerary");
    assert_eq!(json["notice"]["title"], "Trip Planning Started!");
    assert_eq!(json["tripRequest"]["budget"].as_f64(), Some(150000.0));

    let event = events.recv().await.unwrap();
    assert_eq!(event.name, NOTICE);
    assert_eq!(event.payload.unwrap()["title"], "Trip Planning Started!");
}

#[tokio::test]
async fn plan_trip_rejects_missing_fields() {
    let (app, state, _tmp) = build_test_app().await;
    let mut events = state.event_bus.subscribe();

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/v1/trips/plan",
        Some(json!({ "destination": "Tokyo" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let payload = events.recv().await.unwrap().payload.unwrap();
    assert_eq!(payload["title"], "Missing Information");
    assert_eq!(payload["variant"], "destructive");
}

#[tokio::test]
async fn itinerary_without_trip_shows_fallback() {
    let (app, _state, _tmp) = build_test_app().await;
    let (status, json) = send_json(&app, Method::POST, "/api/v1/itinerary", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "noTripData");
    assert_eq!(json["data"]["title"], "No trip data found");
    assert_eq!(json["data"]["actionPath"], "/plan");
}

#[tokio::test]
async fn itinerary_edit_recomputes_totals() {
    let (app, _state, _tmp) = build_test_app().await;
    let (_, trip_request) =
        send_json(&app, Method::POST, "/api/v1/trips/validate", Some(trip_form())).await;

    let (status, page) = send_json(
        &app,
        Method::POST,
        "/api/v1/itinerary",
        Some(json!({ "tripRequest": trip_request, "viewMode": "timeline" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["status"], "ready");
    let view = &page["data"];
    assert_eq!(view["budget"]["estimatedCostLabel"], "₹40,000");
    assert_eq!(view["days"][0]["activities"][0]["timelineMarker"], true);

    let (status, edited) = send_json(
        &app,
        Method::POST,
        "/api/v1/itinerary/activities/2",
        Some(json!({ "itinerary": view["itinerary"], "edit": { "cost": 10000 } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["days"][0]["totalCostLabel"], "₹16,000");
    assert_eq!(edited["budget"]["estimatedCostLabel"], "₹38,000");
    assert_eq!(edited["budget"]["remainingLabel"], "₹112,000");

    let (status, error) = send_json(
        &app,
        Method::POST,
        "/api/v1/itinerary/activities/99",
        Some(json!({ "itinerary": view["itinerary"], "edit": {} })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], 404);
}

#[tokio::test]
async fn itinerary_rejects_invalid_trip_request() {
    let (app, _state, _tmp) = build_test_app().await;
    let (_, trip_request) =
        send_json(&app, Method::POST, "/api/v1/trips/validate", Some(trip_form())).await;

    for (field, value) in [("travelers", json!(0)), ("budget", json!(-5))] {
        let mut invalid = trip_request.clone();
        invalid[field] = value;
        let (status, error) = send_json(
            &app,
            Method::POST,
            "/api/v1/itinerary",
            Some(json!({ "tripRequest": invalid })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{field}");
        assert_eq!(error["code"], 400);
    }
}

#[tokio::test]
async fn itinerary_edit_rejects_overflowing_total() {
    let (app, _state, _tmp) = build_test_app().await;
    let (_, trip_request) =
        send_json(&app, Method::POST, "/api/v1/trips/validate", Some(trip_form())).await;
    let (_, page) = send_json(
        &app,
        Method::POST,
        "/api/v1/itinerary",
        Some(json!({ "tripRequest": trip_request })),
    )
    .await;
    let mut itinerary = page["data"]["itinerary"].clone();
    itinerary["days"][0]["activities"][1]["cost"] = json!(5e28);

    let (status, error) = send_json(
        &app,
        Method::POST,
        "/api/v1/itinerary/activities/1",
        Some(json!({ "itinerary": itinerary, "edit": { "cost": 5e28 } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["message"].as_str().unwrap().contains("largest supported amount"));
}

#[tokio::test]
async fn itinerary_save_and_export_emit_notices() {
    let (app, state, _tmp) = build_test_app().await;
    let (_, trip_request) =
        send_json(&app, Method::POST, "/api/v1/trips/validate", Some(trip_form())).await;
    let (_, page) = send_json(
        &app,
        Method::POST,
        "/api/v1/itinerary",
        Some(json!({ "tripRequest": trip_request })),
    )
    .await;
    let itinerary = page["data"]["itinerary"].clone();

    let mut events = state.event_bus.subscribe();
    let (status, notice) =
        send_json(&app, Method::POST, "/api/v1/itinerary/save", Some(itinerary.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(notice["title"], "Itinerary Saved!");

    let (_, notice) = send_json(&app, Method::POST, "/api/v1/itinerary/export", Some(itinerary)).await;
    assert_eq!(notice["title"], "Exporting PDF");

    let first = events.recv().await.unwrap().payload.unwrap();
    let second = events.recv().await.unwrap().payload.unwrap();
    assert_eq!(first["title"], "Itinerary Saved!");
    assert_eq!(second["title"], "Exporting PDF");
}

#[tokio::test]
async fn dashboard_and_expenses() {
    let (app, _state, _tmp) = build_test_app().await;
    let (status, json) = send_json(&app, Method::GET, "/api/v1/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stats"]["totalTrips"], 3);
    assert_eq!(json["stats"]["ongoingTrips"], 1);
    assert_eq!(json["stats"]["totalBudgetLabel"], "₹350,000");
    assert_eq!(json["trips"][1]["warningMessage"], "Close to budget limit");
    assert!(json["trips"][0]["warningMessage"].is_null());
    assert_eq!(json["recentExpenses"].as_array().unwrap().len(), 4);

    let (status, expenses) =
        send_json(&app, Method::GET, "/api/v1/dashboard/trips/1/expenses", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(expenses["totalLabel"], "₹20,800");
    assert_eq!(expenses["breakdown"][0]["category"], "food");
}

#[tokio::test]
async fn profile_save_and_password_change() {
    let (app, _state, _tmp) = build_test_app().await;
    let (status, mut profile) = send_json(&app, Method::GET, "/api/v1/profile", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["name"], "Alex Johnson");
    assert_eq!(profile["initials"], "AJ");

    profile["name"] = json!("Sam Rivera");
    profile["email"] = json!("not-an-email");
    let (status, saved) = send_json(&app, Method::PUT, "/api/v1/profile", Some(profile)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["profile"]["initials"], "SR");
    assert_eq!(saved["notice"]["title"], "Profile Updated");

    let (_, reloaded) = send_json(&app, Method::GET, "/api/v1/profile", None).await;
    assert_eq!(reloaded["email"], "not-an-email");

    let (status, error) = send_json(
        &app,
        Method::POST,
        "/api/v1/profile/password",
        Some(json!({ "current": "old", "new": "a", "confirm": "b" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["message"].as_str().unwrap().contains("don't match"));

    let (status, changed) = send_json(
        &app,
        Method::POST,
        "/api/v1/profile/password",
        Some(json!({ "current": "old", "new": "a", "confirm": "a" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(changed["passwords"], json!({ "current": "", "new": "", "confirm": "" }));
    assert_eq!(changed["notice"]["title"], "Password Updated");
}

#[tokio::test]
async fn responses_carry_request_id() {
    let (app, _state, _tmp) = build_test_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
