use crate::shared::config::Config;
use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::TimeDelta;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

fn gated_app() -> axum::Router {
    router(AppState::in_memory(&Config {
        admin_password: Some("open-sesame".into()),
        session_ttl: TimeDelta::minutes(30),
        ..Config::default()
    }))
}

#[tokio::test]
async fn keeps_reports_behind_the_login() {
    let app = gated_app();

    let response = app
        .clone()
        .oneshot(Request::get("/delivery-reports").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(
            Request::post("/login")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"password":"open-sesame"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let issued: Value = serde_json::from_slice(&bytes).unwrap();
    let token = issued["token"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::get("/delivery-reports")
                .header("x-session-token", token)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn keeps_graphql_behind_the_login() {
    let response = gated_app()
        .oneshot(
            Request::post("/gql")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"query":"{ deliveryReports { noEntries } }"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn serves_graphql_when_the_gate_is_disabled() {
    let response = router(AppState::in_memory(&Config::default()))
        .oneshot(
            Request::post("/gql")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"query":"{ deliveryReports { noEntries } }"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["data"]["deliveryReports"]["noEntries"], true);
}
