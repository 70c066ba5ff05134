use crate::shared::config::Config;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::record_delivery::RecordDeliveryBuilder;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn records_twelve_deliveries_and_pages_through_them() {
    let app = router(AppState::in_memory(&Config::default()));

    for i in 1..=12 {
        let (status, _) = send(
            &app,
            json_request(
                "POST",
                "/delivery-entries",
                json!({
                    "date": "2025-03-01",
                    "name": format!("Customer {i}"),
                    "product": "Parcel",
                    "price": i * 100,
                    "phone": format!("90000000{i:02}"),
                    "address": "Somewhere",
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, first) = send(&app, get("/delivery-reports")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["total_pages"], 2);
    assert_eq!(first["rows"].as_array().unwrap().len(), 10);
    assert_eq!(first["rows"][0]["name"], "Customer 12");
    assert_eq!(first["has_prev"], false);
    assert_eq!(first["has_next"], true);

    let (_, second) = send(&app, get("/delivery-reports?page=2")).await;
    assert_eq!(second["rows"].as_array().unwrap().len(), 2);
    assert_eq!(second["rows"][0]["serial"], 11);
    assert_eq!(second["rows"][1]["name"], "Customer 1");
    assert_eq!(second["has_prev"], true);
    assert_eq!(second["has_next"], false);

    let (_, filtered) = send(&app, get("/delivery-reports?q=customer%201&page=2")).await;
    assert_eq!(filtered["page"], 1);
    assert_eq!(filtered["total_entries"], 4);
}

#[tokio::test]
async fn edits_an_entry_in_place_and_finds_it_by_the_new_phone() {
    let state = AppState::in_memory(&Config::default());
    let app = router(state.clone());
    let alice = state
        .record_handler
        .handle(RecordDeliveryBuilder::new().name("Alice").phone("111").build())
        .await
        .unwrap();
    let bob = state
        .record_handler
        .handle(RecordDeliveryBuilder::new().name("Bob").phone("222").build())
        .await
        .unwrap();

    let (status, updated) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/delivery-entries/{}", bob.id),
            json!({ "phone": "333" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["phone"], "333");
    assert_eq!(updated["created_at"], bob.created_at);

    let (_, all) = send(&app, get("/delivery-reports")).await;
    let ids: Vec<&str> = all["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![bob.id.as_str(), alice.id.as_str()]);

    let (_, found) = send(&app, get("/delivery-reports?q=333")).await;
    assert_eq!(found["rows"][0]["id"], bob.id);
    assert_eq!(found["total_entries"], 1);

    let (status, detail) = send(&app, get(&format!("/delivery-entries/{}", alice.id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["phone"], "111");
}

#[tokio::test]
async fn browses_through_a_reports_view_built_from_the_app_state() {
    use crate::modules::delivery_log::core::entry::EntryPatch;
    use crate::modules::delivery_log::core::reports::events::ReportsEvent;

    let state = AppState::in_memory(&Config::default());
    for name in ["Alice", "Bob"] {
        state
            .record_handler
            .handle(RecordDeliveryBuilder::new().name(name).build())
            .await
            .unwrap();
    }

    let mut view = state.reports_view();
    view.activate().await;
    view.dispatch(ReportsEvent::QueryChanged("ali".into()));
    assert_eq!(view.page_view().rows.len(), 1);

    let alice = view.page_view().rows[0].entry.id.clone();
    view.dispatch(ReportsEvent::EditStarted(alice.clone()));
    view.dispatch(ReportsEvent::DraftChanged(EntryPatch {
        product: Some("Silk Saree".into()),
        ..EntryPatch::default()
    }));
    view.save_edit().await.unwrap();

    let stored = state.store.fetch_one(&alice).await.unwrap();
    assert_eq!(stored.product, "Silk Saree");
    assert_eq!(view.page_view().rows[0].entry.product, "Silk Saree");
}
