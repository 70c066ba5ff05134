use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::delivery_log::use_cases::list_delivery_reports::handler::ReportsQuery;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeliveryReportsParams {
    pub q: Option<String>,
    pub page: Option<usize>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<DeliveryReportsParams>,
) -> impl IntoResponse {
    let query = ReportsQuery {
        query: params.q.unwrap_or_default(),
        page: params.page.unwrap_or(1),
    };
    match state.reports_handler.handle(query).await {
        Ok(view) => Json(view).into_response(),
        Err(_) => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

#[cfg(test)]
mod list_delivery_reports_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::delivery_log::adapters::outbound::document_record_store::DocumentRecordStore;
    use crate::shared::config::Config;
    use crate::shared::infrastructure::document_store::in_memory::InMemoryCollection;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::commands::record_delivery::RecordDeliveryBuilder;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/delivery-reports", get(handle))
            .with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_no_entries_state_when_the_log_is_empty() {
        let response = app(AppState::in_memory(&Config::default()))
            .oneshot(
                Request::get("/delivery-reports")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["no_entries"], true);
        assert_eq!(json["rows"], serde_json::json!([]));
        assert_eq!(json["page_size"], 10);
    }

    #[tokio::test]
    async fn it_should_return_the_matching_rows_for_a_query() {
        let state = AppState::in_memory(&Config::default());
        for name in ["Alice", "Bob"] {
            state
                .record_handler
                .handle(RecordDeliveryBuilder::new().name(name).build())
                .await
                .unwrap();
        }

        let response = app(state)
            .oneshot(
                Request::get("/delivery-reports?q=bo&page=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["total_entries"], 1);
        assert_eq!(json["rows"][0]["name"], "Bob");
        assert_eq!(json["rows"][0]["serial"], 1);
        assert_eq!(json["rows"][0]["price_display"], "₹1,499");
    }

    #[tokio::test]
    async fn it_should_return_503_when_the_store_is_offline() {
        let mut collection = InMemoryCollection::new("delivery_log");
        collection.toggle_offline();
        let store = Arc::new(DocumentRecordStore::new(Arc::new(collection)));

        let response = app(AppState::from_store(store, &Config::default()))
            .oneshot(
                Request::get("/delivery-reports")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
