use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::delivery_log::core::ports::StoreError;
use crate::modules::delivery_log::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.view_handler.handle(&id).await {
        Ok(detail) => Json(detail).into_response(),
        Err(ApplicationError::Store(StoreError::NotFound { .. })) => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(_) => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}
