use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::modules::delivery_log::core::entry::coerce_text;
use crate::modules::delivery_log::use_cases::errors::ApplicationError;
use crate::modules::delivery_log::use_cases::record_delivery::command::RecordDelivery;
use crate::shell::state::AppState;

/// Form body. Absent fields arrive as "" and are caught by the decider;
/// price may be sent as a JSON number or as text.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct RecordDeliveryBody {
    pub date: String,
    pub name: String,
    pub product: String,
    pub price: Value,
    pub phone: String,
    pub address: String,
    pub link: String,
}

#[derive(Serialize)]
pub struct RecordDeliveryResponse {
    pub id: String,
    pub created_at: i64,
}

impl From<RecordDeliveryBody> for RecordDelivery {
    fn from(body: RecordDeliveryBody) -> Self {
        Self {
            date: body.date,
            name: body.name,
            product: body.product,
            price: coerce_text(&body.price),
            phone: body.phone,
            address: body.address,
            link: body.link,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RecordDeliveryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.record_handler.handle(body.into()).await {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(RecordDeliveryResponse {
                id: entry.id,
                created_at: entry.created_at,
            }),
        )
            .into_response(),
        Err(ApplicationError::Rejected(reason)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": reason.to_string() })),
        )
            .into_response(),
        Err(_) => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}
