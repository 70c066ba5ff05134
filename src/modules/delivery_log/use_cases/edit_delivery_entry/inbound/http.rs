use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::modules::delivery_log::core::entry::{EntryPatch, coerce_text};
use crate::modules::delivery_log::core::ports::StoreError;
use crate::modules::delivery_log::use_cases::edit_delivery_entry::command::EditDeliveryEntry;
use crate::modules::delivery_log::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

/// Absent fields are left as stored. `date` is not editable and is ignored if sent.
#[derive(Deserialize)]
pub struct EditDeliveryEntryBody {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub product: Option<String>,
    pub price: Option<Value>,
    pub address: Option<String>,
    pub link: Option<String>,
}

impl From<EditDeliveryEntryBody> for EntryPatch {
    fn from(body: EditDeliveryEntryBody) -> Self {
        Self {
            name: body.name,
            phone: body.phone,
            product: body.product,
            price: body.price.as_ref().map(coerce_text),
            address: body.address,
            link: body.link,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<EditDeliveryEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = EditDeliveryEntry {
        id,
        patch: body.into(),
    };

    match state.edit_handler.handle(command).await {
        Ok(entry) => Json(entry).into_response(),
        Err(ApplicationError::Rejected(reason)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": reason.to_string() })),
        )
            .into_response(),
        Err(ApplicationError::Store(StoreError::NotFound { .. })) => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(_) => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}
