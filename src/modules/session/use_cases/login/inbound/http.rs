use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::session::core::gate::LoginError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LoginBody {
    pub password: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<LoginBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .login_handler
        .handle(&body.password, Utc::now().timestamp_millis())
        .await
    {
        Ok(issued) => Json(issued).into_response(),
        Err(LoginError::IncorrectPassword) => StatusCode::UNAUTHORIZED.into_response(),
        Err(LoginError::Disabled) => StatusCode::NOT_FOUND.into_response(),
    }
}
