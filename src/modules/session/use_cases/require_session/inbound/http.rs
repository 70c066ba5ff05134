use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::shell::state::AppState;

pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let token = session_token(request.headers());
    let now = Utc::now().timestamp_millis();
    if state.session_guard.verify(token.as_deref(), now).await {
        next.run(request).await
    } else {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

/// `x-session-token`, or else an `Authorization: Bearer` token.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        return Some(token.trim().to_string());
    }
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
}
