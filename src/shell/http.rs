use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::modules::delivery_log::use_cases::edit_delivery_entry::inbound::http as edit_http;
use crate::modules::delivery_log::use_cases::list_delivery_reports::inbound::http as list_http;
use crate::modules::delivery_log::use_cases::record_delivery::inbound::http as record_http;
use crate::modules::delivery_log::use_cases::view_delivery_entry::inbound::http as view_http;
use crate::modules::session::use_cases::login::inbound::http as login_http;
use crate::modules::session::use_cases::require_session::inbound::http::require_session;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let gql = Router::new()
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .with_state(graphql::schema(state.clone()));

    let protected = Router::new()
        .route("/delivery-entries", post(record_http::handle))
        .route(
            "/delivery-entries/{id}",
            get(view_http::handle).patch(edit_http::handle),
        )
        .route("/delivery-reports", get(list_http::handle))
        .with_state(state.clone())
        .merge(gql)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .route("/login", post(login_http::handle))
        .with_state(state)
        .merge(protected)
}
