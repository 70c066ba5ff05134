use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::Html};

use crate::modules::delivery_log::use_cases::edit_delivery_entry::inbound::graphql::EditDeliveryEntryMutation;
use crate::modules::delivery_log::use_cases::list_delivery_reports::inbound::graphql::DeliveryReportsQuery;
use crate::modules::delivery_log::use_cases::record_delivery::inbound::graphql::RecordDeliveryMutation;
use crate::modules::delivery_log::use_cases::view_delivery_entry::inbound::graphql::DeliveryEntryQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(DeliveryReportsQuery, DeliveryEntryQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(RecordDeliveryMutation, EditDeliveryEntryMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(State(schema): State<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
