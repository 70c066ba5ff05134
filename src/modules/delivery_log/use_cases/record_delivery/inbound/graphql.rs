use async_graphql::{Context, ID, InputObject, Object, Result as GqlResult};

use crate::modules::delivery_log::use_cases::record_delivery::command::RecordDelivery;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct RecordDeliveryInput {
    pub date: String,
    pub name: String,
    pub product: String,
    pub price: String,
    pub phone: String,
    pub address: String,
    #[graphql(default)]
    pub link: String,
}

#[derive(Default)]
pub struct RecordDeliveryMutation;

#[Object]
impl RecordDeliveryMutation {
    async fn record_delivery(
        &self,
        context: &Context<'_>,
        input: RecordDeliveryInput,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();

        let command = RecordDelivery {
            date: input.date,
            name: input.name,
            product: input.product,
            price: input.price,
            phone: input.phone,
            address: input.address,
            link: input.link,
        };

        let entry = state
            .record_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(entry.id))
    }
}
