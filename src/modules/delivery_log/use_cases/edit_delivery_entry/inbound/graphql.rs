use async_graphql::{Context, ID, InputObject, Object, Result as GqlResult};

use crate::modules::delivery_log::core::entry::EntryPatch;
use crate::modules::delivery_log::use_cases::edit_delivery_entry::command::EditDeliveryEntry;
use crate::modules::delivery_log::use_cases::list_delivery_reports::inbound::graphql::GqlDeliveryEntry;
use crate::shell::state::AppState;

#[derive(InputObject, Default)]
pub struct EditDeliveryEntryInput {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub product: Option<String>,
    pub price: Option<String>,
    pub address: Option<String>,
    pub link: Option<String>,
}

impl From<EditDeliveryEntryInput> for EntryPatch {
    fn from(input: EditDeliveryEntryInput) -> Self {
        Self {
            name: input.name,
            phone: input.phone,
            product: input.product,
            price: input.price,
            address: input.address,
            link: input.link,
        }
    }
}

#[derive(Default)]
pub struct EditDeliveryEntryMutation;

#[Object]
impl EditDeliveryEntryMutation {
    async fn edit_delivery_entry(
        &self,
        context: &Context<'_>,
        id: ID,
        input: EditDeliveryEntryInput,
    ) -> GqlResult<GqlDeliveryEntry> {
        let state = context.data_unchecked::<AppState>();

        let command = EditDeliveryEntry {
            id: id.to_string(),
            patch: input.into(),
        };

        let entry = state
            .edit_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(entry.into())
    }
}
