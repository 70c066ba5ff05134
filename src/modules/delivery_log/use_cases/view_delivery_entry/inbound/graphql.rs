use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::delivery_log::core::detail::EntryDetail;
use crate::shell::state::AppState;

/// Display-ready fields; empty values come back as a dash.
#[derive(SimpleObject, Clone)]
pub struct GqlEntryDetail {
    pub id: String,
    pub date: String,
    pub name: String,
    pub product: String,
    pub price: String,
    pub phone: String,
    pub address: String,
    pub link: String,
}

impl From<EntryDetail> for GqlEntryDetail {
    fn from(d: EntryDetail) -> Self {
        Self {
            id: d.id,
            date: d.date,
            name: d.name,
            product: d.product,
            price: d.price,
            phone: d.phone,
            address: d.address,
            link: d.link,
        }
    }
}

#[derive(Default)]
pub struct DeliveryEntryQuery;

#[Object]
impl DeliveryEntryQuery {
    async fn delivery_entry(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlEntryDetail> {
        let state = context.data_unchecked::<AppState>();
        let detail = state.view_handler.handle(&id).await?;
        Ok(detail.into())
    }
}
