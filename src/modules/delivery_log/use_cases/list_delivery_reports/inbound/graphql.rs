use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::delivery_log::core::entry::DeliveryEntry;
use crate::modules::delivery_log::use_cases::list_delivery_reports::handler::{
    ReportRow, ReportsPageView, ReportsQuery,
};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlDeliveryEntry {
    pub id: String,
    pub date: String,
    pub name: String,
    pub product: String,
    pub price: String,
    pub phone: String,
    pub address: String,
    pub link: String,
    pub created_at: i64,
}

impl From<DeliveryEntry> for GqlDeliveryEntry {
    fn from(e: DeliveryEntry) -> Self {
        Self {
            id: e.id,
            date: e.date,
            name: e.name,
            product: e.product,
            price: e.price,
            phone: e.phone,
            address: e.address,
            link: e.link,
            created_at: e.created_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlReportRow {
    pub serial: u64,
    pub entry: GqlDeliveryEntry,
    pub price_display: String,
}

impl From<ReportRow> for GqlReportRow {
    fn from(r: ReportRow) -> Self {
        Self {
            serial: r.serial as u64,
            entry: r.entry.into(),
            price_display: r.price_display,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlReportsPage {
    pub no_entries: bool,
    pub query: String,
    pub page: u64,
    pub total_pages: u64,
    pub page_size: u64,
    pub has_prev: bool,
    pub has_next: bool,
    pub total_entries: u64,
    pub rows: Vec<GqlReportRow>,
}

impl From<ReportsPageView> for GqlReportsPage {
    fn from(v: ReportsPageView) -> Self {
        Self {
            no_entries: v.no_entries,
            query: v.query,
            page: v.page as u64,
            total_pages: v.total_pages as u64,
            page_size: v.page_size as u64,
            has_prev: v.has_prev,
            has_next: v.has_next,
            total_entries: v.total_entries as u64,
            rows: v.rows.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct DeliveryReportsQuery;

#[Object]
impl DeliveryReportsQuery {
    async fn delivery_reports(
        &self,
        context: &Context<'_>,
        query: Option<String>,
        page: Option<i64>,
    ) -> GqlResult<GqlReportsPage> {
        let state = context.data_unchecked::<AppState>();
        let view = state
            .reports_handler
            .handle(ReportsQuery {
                query: query.unwrap_or_default(),
                page: page.unwrap_or(1).max(1) as usize,
            })
            .await?;
        Ok(view.into())
    }
}
