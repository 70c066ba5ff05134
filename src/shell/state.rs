use crate::modules::delivery_log::adapters::outbound::document_record_store::DocumentRecordStore;
use crate::modules::delivery_log::core::ports::DeliveryLogStore;
use crate::modules::delivery_log::use_cases::browse_delivery_reports::view::ReportsView;
use crate::modules::delivery_log::use_cases::edit_delivery_entry::handler::EditDeliveryEntryHandler;
use crate::modules::delivery_log::use_cases::list_delivery_reports::handler::ListDeliveryReportsHandler;
use crate::modules::delivery_log::use_cases::record_delivery::handler::RecordDeliveryHandler;
use crate::modules::delivery_log::use_cases::view_delivery_entry::handler::ViewDeliveryEntryHandler;
use crate::modules::session::core::gate::SessionGate;
use crate::modules::session::use_cases::login::handler::LoginHandler;
use crate::modules::session::use_cases::require_session::guard::SessionGuard;
use crate::shared::config::Config;
use crate::shared::infrastructure::document_store::in_memory::InMemoryCollection;
use crate::shared::infrastructure::session_store::SessionStore;
use crate::shared::infrastructure::session_store::in_memory::InMemorySessionStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DeliveryLogStore>,
    pub record_handler: Arc<RecordDeliveryHandler>,
    pub reports_handler: Arc<ListDeliveryReportsHandler>,
    pub view_handler: Arc<ViewDeliveryEntryHandler>,
    pub edit_handler: Arc<EditDeliveryEntryHandler>,
    pub login_handler: Arc<LoginHandler>,
    pub session_guard: Arc<SessionGuard>,
}

impl AppState {
    /// Wires every handler against an in-memory collection named by the config.
    pub fn in_memory(config: &Config) -> Self {
        let collection = Arc::new(InMemoryCollection::new(config.collection.clone()));
        Self::from_store(Arc::new(DocumentRecordStore::new(collection)), config)
    }

    pub fn from_store(store: Arc<dyn DeliveryLogStore>, config: &Config) -> Self {
        let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        let gate = SessionGate::new(config.admin_password.clone(), config.session_ttl);

        Self {
            record_handler: Arc::new(RecordDeliveryHandler::new(store.clone())),
            reports_handler: Arc::new(ListDeliveryReportsHandler::new(
                store.clone(),
                config.page_size,
            )),
            view_handler: Arc::new(ViewDeliveryEntryHandler::new(store.clone())),
            edit_handler: Arc::new(EditDeliveryEntryHandler::new(store.clone())),
            login_handler: Arc::new(LoginHandler::new(gate.clone(), sessions.clone())),
            session_guard: Arc::new(SessionGuard::new(gate, sessions)),
            store,
        }
    }

    /// A fresh reports screen sharing this state's store and page size.
    pub fn reports_view(&self) -> ReportsView {
        ReportsView::new(
            self.store.clone(),
            self.edit_handler.clone(),
            self.reports_handler.page_size(),
        )
    }
}
