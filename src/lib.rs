pub mod shared {
    pub mod config;
    pub mod infrastructure {
        pub mod document_store;
        pub mod session_store;
    }
}

pub mod modules {
    pub mod delivery_log {
        pub mod core {
            pub mod detail;
            pub mod entry;
            pub mod pagination;
            pub mod ports;
            pub mod search;
            pub mod validation;
            pub mod reports {
                pub mod events;
                pub mod reduce;
                pub mod state;
            }
        }
        pub mod use_cases {
            pub mod errors;
            pub mod record_delivery {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_delivery_reports {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod view_delivery_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod edit_delivery_entry {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod reconcile;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod browse_delivery_reports {
                pub mod view;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod document_record_store;
            }
        }
    }
    pub mod session {
        pub mod core {
            pub mod gate;
        }
        pub mod use_cases {
            pub mod login {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod require_session {
                pub mod guard;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
