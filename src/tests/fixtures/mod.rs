pub mod commands {
    pub mod record_delivery;
}
pub mod entries;
