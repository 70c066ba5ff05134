use crate::modules::delivery_log::core::entry::DeliveryEntry;

/// Entries whose name, phone or product contains `query`, ignoring case.
/// Relative order of `entries` is kept. An empty query keeps everything.
pub fn filter<'a>(entries: &'a [DeliveryEntry], query: &str) -> Vec<&'a DeliveryEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| matches(entry, &needle))
        .collect()
}

/// `needle` must already be lowercase.
pub fn matches(entry: &DeliveryEntry, needle: &str) -> bool {
    [&entry.name, &entry.phone, &entry.product]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}
