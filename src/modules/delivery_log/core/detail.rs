use crate::modules::delivery_log::core::entry::DeliveryEntry;
use serde::Serialize;

pub const PLACEHOLDER: &str = "-";
pub const LINK_PLACEHOLDER: &str = "—";

/// Display projection of a single entry. Empty text renders as a dash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryDetail {
    pub id: String,
    pub date: String,
    pub name: String,
    pub product: String,
    pub price: String,
    pub phone: String,
    pub address: String,
    pub link: String,
}

impl From<&DeliveryEntry> for EntryDetail {
    fn from(entry: &DeliveryEntry) -> Self {
        Self {
            id: entry.id.clone(),
            date: or_placeholder(&entry.date, PLACEHOLDER),
            name: or_placeholder(&entry.name, PLACEHOLDER),
            product: or_placeholder(&entry.product, PLACEHOLDER),
            price: format_rupees(entry.price_amount()),
            phone: or_placeholder(&entry.phone, PLACEHOLDER),
            address: or_placeholder(&entry.address, PLACEHOLDER),
            link: or_placeholder(&entry.link, LINK_PLACEHOLDER),
        }
    }
}

pub fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Rupee amount in Indian digit grouping, e.g. `₹1,23,456.5`.
pub fn format_rupees(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let paise = (amount.abs() * 100.0).round() as u64;
    let (whole, fraction) = (paise / 100, paise % 100);

    let mut out = String::from("₹");
    if amount < 0.0 && paise > 0 {
        out.push('-');
    }
    out.push_str(&group_indian(whole));
    if fraction > 0 {
        out.push('.');
        out.push_str(format!("{fraction:02}").trim_end_matches('0'));
    }
    out
}

// Last three digits, then groups of two.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    while head.len() > 2 {
        let (rest, group) = head.split_at(head.len() - 2);
        groups.push(group);
        head = rest;
    }
    groups.push(head);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}
