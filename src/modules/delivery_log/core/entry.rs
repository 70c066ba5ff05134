// Delivery entry read model and the editable subset of its fields.
//
// Boundaries
// - No input or output here. Stores convert their own documents into these types.
//
// Notes
// - created_at is epoch milliseconds assigned by the store; it is the only sort key.
// - Every user-entered field is plain text and defaults to "" when absent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Values captured by the entry form when a delivery is recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFields {
    pub date: String,
    pub name: String,
    pub product: String,
    pub price: String,
    pub phone: String,
    pub address: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryEntry {
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

/// Partial update of the fields an operator may change after creation.
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub product: Option<String>,
    pub price: Option<String>,
    pub address: Option<String>,
    pub link: Option<String>,
}

impl DeliveryEntry {
    pub fn from_fields(id: impl Into<String>, created_at: i64, fields: EntryFields) -> Self {
        Self {
            id: id.into(),
            date: fields.date,
            name: fields.name,
            product: fields.product,
            price: fields.price,
            phone: fields.phone,
            address: fields.address,
            link: fields.link,
            created_at,
        }
    }

    /// Numeric price, `0.0` when the stored text is not a finite number.
    pub fn price_amount(&self) -> f64 {
        parse_price(&self.price).unwrap_or(0.0)
    }

    pub fn apply_patch(&mut self, patch: &EntryPatch) {
        let EntryPatch {
            name,
            phone,
            product,
            price,
            address,
            link,
        } = patch;
        overwrite(&mut self.name, name);
        overwrite(&mut self.phone, phone);
        overwrite(&mut self.product, product);
        overwrite(&mut self.price, price);
        overwrite(&mut self.address, address);
        overwrite(&mut self.link, link);
    }
}

impl EntryPatch {
    /// A patch carrying every editable field of `entry`.
    pub fn from_entry(entry: &DeliveryEntry) -> Self {
        Self {
            name: Some(entry.name.clone()),
            phone: Some(entry.phone.clone()),
            product: Some(entry.product.clone()),
            price: Some(entry.price.clone()),
            address: Some(entry.address.clone()),
            link: Some(entry.link.clone()),
        }
    }

    /// A patch carrying only the editable fields where `edited` differs from `original`.
    pub fn between(original: &DeliveryEntry, edited: &DeliveryEntry) -> Self {
        Self {
            name: changed(&original.name, &edited.name),
            phone: changed(&original.phone, &edited.phone),
            product: changed(&original.product, &edited.product),
            price: changed(&original.price, &edited.price),
            address: changed(&original.address, &edited.address),
            link: changed(&original.link, &edited.link),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn changed(before: &str, after: &str) -> Option<String> {
    (before != after).then(|| after.to_string())
}

fn overwrite(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        target.clone_from(value);
    }
}

pub fn parse_price(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

/// Lenient text coercion for loosely typed input: numbers become their
/// decimal text, anything that is neither a string nor a number becomes "".
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    }
}
