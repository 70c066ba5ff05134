// Field rules shared by the record and edit deciders.
//
// Boundaries
// - Pure checks on text. No input or output.

use crate::modules::delivery_log::core::entry::parse_price;
use chrono::NaiveDate;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("required field `{0}` is missing")]
    Missing(&'static str),

    #[error("`{value}` is not a calendar date (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    #[error("`{value}` is not a valid price")]
    InvalidPrice { value: String },
}

pub fn require(field: &'static str, value: &str) -> Result<(), DecideError> {
    if value.trim().is_empty() {
        return Err(DecideError::Missing(field));
    }
    Ok(())
}

pub fn require_date(value: &str) -> Result<(), DecideError> {
    require("date", value)?;
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| DecideError::InvalidDate {
            value: value.to_string(),
        })
}

pub fn require_price(value: &str) -> Result<(), DecideError> {
    require("price", value)?;
    match parse_price(value) {
        Some(amount) if amount >= 0.0 => Ok(()),
        _ => Err(DecideError::InvalidPrice {
            value: value.to_string(),
        }),
    }
}
