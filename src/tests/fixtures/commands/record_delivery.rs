// Shared test fixture for the RecordDelivery command, read from a JSON form submission.

use crate::modules::delivery_log::use_cases::record_delivery::command::RecordDelivery;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct RecordDeliveryDto {
    pub date: String,
    pub name: String,
    pub product: String,
    pub price: String,
    pub phone: String,
    pub address: String,
    pub link: String,
}

pub struct RecordDeliveryBuilder {
    inner: RecordDelivery,
}

impl Default for RecordDeliveryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RecordDeliveryBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/record_delivery.json").unwrap();
        let dto: RecordDeliveryDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: RecordDelivery {
                date: dto.date,
                name: dto.name,
                product: dto.product,
                price: dto.price,
                phone: dto.phone,
                address: dto.address,
                link: dto.link,
            },
        }
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn product(mut self, v: impl Into<String>) -> Self {
        self.inner.product = v.into();
        self
    }

    pub fn price(mut self, v: impl Into<String>) -> Self {
        self.inner.price = v.into();
        self
    }

    pub fn phone(mut self, v: impl Into<String>) -> Self {
        self.inner.phone = v.into();
        self
    }

    pub fn address(mut self, v: impl Into<String>) -> Self {
        self.inner.address = v.into();
        self
    }

    pub fn link(mut self, v: impl Into<String>) -> Self {
        self.inner.link = v.into();
        self
    }

    pub fn build(self) -> RecordDelivery {
        self.inner
    }
}

#[cfg(test)]
mod record_delivery_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RecordDeliveryBuilder::default().build();
        assert_eq!(built.date, "2025-03-01");
        assert_eq!(built.name, "Asha Verma");
        assert_eq!(built.product, "Cotton Saree");
        assert_eq!(built.price, "1499");
        assert_eq!(built.phone, "9876543210");
        assert_eq!(built.address, "12 MG Road\nBengaluru 560001");
        assert_eq!(built.link, "TRK123456");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RecordDeliveryBuilder::new()
            .date("2024-12-31")
            .name("Ravi")
            .product("Shawl")
            .price("899.50")
            .phone("111")
            .address("Shillong")
            .link("")
            .build();

        assert_eq!(custom.date, "2024-12-31");
        assert_eq!(custom.name, "Ravi");
        assert_eq!(custom.product, "Shawl");
        assert_eq!(custom.price, "899.50");
        assert_eq!(custom.phone, "111");
        assert_eq!(custom.address, "Shillong");
        assert_eq!(custom.link, "");
    }
}
