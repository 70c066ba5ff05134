use crate::modules::delivery_log::core::entry::DeliveryEntry;

pub const BASE_CREATED_AT: i64 = 1_700_000_000_000;

pub struct DeliveryEntryBuilder {
    inner: DeliveryEntry,
}

impl Default for DeliveryEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl DeliveryEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: DeliveryEntry {
                id: "de-0001".into(),
                date: "2025-03-01".into(),
                name: "Asha Verma".into(),
                product: "Cotton Saree".into(),
                price: "1499".into(),
                phone: "9876543210".into(),
                address: "12 MG Road\nBengaluru 560001".into(),
                link: "TRK123456".into(),
                created_at: BASE_CREATED_AT,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
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

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> DeliveryEntry {
        self.inner
    }
}

/// `n` entries newest first: "Customer 1" / "Product 1" is the newest.
pub fn numbered_entries(n: usize) -> Vec<DeliveryEntry> {
    (1..=n)
        .map(|i| {
            DeliveryEntryBuilder::new()
                .id(format!("de-{i:04}"))
                .name(format!("Customer {i}"))
                .product(format!("Product {i}"))
                .phone(format!("98{i:08}"))
                .created_at(BASE_CREATED_AT - i as i64 * 1_000)
                .build()
        })
        .collect()
}

#[cfg(test)]
mod delivery_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_number_entries_newest_first() {
        let entries = numbered_entries(3);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Customer 1", "Customer 2", "Customer 3"]);
        assert!(entries.windows(2).all(|w| w[0].created_at > w[1].created_at));
        assert_eq!(entries[1].phone, "9800000002");
    }
}
