use crate::modules::delivery_log::core::entry::EntryFields;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDelivery {
    pub date: String,
    pub name: String,
    pub product: String,
    pub price: String,
    pub phone: String,
    pub address: String,
    pub link: String,
}

impl RecordDelivery {
    pub fn into_fields(self) -> EntryFields {
        EntryFields {
            date: self.date,
            name: self.name,
            product: self.product,
            price: self.price,
            phone: self.phone,
            address: self.address,
            link: self.link,
        }
    }
}
