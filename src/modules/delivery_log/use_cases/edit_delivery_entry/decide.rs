use crate::modules::delivery_log::core::entry::EntryPatch;
use crate::modules::delivery_log::core::validation::{DecideError, require, require_price};
use crate::modules::delivery_log::use_cases::edit_delivery_entry::{
    command::EditDeliveryEntry, decision::Decision,
};

pub fn decide_edit(command: EditDeliveryEntry) -> Decision {
    match validate(&command.patch) {
        Ok(()) => Decision::Accepted {
            id: command.id,
            patch: command.patch,
        },
        Err(reason) => Decision::Rejected { reason },
    }
}

// Only fields present in the patch are checked. The link may be cleared.
fn validate(patch: &EntryPatch) -> Result<(), DecideError> {
    let required = [
        ("name", &patch.name),
        ("product", &patch.product),
        ("phone", &patch.phone),
        ("address", &patch.address),
    ];
    for (field, value) in required {
        if let Some(value) = value {
            require(field, value)?;
        }
    }
    if let Some(price) = &patch.price {
        require_price(price)?;
    }
    Ok(())
}
