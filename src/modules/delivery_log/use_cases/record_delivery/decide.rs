use crate::modules::delivery_log::core::validation::{
    DecideError, require, require_date, require_price,
};
use crate::modules::delivery_log::use_cases::record_delivery::{
    command::RecordDelivery, decision::Decision,
};

pub fn decide_record(command: RecordDelivery) -> Decision {
    match validate(&command) {
        Ok(()) => Decision::Accepted {
            fields: command.into_fields(),
        },
        Err(reason) => Decision::Rejected { reason },
    }
}

// Form order, so the first blank field is the one reported.
fn validate(command: &RecordDelivery) -> Result<(), DecideError> {
    require_date(&command.date)?;
    require("name", &command.name)?;
    require("product", &command.product)?;
    require_price(&command.price)?;
    require("phone", &command.phone)?;
    require("address", &command.address)?;
    Ok(())
}
