//! Conversion between the flattened EDI typing on the model and the
//! service's discriminated union
//!
//! Both directions are total and copy the transaction set and version
//! verbatim. Membership of those values in the service's enum sets is the
//! service's concern; invalid values are rejected there, not here.

use crate::models;
use crate::service::types;

/// Wrap the model's string-valued X12 details into the service union.
pub fn to_wire(edi: &models::EdiType) -> types::EdiType {
    match edi {
        models::EdiType::X12Details(details) => types::EdiType::X12Details(types::X12Details {
            transaction_set: details.transaction_set.as_str().into(),
            version: details.version.as_str().into(),
        }),
    }
}

/// Unwrap the service union back into the flattened string form.
pub fn from_wire(edi: &types::EdiType) -> models::EdiType {
    match edi {
        types::EdiType::X12Details(details) => models::EdiType::X12Details(models::X12Details {
            transaction_set: details.transaction_set.as_str().to_owned(),
            version: details.version.as_str().to_owned(),
        }),
    }
}
