//! Domain models with validation at the boundary
//!
//! Write payloads deserialize leniently and are validated into typed
//! records. Invalid input returns ValidationError, not panic.

pub mod blood_request;
pub mod donor;
pub mod validation;

use serde::Serialize;

pub use blood_request::{BloodRequest, NewBloodRequest, NewBloodRequestPayload};
pub use donor::{Donor, DonorFilter, NewDonor, NewDonorPayload};
pub use validation::{RequiredFields, ValidationError};

/// Acknowledgment returned by both create endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl InsertAck {
    pub fn new(inserted_id: impl Into<String>) -> Self {
        Self {
            acknowledged: true,
            inserted_id: inserted_id.into(),
        }
    }
}
