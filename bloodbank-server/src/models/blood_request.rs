//! Blood requests raised for a patient

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::validation::{RequiredFields, ValidationError};

/// Body of `POST /api/requests` before validation.
///
/// There is no `createdAt` field: a client-supplied timestamp is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBloodRequestPayload {
    #[serde(default)]
    pub patient_name: Option<Value>,
    #[serde(default)]
    pub blood_type: Option<Value>,
    #[serde(default)]
    pub district: Option<Value>,
    #[serde(default)]
    pub hospital: Option<Value>,
    #[serde(default)]
    pub contact: Option<Value>,
}

impl NewBloodRequestPayload {
    /// Check that all five fields are present and stamp the request with
    /// `created_at`.
    pub fn validate(self, created_at: DateTime<Utc>) -> Result<NewBloodRequest, ValidationError> {
        let mut required = RequiredFields::default();
        let request = NewBloodRequest {
            patient_name: required.take("patientName", self.patient_name),
            blood_type: required.take("bloodType", self.blood_type),
            district: required.take("district", self.district),
            hospital: required.take("hospital", self.hospital),
            contact: required.take("contact", self.contact),
            created_at,
        };
        required.finish()?;
        Ok(request)
    }
}

/// A validated blood request, ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewBloodRequest {
    pub patient_name: Value,
    pub blood_type: Value,
    pub district: Value,
    pub hospital: Value,
    pub contact: Value,
    pub created_at: DateTime<Utc>,
}

impl NewBloodRequest {
    pub fn with_id(self, id: String) -> BloodRequest {
        BloodRequest {
            id,
            patient_name: self.patient_name,
            blood_type: self.blood_type,
            district: self.district,
            hospital: self.hospital,
            contact: self.contact,
            created_at: self.created_at,
        }
    }
}

/// A stored blood request as returned by `GET /api/requests`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub patient_name: Value,
    pub blood_type: Value,
    pub district: Value,
    pub hospital: Value,
    pub contact: Value,
    pub created_at: DateTime<Utc>,
}
