//! MongoDB adapter
//!
//! Collections live in `bloodDonorDB`:
//! - `donors`: name, bloodType, district, contact
//! - `requests`: patientName, bloodType, district, hospital, contact, createdAt
//!
//! Record fields hold whatever value the client sent. Reads are lenient: a
//! field of any BSON type decodes, and a missing one reads as `null`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, DateTime as BsonDateTime, Document};
use mongodb::Collection;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{RegistryStore, StoreError, StoreStatus};
use crate::db::ConnectionManager;
use crate::models::{BloodRequest, Donor, DonorFilter, InsertAck, NewBloodRequest, NewDonor};

const DONORS: &str = "donors";
const REQUESTS: &str = "requests";

/// Donor as stored in the `donors` collection
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DonorDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    id: Option<Bson>,
    #[serde(default)]
    name: Value,
    #[serde(default)]
    blood_type: Value,
    #[serde(default)]
    district: Value,
    #[serde(default)]
    contact: Value,
}

impl From<NewDonor> for DonorDocument {
    fn from(d: NewDonor) -> Self {
        Self {
            id: None,
            name: d.name,
            blood_type: d.blood_type,
            district: d.district,
            contact: d.contact,
        }
    }
}

impl From<DonorDocument> for Donor {
    fn from(d: DonorDocument) -> Self {
        Self {
            id: d.id.map(render_id).unwrap_or_default(),
            name: d.name,
            blood_type: d.blood_type,
            district: d.district,
            contact: d.contact,
        }
    }
}

/// Blood request as stored in the `requests` collection
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    id: Option<Bson>,
    #[serde(default)]
    patient_name: Value,
    #[serde(default)]
    blood_type: Value,
    #[serde(default)]
    district: Value,
    #[serde(default)]
    hospital: Value,
    #[serde(default)]
    contact: Value,
    created_at: BsonDateTime,
}

impl From<NewBloodRequest> for RequestDocument {
    fn from(r: NewBloodRequest) -> Self {
        Self {
            id: None,
            patient_name: r.patient_name,
            blood_type: r.blood_type,
            district: r.district,
            hospital: r.hospital,
            contact: r.contact,
            created_at: BsonDateTime::from_millis(r.created_at.timestamp_millis()),
        }
    }
}

impl TryFrom<RequestDocument> for BloodRequest {
    type Error = StoreError;

    fn try_from(r: RequestDocument) -> Result<Self, Self::Error> {
        let millis = r.created_at.timestamp_millis();
        let created_at =
            DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| StoreError::InvalidDocument {
                collection: REQUESTS,
                reason: format!("createdAt out of range: {millis}"),
            })?;

        Ok(Self {
            id: r.id.map(render_id).unwrap_or_default(),
            patient_name: r.patient_name,
            blood_type: r.blood_type,
            district: r.district,
            hospital: r.hospital,
            contact: r.contact,
            created_at,
        })
    }
}

/// Render a document `_id` the way JSON clients expect it: ObjectIds as
/// 24-char hex, strings verbatim.
fn render_id(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

/// Exact-match filter containing only the supplied fields.
fn donor_filter(filter: &DonorFilter) -> Document {
    let mut query = Document::new();
    if let Some(blood_type) = &filter.blood_type {
        query.insert("bloodType", blood_type.as_str());
    }
    if let Some(district) = &filter.district {
        query.insert("district", district.as_str());
    }
    query
}

/// Registry store backed by MongoDB
pub struct MongoStore {
    connections: ConnectionManager,
}

impl MongoStore {
    pub fn new(connections: ConnectionManager) -> Self {
        Self { connections }
    }

    /// Store for `uri`; connects lazily on the first request.
    pub fn from_uri(uri: Option<String>) -> Self {
        Self::new(ConnectionManager::new(uri))
    }

    async fn donors(&self) -> Result<Collection<DonorDocument>, StoreError> {
        Ok(self.connections.database().await?.collection(DONORS))
    }

    async fn requests(&self) -> Result<Collection<RequestDocument>, StoreError> {
        Ok(self.connections.database().await?.collection(REQUESTS))
    }
}

#[async_trait]
impl RegistryStore for MongoStore {
    fn status(&self) -> StoreStatus {
        if !self.connections.is_configured() {
            StoreStatus::Unconfigured
        } else if self.connections.is_connected() {
            StoreStatus::Connected
        } else {
            StoreStatus::Idle
        }
    }

    async fn ready(&self) -> Result<(), StoreError> {
        self.connections.database().await.map(|_| ())
    }

    async fn insert_donor(&self, donor: NewDonor) -> Result<InsertAck, StoreError> {
        let result = self
            .donors()
            .await?
            .insert_one(DonorDocument::from(donor))
            .await?;
        Ok(InsertAck::new(render_id(result.inserted_id)))
    }

    async fn list_donors(&self, filter: &DonorFilter) -> Result<Vec<Donor>, StoreError> {
        let cursor = self.donors().await?.find(donor_filter(filter)).await?;
        let docs: Vec<DonorDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Donor::from).collect())
    }

    async fn insert_request(&self, request: NewBloodRequest) -> Result<InsertAck, StoreError> {
        let result = self
            .requests()
            .await?
            .insert_one(RequestDocument::from(request))
            .await?;
        Ok(InsertAck::new(render_id(result.inserted_id)))
    }

    async fn list_requests(&self) -> Result<Vec<BloodRequest>, StoreError> {
        let cursor = self
            .requests()
            .await?
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await?;
        let docs: Vec<RequestDocument> = cursor.try_collect().await?;
        docs.into_iter().map(BloodRequest::try_from).collect()
    }
}
