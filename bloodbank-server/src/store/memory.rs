//! In-memory registry store
//!
//! Used by tests and by `bloodbank serve --in-memory`. Data is lost when
//! the process exits. Identities are fresh ObjectId hex strings so clients
//! see the same shape as with MongoDB.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{RegistryStore, StoreError, StoreStatus};
use crate::models::{BloodRequest, Donor, DonorFilter, InsertAck, NewBloodRequest, NewDonor};

#[derive(Default)]
pub struct MemoryStore {
    donors: RwLock<Vec<Donor>>,
    requests: RwLock<Vec<BloodRequest>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn donor_count(&self) -> usize {
        self.donors.read().await.len()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }
}

#[async_trait]
impl RegistryStore for MemoryStore {
    fn status(&self) -> StoreStatus {
        StoreStatus::Connected
    }

    async fn ready(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn insert_donor(&self, donor: NewDonor) -> Result<InsertAck, StoreError> {
        let id = ObjectId::new().to_hex();
        self.donors.write().await.push(donor.with_id(id.clone()));
        Ok(InsertAck::new(id))
    }

    async fn list_donors(&self, filter: &DonorFilter) -> Result<Vec<Donor>, StoreError> {
        let donors = self.donors.read().await;
        Ok(donors.iter().filter(|d| filter.matches(d)).cloned().collect())
    }

    async fn insert_request(&self, request: NewBloodRequest) -> Result<InsertAck, StoreError> {
        let id = ObjectId::new().to_hex();
        self.requests.write().await.push(request.with_id(id.clone()));
        Ok(InsertAck::new(id))
    }

    async fn list_requests(&self) -> Result<Vec<BloodRequest>, StoreError> {
        // Newest insert first, so equal timestamps also come out most recent first.
        let mut requests: Vec<_> = self.requests.read().await.iter().rev().cloned().collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }
}
