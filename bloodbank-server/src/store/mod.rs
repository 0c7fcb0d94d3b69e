//! Persistence port for the registry
//!
//! Handlers only talk to [`RegistryStore`]. The MongoDB adapter is the
//! production implementation; the in-memory one backs tests and local runs.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use serde::Serialize;

use crate::models::{BloodRequest, Donor, DonorFilter, InsertAck, NewBloodRequest, NewDonor};

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Persistence error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("MongoDB connection string is not configured")]
    NotConfigured,

    #[error("failed to connect to MongoDB: {0}")]
    Connect(#[source] mongodb::error::Error),

    #[error("database error: {0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("invalid document in {collection}: {reason}")]
    InvalidDocument {
        collection: &'static str,
        reason: String,
    },
}

/// Connection state reported by `GET /health`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    /// No connection string; every operation fails.
    Unconfigured,
    /// Configured but not connected yet. The next operation connects.
    Idle,
    Connected,
}

/// Storage operations behind the four registry endpoints.
///
/// Each call is a single store operation. No transactions span calls.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Current connection state. Never connects.
    fn status(&self) -> StoreStatus;

    /// Make sure the store is reachable, connecting if needed.
    async fn ready(&self) -> Result<(), StoreError>;

    async fn insert_donor(&self, donor: NewDonor) -> Result<InsertAck, StoreError>;

    /// Donors matching `filter`, in the store's natural order.
    async fn list_donors(&self, filter: &DonorFilter) -> Result<Vec<Donor>, StoreError>;

    async fn insert_request(&self, request: NewBloodRequest) -> Result<InsertAck, StoreError>;

    /// All blood requests, most recent `created_at` first.
    async fn list_requests(&self) -> Result<Vec<BloodRequest>, StoreError>;
}
