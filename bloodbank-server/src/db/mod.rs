//! Database layer - lazy MongoDB connection
//!
//! One client per process, shared by every handler. The driver pools
//! connections internally, so no Arc<Mutex<Client>>.

pub mod connection;

pub use connection::ConnectionManager;
