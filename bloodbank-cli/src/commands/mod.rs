//! Command implementations for the bloodbank CLI

pub mod serve;

pub use serve::run_serve;
