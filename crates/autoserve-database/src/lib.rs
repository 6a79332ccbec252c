//! # autoserve-database
//!
//! Persistence layer for AutoServe. Defines the backend-neutral store
//! traits, the PostgreSQL implementation used in production, and an
//! in-memory implementation used by the test suite. [`StoreManager`]
//! selects between them from configuration.

pub mod backend;
pub mod connection;
pub mod migration;
pub mod stores;

pub use backend::StoreManager;
pub use connection::DatabasePool;
pub use stores::{BookingStore, UserStore};
