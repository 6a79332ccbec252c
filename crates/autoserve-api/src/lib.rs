//! # autoserve-api
//!
//! HTTP layer for AutoServe: the axum router, request/response DTOs, the
//! bearer-token extractor, and the mapping from domain errors onto HTTP
//! statuses. No business rules live here; handlers validate wire input
//! and delegate to the services.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
