//! service-core: Shared infrastructure for the analysis gateway.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;

pub use axum;
pub use reqwest;
pub use tokio;
pub use tracing;
