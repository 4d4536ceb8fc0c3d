pub mod analysis;
pub mod health;
pub mod metrics;

pub use analysis::analyze;
pub use health::{health_check, readiness_check};
pub use metrics::metrics;
