pub mod analysis_client;
pub mod metrics;

pub use analysis_client::{AnalysisClient, Relayed};
pub use metrics::{get_metrics, init_metrics};
