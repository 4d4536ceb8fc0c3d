pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use services::AnalysisClient;
use std::sync::Arc;

/// Shared application state containing service clients
#[derive(Clone)]
pub struct AppState {
    pub analysis_client: Arc<AnalysisClient>,
}

impl AppState {
    pub fn new(analysis_client: Arc<AnalysisClient>) -> Self {
        Self { analysis_client }
    }
}
