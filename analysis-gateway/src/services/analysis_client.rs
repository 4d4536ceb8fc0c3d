//! Client for the NLP analysis service.
//!
//! Re-packages an upload as a fresh multipart request, posts it to
//! `{base}/analyze` and reads the reply back as an [`AnalysisResult`].

use crate::config::AnalysisServiceSettings;
use crate::dtos::AnalysisResult;
use crate::error::RelayError;
use crate::models::upload::{Upload, FILE_FIELD};
use axum::http::StatusCode;
use metrics::histogram;
use reqwest::{multipart::Form, Client};
use service_core::error::AppError;
use service_core::observability::TracedClientExt;
use std::time::Instant;

/// A successful analysis call: the analysis service's status and its decoded
/// body. `result` is `None` when the service answered 2xx without a body.
#[derive(Debug)]
pub struct Relayed {
    pub status: StatusCode,
    pub result: Option<AnalysisResult>,
}

pub struct AnalysisClient {
    client: Client,
    settings: AnalysisServiceSettings,
}

impl AnalysisClient {
    pub fn new(settings: AnalysisServiceSettings) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .connect_timeout(settings.connect_timeout())
            .build()
            .map_err(|e| {
                AppError::InternalError(anyhow::anyhow!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, settings })
    }

    pub fn base_url(&self) -> &str {
        &self.settings.url
    }

    /// Relay one upload to the analysis service.
    ///
    /// Non-2xx replies are errors; their bodies are never read.
    pub async fn analyze(
        &self,
        upload: Upload,
        request_id: Option<&str>,
    ) -> Result<Relayed, RelayError> {
        let start = Instant::now();
        let result = self.send(upload, request_id).await;
        histogram!("analysis_relay_duration_seconds").record(start.elapsed().as_secs_f64());
        result
    }

    async fn send(&self, upload: Upload, request_id: Option<&str>) -> Result<Relayed, RelayError> {
        let url = self.settings.analyze_url();
        // Filenames go out as raw UTF-8, not as an RFC 2231 `filename*`.
        let form = Form::new()
            .percent_encode_noop()
            .part(FILE_FIELD, upload.into_part()?);

        let response = self
            .client
            .traced_post(&url)
            .multipart(form)
            .send_with_request_id(request_id)
            .await
            .map_err(RelayError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::DownstreamStatus(status));
        }

        let body = response.bytes().await.map_err(RelayError::Transport)?;
        if body.is_empty() {
            return Ok(Relayed {
                status,
                result: None,
            });
        }

        let result = serde_json::from_slice::<AnalysisResult>(&body)?
            .with_default_severity(self.settings.default_severity.as_deref());

        tracing::debug!(
            document = result.document.as_deref().unwrap_or("-"),
            issues = result.issues().len(),
            "Analysis service returned result"
        );

        Ok(Relayed {
            status,
            result: Some(result),
        })
    }

    /// Whether the analysis service answers its health check.
    pub async fn probe(&self) -> bool {
        match self
            .client
            .traced_get(&self.settings.health_url())
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!(error = %e, "Analysis service health probe failed");
                false
            }
        }
    }
}
