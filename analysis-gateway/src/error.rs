use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use metrics::counter;
use thiserror::Error;

/// Every way a relay attempt can fail.
///
/// The variants exist for logs and metrics only: on the wire each one is the
/// same bare `400 Bad Request` with an empty body.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Failed to read multipart upload: {0}")]
    Multipart(String),

    #[error("Upload has no `file` part")]
    MissingFile,

    #[error("Failed to build analysis request: {0}")]
    Build(reqwest::Error),

    #[error("Analysis service request failed: {0}")]
    Transport(reqwest::Error),

    #[error("Analysis service responded with {0}")]
    DownstreamStatus(StatusCode),

    #[error("Analysis service returned an unreadable result: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RelayError {
    /// Metric label for this failure.
    pub fn outcome(&self) -> &'static str {
        match self {
            RelayError::Multipart(_) => "invalid_upload",
            RelayError::MissingFile => "missing_file",
            RelayError::Build(_) => "build_error",
            RelayError::Transport(e) if e.is_timeout() => "timeout",
            RelayError::Transport(_) => "transport_error",
            RelayError::DownstreamStatus(_) => "downstream_error",
            RelayError::Decode(_) => "decode_error",
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let outcome = self.outcome();
        tracing::warn!(outcome, error = %self, "Analysis relay failed");
        counter!("analysis_relay_requests_total", "outcome" => outcome).increment(1);

        StatusCode::BAD_REQUEST.into_response()
    }
}
