use crate::error::RelayError;
use crate::models::Upload;
use crate::AppState;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use metrics::counter;
use service_core::observability::extract_request_id;

/// `POST /api/analyze`: relay the `file` part to the analysis service.
///
/// Success passes the analysis service's status and result through; any
/// failure is an empty 400 (see [`RelayError`]).
pub async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, RelayError> {
    let multipart = multipart.map_err(|e| RelayError::Multipart(e.to_string()))?;
    let upload = Upload::from_multipart(multipart).await?;
    let request_id = extract_request_id(&headers);

    tracing::info!(
        file_name = upload.file_name.as_deref().unwrap_or("-"),
        size = upload.size(),
        downstream = %state.analysis_client.base_url(),
        "Relaying upload to analysis service"
    );

    let relayed = state
        .analysis_client
        .analyze(upload, request_id.as_deref())
        .await?;

    counter!("analysis_relay_requests_total", "outcome" => "success").increment(1);

    Ok(match relayed.result {
        Some(result) => {
            tracing::info!(
                document = result.document.as_deref().unwrap_or("-"),
                issues = result.issues().len(),
                "Analysis completed"
            );
            (relayed.status, Json(result)).into_response()
        }
        None => relayed.status.into_response(),
    })
}
