use crate::{dto::AddZoneRecordRequest, errors::ApiError, state::AppState};
use axum::{body::Bytes, extract::State, http::StatusCode};
use tracing::{info, warn};

/// `POST /zones` with `{"domain": ..., "ipv6": ...}`.
///
/// The body is parsed by hand so that every rejection is a plain-text 400,
/// whatever the content type.
pub async fn add_record(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, String), ApiError> {
    let request: AddZoneRecordRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Rejected zone request body");
        ApiError::BadRequest(format!("Invalid JSON body: {}", e))
    })?;

    let (domain, ipv6) = request
        .fields()
        .ok_or_else(|| ApiError::BadRequest("Missing domain or ipv6".to_string()))?;

    state.add_zone_record.execute(domain, ipv6)?;

    info!(domain, ipv6, "Zone record added via API");

    Ok((
        StatusCode::CREATED,
        format!("Record added: {} -> {}", domain, ipv6),
    ))
}

pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Invalid method.")
}
