//! DNS over HTTPS (RFC 8484), POST form only.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use orbital_dns_infrastructure::dns::WireCodec;
use tracing::{debug, warn};

pub const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

pub async fn dns_query(State(state): State<AppState>, body: Bytes) -> Response {
    let query = match WireCodec::decode_query(&body) {
        Ok(query) => query,
        Err(e) => {
            warn!(len = body.len(), error = %e, "Malformed DoH query");
            return (
                StatusCode::BAD_REQUEST,
                format!("Invalid DNS-DoH request: {}", e),
            )
                .into_response();
        }
    };

    debug!(id = query.id, questions = query.questions.len(), "DoH query received");

    let response = state.resolve_query.execute(&query).await;

    match WireCodec::encode_response(&response) {
        Ok(reply) => (
            [(header::CONTENT_TYPE, DNS_MESSAGE_CONTENT_TYPE)],
            reply,
        )
            .into_response(),
        Err(e) => {
            warn!(id = query.id, error = %e, "Failed to encode DoH response");
            (
                StatusCode::BAD_REQUEST,
                format!("Failed to pack DNS-DoH response: {}", e),
            )
                .into_response()
        }
    }
}

pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Only POST allowed for DoH")
}
