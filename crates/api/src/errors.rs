use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use orbital_dns_domain::DomainError;
use tracing::error;

/// Plain-text error responses. Caller mistakes are 400, everything else 500.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    BadRequest(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::Domain(err) if err.is_client_error() => {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            ApiError::Domain(err) => {
                error!(error = %err, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
