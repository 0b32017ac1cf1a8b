use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/dns-query",
            post(handlers::doh::dns_query).fallback(handlers::doh::method_not_allowed),
        )
        .route(
            "/zones",
            post(handlers::zones::add_record).fallback(handlers::zones::method_not_allowed),
        )
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
