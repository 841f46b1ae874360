use super::preflight_or;
use axum::http::{Method, StatusCode};
use axum::response::Response;

/// Health check endpoint
///
/// Returns 200 OK with a plain-text `OK` body if the service is running.
/// Accepts any method; `OPTIONS` gets an empty body.
#[tracing::instrument(name = "Health check", skip_all, fields(method = %method))]
pub async fn health_check(method: Method) -> Response {
    preflight_or(&method, (StatusCode::OK, "OK"))
}
