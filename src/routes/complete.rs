use super::preflight_or;
use axum::http::{Method, StatusCode};
use axum::response::Response;

pub const NOT_IMPLEMENTED_MESSAGE: &str = "Not implemented yet";

/// Completion endpoint placeholder.
///
/// The request body, query and headers are never read.
#[tracing::instrument(name = "Completion requested", skip_all, fields(method = %method))]
pub async fn complete(method: Method) -> Response {
    preflight_or(&method, (StatusCode::NOT_IMPLEMENTED, NOT_IMPLEMENTED_MESSAGE))
}
