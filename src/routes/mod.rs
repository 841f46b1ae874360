mod complete;
pub mod cors;
mod health_check;

pub use complete::*;
pub use health_check::*;

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};

/// Answer CORS preflight requests with an empty `200`, anything else with `response`.
pub fn preflight_or(method: &Method, response: impl IntoResponse) -> Response {
    if *method == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        response.into_response()
    }
}
