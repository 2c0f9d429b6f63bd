use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

use crate::error::ApiError;

/// Build a JSON response with the permissive CORS header every handler carries.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(serde_json::to_string(value)?.into())
        .map_err(Box::new)?)
}

/// Map a domain error onto its HTTP shape: `{"error": "..."}` with the matching status.
pub fn error_response(err: &ApiError) -> Result<Response<Body>, Error> {
    if let ApiError::BackendUnavailable(_) = err {
        tracing::error!("Backend failure surfaced to caller: {}", err);
    }
    json_response(err.status(), &serde_json::json!({ "error": err.to_string() }))
}
