//! HTTP route handlers for the log server.
//!
//! Bodies are JSON unless the client sends or asks for
//! `application/x-bincode`.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;

use super::error::ApiError;
use super::messages::{AppendResponse, GetResponse, Listing};
use super::request::{parse_append, parse_get};
use super::response::{ApiResponse, WireFormat};
use crate::engine::concurrent::SharedLog;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub log: SharedLog,
}

/// Handle POST /
///
/// Appends the record's value; any key the client sent is discarded.
pub async fn handle_append(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<ApiResponse, ApiError> {
    let format = WireFormat::from_accept(&headers);
    let request = parse_append(&headers, &body)?;

    let key = state.log.append(request.record.value);

    ApiResponse::encode(&AppendResponse { key }, format)
}

/// Handle GET /
///
/// A body of `{"key": n}` reads one record; an empty body lists them all.
pub async fn handle_get(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<ApiResponse, ApiError> {
    let format = WireFormat::from_accept(&headers);

    match parse_get(&headers, &body)? {
        Some(request) => {
            let record = state.log.get(request.key)?;
            log::debug!("read record {}", record.key);
            ApiResponse::encode(&GetResponse { record }, format)
        }
        None => {
            let records = state.log.list();
            log::debug!("listed {} records", records.len());
            ApiResponse::encode(&Listing { records }, format)
        }
    }
}

/// Fallback for any method other than GET and POST on `/`.
pub async fn handle_method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET, POST")],
        "Method Not Allowed\n",
    )
}

/// Handle GET /metrics
pub async fn handle_metrics(State(state): State<AppState>) -> String {
    state.log.metrics().report()
}
