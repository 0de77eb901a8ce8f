//! HTTP request decoding for the log server.

use axum::http::{HeaderMap, header};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::messages::{AppendRequest, GetRequest};
use super::response::{CONTENT_TYPE_BINCODE, WireFormat};

/// Encoding of a request body, chosen from the `Content-Type` header.
/// Anything that is not bincode is read as JSON.
fn body_format(headers: &HeaderMap) -> WireFormat {
    let is_bincode = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains(CONTENT_TYPE_BINCODE))
        .unwrap_or(false);

    if is_bincode {
        WireFormat::Bincode
    } else {
        WireFormat::Json
    }
}

/// JSON bodies are read up to the end of the first value; anything after it is ignored.
fn decode<T: DeserializeOwned>(format: WireFormat, body: &[u8]) -> Result<T, ApiError> {
    match format {
        WireFormat::Json => serde_json::Deserializer::from_slice(body)
            .into_iter::<T>()
            .next()
            .ok_or_else(|| ApiError::InvalidInput("invalid JSON: empty body".to_string()))?
            .map_err(|e| ApiError::InvalidInput(format!("invalid JSON: {}", e))),
        WireFormat::Bincode => bincode::deserialize(body)
            .map_err(|e| ApiError::InvalidInput(format!("invalid bincode: {}", e))),
    }
}

/// Parse the body of `POST /`.
pub fn parse_append(headers: &HeaderMap, body: &[u8]) -> Result<AppendRequest, ApiError> {
    decode(body_format(headers), body)
}

/// Parse the body of `GET /`.
///
/// Returns `None` when the body is empty, which asks for the whole log.
pub fn parse_get(headers: &HeaderMap, body: &[u8]) -> Result<Option<GetRequest>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    decode(body_format(headers), body).map(Some)
}
