//! HTTP response encoding for the log server.

use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::error::ApiError;

/// Content type for JSON bodies.
pub(super) const CONTENT_TYPE_JSON: &str = "application/json";

/// Content type for bincode bodies.
pub(super) const CONTENT_TYPE_BINCODE: &str = "application/x-bincode";

/// Body encoding used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    Json,
    Bincode,
}

impl WireFormat {
    /// Determine the reply format from the `Accept` header. JSON unless
    /// the client explicitly asks for bincode.
    pub fn from_accept(headers: &HeaderMap) -> Self {
        let wants_bincode = headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains(CONTENT_TYPE_BINCODE))
            .unwrap_or(false);

        if wants_bincode {
            WireFormat::Bincode
        } else {
            WireFormat::Json
        }
    }

    /// The `Content-Type` value for this format.
    pub fn content_type(self) -> &'static str {
        match self {
            WireFormat::Json => CONTENT_TYPE_JSON,
            WireFormat::Bincode => CONTENT_TYPE_BINCODE,
        }
    }
}

/// An encoded, successful reply.
#[derive(Debug)]
pub struct ApiResponse {
    format: WireFormat,
    body: Vec<u8>,
}

impl ApiResponse {
    /// Encode `message` in the requested format.
    pub fn encode<T: Serialize>(message: &T, format: WireFormat) -> Result<Self, ApiError> {
        let body = match format {
            WireFormat::Json => {
                serde_json::to_vec(message).map_err(|e| ApiError::Encoding(e.to_string()))?
            }
            WireFormat::Bincode => {
                bincode::serialize(message).map_err(|e| ApiError::Encoding(e.to_string()))?
            }
        };
        Ok(Self { format, body })
    }

    #[cfg(test)]
    fn format(&self) -> WireFormat {
        self.format
    }

    #[cfg(test)]
    fn body(&self) -> &[u8] {
        &self.body
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, self.format.content_type())],
            self.body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use bytes::Bytes;

    use super::super::messages::{AppendResponse, GetResponse};
    use super::*;
    use crate::types::Record;

    #[test]
    fn test_default_format_is_json() {
        assert_eq!(WireFormat::from_accept(&HeaderMap::new()), WireFormat::Json);
    }

    #[test]
    fn test_accept_bincode() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/x-bincode"),
        );
        assert_eq!(WireFormat::from_accept(&headers), WireFormat::Bincode);
    }

    #[test]
    fn test_encode_json() {
        let response = ApiResponse::encode(&AppendResponse { key: 42 }, WireFormat::Json).unwrap();
        assert_eq!(response.body(), br#"{"key":42}"#);
        assert_eq!(response.format().content_type(), "application/json");
    }

    #[test]
    fn test_encode_bincode() {
        let message = GetResponse {
            record: Record::new(1, Bytes::from_static(b"b")),
        };
        let response = ApiResponse::encode(&message, WireFormat::Bincode).unwrap();
        let decoded: GetResponse = bincode::deserialize(response.body()).unwrap();
        assert_eq!(decoded, message);
    }
}
