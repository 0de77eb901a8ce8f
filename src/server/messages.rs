//! Request and response bodies for the HTTP API.
//!
//! The same types are used for JSON and bincode bodies. Values are base64
//! strings in both encodings.

use serde::{Deserialize, Serialize};

use crate::types::{Key, Record};

/// Body of `POST /`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppendRequest {
    #[serde(default)]
    pub record: Record,
}

/// Reply to `POST /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppendResponse {
    pub key: Key,
}

/// Body of `GET /` for a point lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRequest {
    #[serde(default)]
    pub key: Key,
}

/// Reply to a point lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetResponse {
    pub record: Record,
}

/// Reply to `GET /` with no body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub records: Vec<Record>,
}
