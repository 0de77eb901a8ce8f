//! MEMLOG - Core Type Definitions
//! Defines the record stored by the log and its key/value aliases.

use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{base64::Base64, serde_as, DefaultOnNull, DeserializeAs, SerializeAs};

/// Key type for the log.
/// Keys are dense, zero-based positions in the sequence.
pub type Key = u64;

/// Value type for the log.
/// `Bytes` is immutable, so a clone handed to a caller is a snapshot
/// that cannot alias back into the stored sequence.
pub type Value = Bytes;

/// Base64 value encoding that reads JSON `null` as an empty value.
///
/// Only self-describing formats get the `null` fallback; bincode carries
/// no option tag for this field.
pub struct NullableBase64;

impl SerializeAs<Value> for NullableBase64 {
    fn serialize_as<S>(source: &Value, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        <Base64 as SerializeAs<Value>>::serialize_as(source, serializer)
    }
}

impl<'de> DeserializeAs<'de, Value> for NullableBase64 {
    fn deserialize_as<D>(deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            <DefaultOnNull<Base64> as DeserializeAs<'de, Value>>::deserialize_as(deserializer)
        } else {
            <Base64 as DeserializeAs<'de, Value>>::deserialize_as(deserializer)
        }
    }
}

/// A single entry in the log.
///
/// On the wire the value is base64 encoded. A `key` sent by a client is
/// accepted but never trusted; the log assigns its own.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub key: Key,
    #[serde(default)]
    #[serde_as(as = "NullableBase64")]
    pub value: Value,
}

impl Record {
    /// Create a record with an already-assigned key.
    pub fn new(key: Key, value: impl Into<Value>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    /// Size of the value in bytes.
    pub fn size(&self) -> usize {
        self.value.len()
    }
}
