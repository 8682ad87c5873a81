//! Structured payloads for Veiltext.
//!
//! This module carries key-value data over the byte channel:
//! 1. Serialize the value to CBOR (self-describing, language-agnostic)
//! 2. Embed the resulting bytes with [`channel::encode`]
//!
//! Decoding mirrors the two steps but NEVER returns an error: a string
//! without a marker, or with a payload that is not valid CBOR, comes back as
//! `(text, None)`. Callers treat `None` as "not encoded data" instead of
//! handling failures.

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::channel;

/// Errors that can occur while serializing a structured payload.
#[derive(Error, Debug)]
pub enum SerializationError {
    /// The value cannot be represented in CBOR.
    #[error("CBOR encoding failed: {0}")]
    Encode(#[from] ciborium::ser::Error<std::io::Error>),

    /// The embedded bytes are not a well-formed CBOR document.
    #[error("CBOR decoding failed: {0}")]
    Decode(#[from] ciborium::de::Error<std::io::Error>),
}

/// Embeds structured data invisibly into a text, preserving the original
/// text.
///
/// `data` is serialized to CBOR and handed to [`channel::encode`]. Any serde
/// value representable in CBOR works: scalars, sequences, byte strings and
/// nested maps. Key order of the serialized mapping follows the value's own
/// iteration order.
///
/// The marker-in-text constraint of [`channel::encode`] applies unchanged.
///
/// # Errors
///
/// [`SerializationError`] if the value cannot be serialized. Encoding never
/// recovers; the error is always propagated.
pub fn encode_dict<T: Serialize>(text: &str, data: &T) -> Result<String, SerializationError> {
    let mut payload = Vec::new();
    ciborium::ser::into_writer(data, &mut payload)?;

    Ok(channel::encode(text, &payload))
}

/// Extracts and deserializes the hidden structured data from a string.
///
/// This function never fails. If the marker is missing the input is returned
/// verbatim with `None`; if the marker is present but the payload does not
/// deserialize (truncated, corrupted, wrong format), the visible text before
/// the marker is returned with `None`. The mapping is either recovered in
/// full or not at all.
pub fn decode_dict<T: DeserializeOwned>(encoded: &str) -> (String, Option<T>) {
    let (text, payload) = match channel::decode(encoded) {
        Ok(recovered) => recovered,
        Err(err) => {
            debug!("no embedded payload recovered: {}", err);
            return (encoded.to_string(), None);
        }
    };

    match deserialize_payload(&payload) {
        Ok(data) => (text, Some(data)),
        Err(err) => {
            debug!("embedded payload is not a CBOR document: {}", err);
            (text, None)
        }
    }
}

/// Deserializes a recovered payload as a single CBOR document.
fn deserialize_payload<T: DeserializeOwned>(payload: &[u8]) -> Result<T, SerializationError> {
    Ok(ciborium::de::from_reader(payload)?)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::Deserialize;

    use super::*;
    use crate::MARKER;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Session {
        user: String,
        attempts: u32,
        tags: Vec<String>,
    }

    #[test]
    fn test_struct_roundtrip() {
        let session = Session {
            user: "amanda".to_string(),
            attempts: 3,
            tags: vec!["a".to_string(), "b".to_string()],
        };

        let combined = encode_dict("greeting", &session).unwrap();
        let (text, decoded): (String, Option<Session>) = decode_dict(&combined);

        assert_eq!(text, "greeting");
        assert_eq!(decoded, Some(session));
    }

    #[test]
    fn test_map_roundtrip() {
        let mut data = BTreeMap::new();
        data.insert("key1".to_string(), "value1".to_string());
        data.insert("key2".to_string(), "value2".to_string());

        let combined = encode_dict("hello", &data).unwrap();
        let (text, decoded): (String, Option<BTreeMap<String, String>>) = decode_dict(&combined);

        assert_eq!(text, "hello");
        assert_eq!(decoded, Some(data));
    }

    #[test]
    fn test_missing_marker_returns_none() {
        let (text, decoded): (String, Option<ciborium::Value>) = decode_dict("plain text");

        assert_eq!(text, "plain text");
        assert!(decoded.is_none());
    }

    #[test]
    fn test_non_cbor_payload_returns_none() {
        // 0xA1 announces a one-pair map and then ends; not a document
        let combined = channel::encode("x", &[0xA1]);
        let (text, decoded): (String, Option<ciborium::Value>) = decode_dict(&combined);

        assert_eq!(text, "x");
        assert!(decoded.is_none());
    }

    #[test]
    fn test_garbled_payload_region_returns_input() {
        // Printable character after the marker: channel-level failure, so
        // the whole input string comes back
        let garbled = format!("hi{}x", MARKER);
        let (text, decoded): (String, Option<ciborium::Value>) = decode_dict(&garbled);

        assert_eq!(text, garbled);
        assert!(decoded.is_none());
    }
}
