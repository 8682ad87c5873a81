//! Byte-level embedding for Veiltext.
//!
//! This module implements the invisible byte channel:
//! - encode: visible text + bytes -> single combined string
//! - decode: combined string -> visible text + bytes
//!
//! The payload travels as non-printable code points appended after a fixed
//! marker. Encoding never fails; decoding fails only when the marker is
//! absent or a post-marker code point falls outside the payload alphabet.

use thiserror::Error;

use crate::{MARKER, PAYLOAD_BASE};

/// Errors that can occur while recovering an embedded payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input does not contain the marker sequence.
    #[error("No embedded marker found; data may be corrupted or not encoded")]
    MarkerNotFound,

    /// A code point after the marker is outside `U+E0000..=U+E00FF`.
    #[error("Code point U+{0:04X} after the marker is outside the payload range")]
    CodePointOutOfRange(u32),
}

/// Embeds byte data invisibly into a text, preserving the original text.
///
/// The result is `text`, followed by the marker, followed by one code point
/// per payload byte (`PAYLOAD_BASE + byte`). Pure function; always succeeds,
/// including for an empty payload.
///
/// `text` must not already contain the marker. No escaping is performed: if
/// the marker is present, [`decode`] attaches to its FIRST occurrence and
/// everything after it is treated as payload. Use [`contains_marker`] to
/// check a text up front.
pub fn encode(text: &str, data: &[u8]) -> String {
    // Payload characters are 4 bytes each in UTF-8.
    let mut combined = String::with_capacity(text.len() + MARKER.len() + data.len() * 4);
    combined.push_str(text);
    combined.push_str(MARKER);

    for &byte in data {
        let ch = char::from_u32(PAYLOAD_BASE + byte as u32)
            .expect("payload alphabet is valid scalar values");
        combined.push(ch);
    }

    combined
}

/// Extracts the hidden byte data from a combined string.
///
/// Locates the first occurrence of the marker; the prefix before it is
/// returned as the visible text and every code point after it is mapped back
/// to a byte (`code_point - PAYLOAD_BASE`).
///
/// A marker at the very end of the string yields an empty payload, not an
/// error.
///
/// # Errors
///
/// [`FormatError::MarkerNotFound`] if the marker does not occur in the input,
/// [`FormatError::CodePointOutOfRange`] if a character after the marker is
/// not part of the payload alphabet.
pub fn decode(encoded: &str) -> Result<(String, Vec<u8>), FormatError> {
    let marker_start = encoded.find(MARKER).ok_or(FormatError::MarkerNotFound)?;
    let body = &encoded[marker_start + MARKER.len()..];

    let mut data = Vec::with_capacity(body.chars().count());
    for ch in body.chars() {
        // Wraps below PAYLOAD_BASE, so any character outside the alphabet
        // lands above u8::MAX.
        let value = (ch as u32).wrapping_sub(PAYLOAD_BASE);
        if value > u8::MAX as u32 {
            return Err(FormatError::CodePointOutOfRange(ch as u32));
        }
        data.push(value as u8);
    }

    Ok((encoded[..marker_start].to_string(), data))
}

/// Returns true if `text` already contains the marker sequence.
///
/// Such a text still encodes, but does not round-trip: [`decode`] attaches
/// to the first marker occurrence, so the original payload boundary is lost.
pub fn contains_marker(text: &str) -> bool {
    text.contains(MARKER)
}
