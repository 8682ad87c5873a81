//! # Veiltext - hide bytes in plain sight
//!
//! Veiltext embeds arbitrary binary data inside an ordinary string using
//! non-printable Unicode characters. The visible text is followed by a fixed
//! four-character marker and then one code point per payload byte, all drawn
//! from a range that renders as nothing. The combined string displays exactly
//! like the original text, and the payload is recovered losslessly.
//!
//! ## Overview
//!
//! Two layers:
//! - The **byte channel** appends the marker and re-encodes each byte as
//!   `0xE0000 + byte` ([`encode`] / [`decode`]).
//! - The **structured layer** serializes a key-value mapping to CBOR before
//!   embedding it ([`encode_dict`] / [`decode_dict`]).
//!
//! This is obfuscation, not security: the scheme is public, there is no
//! encryption and no tamper detection beyond the presence of the marker.
//!
//! ## Example Usage
//!
//! ```rust
//! use veiltext::{decode, encode};
//!
//! let combined = encode("This is a test", &[0x01, 0x02]);
//!
//! // Renders identically to the visible text
//! assert!(combined.starts_with("This is a test"));
//!
//! let (text, data) = decode(&combined).unwrap();
//! assert_eq!(text, "This is a test");
//! assert_eq!(data, vec![0x01, 0x02]);
//! ```
//!
//! Structured payloads go through CBOR:
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use veiltext::{decode_dict, encode_dict};
//!
//! let mut data = BTreeMap::new();
//! data.insert("key1".to_string(), "value1".to_string());
//!
//! let combined = encode_dict("hello", &data).unwrap();
//! let (text, decoded): (String, Option<BTreeMap<String, String>>) = decode_dict(&combined);
//!
//! assert_eq!(text, "hello");
//! assert_eq!(decoded, Some(data));
//! ```
//!
//! ## Modules
//!
//! - [`channel`]: byte-level embedding (marker search, code-point alphabet)
//! - [`mapping`]: structured payloads (CBOR over the byte channel)

/// Marker separating the visible text from the embedded payload.
///
/// Four characters from the Unicode Tags block. They are default-ignorable
/// and do not render. The marker is constant: every encoder and decoder must
/// use the same sequence for payloads to travel between implementations.
pub const MARKER: &str = "\u{E0042}\u{E0042}\u{E0011}\u{E0011}";

/// Base code point of the payload alphabet.
///
/// Byte `b` is carried by the character `PAYLOAD_BASE + b`, so encoded
/// payloads occupy `U+E0000..=U+E00FF`, one code point per byte.
pub const PAYLOAD_BASE: u32 = 0xE0000;

pub mod channel;
pub mod mapping;

// Re-export commonly used items at the crate root
pub use channel::{contains_marker, decode, encode, FormatError};
pub use mapping::{decode_dict, encode_dict, SerializationError};
