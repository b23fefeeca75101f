//! Base-64 helpers
//!
//! Thin pass-through over the `base64` crate's standard alphabet, kept here
//! so callers deal with one codec surface for both textual encodings.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::CryptoError;

/// Encode bytes as standard base-64 with padding.
///
/// Empty input yields an empty string.
pub fn encode(input: &[u8]) -> String {
    STANDARD.encode(input)
}

/// Decode standard base-64.
///
/// # Errors
///
/// `InvalidParameters` if the input is not valid base-64.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, CryptoError> {
    STANDARD
        .decode(input)
        .map_err(|_| CryptoError::InvalidParameters { reason: "malformed base-64 input" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_known_answer() {
        assert_eq!(encode(b"hello"), "aGVsbG8=");
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn decode_round_trips() {
        let input: Vec<u8> = (0..=255u8).collect();
        assert_eq!(decode(encode(&input).as_bytes()).unwrap(), input);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode(b"not!base64").is_err());
    }
}
