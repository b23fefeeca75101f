//! Salted one-way credential tokens
//!
//! A token packs a sentinel byte, the lowercase-hex SHA-1 of
//! `plaintext || salt`, and the raw salt: `'{' || hex(20-byte digest) ||
//! salt`. The sentinel lets callers that store plaintext and hashed
//! credentials in the same field tell them apart. The salt bytes are drawn
//! from the printable 64-character alphabet below, so the whole token is
//! printable ASCII.

use crate::digest::{SHA1_DIGEST_LEN, sha1};
use crate::error::CryptoError;
use crate::random;

/// Marks a token as a hash rather than stored plaintext.
const SENTINEL: u8 = b'{';

/// Salt length drawn for new tokens. Verification derives the salt length
/// from the token instead, so longer salts from future configurations
/// remain checkable.
const SALT_LEN: usize = 8;

/// Printable alphabet each salt byte is reduced into.
const SALTER: &[u8; 64] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ./";

/// Shortest token worth examining: sentinel plus the full hex digest.
///
/// The original C implementation checked `len < 2 * digest_len - 1`, which
/// under-counts the sentinel and would let a truncated token through to the
/// salt-extraction arithmetic. The bound here covers the whole fixed region.
const MIN_TOKEN_LEN: usize = 1 + 2 * SHA1_DIGEST_LEN;

/// Hash `plain_text` into a self-describing salted token.
///
/// # Errors
///
/// `PrimitiveFailure` if the strong random source cannot produce the salt.
pub fn salted_sha1(plain_text: &str) -> Result<String, CryptoError> {
    let mut salt = [0u8; SALT_LEN];
    random::fill_buffer(&mut salt)?;
    for byte in &mut salt {
        *byte = SALTER[*byte as usize % SALTER.len()];
    }

    let token = build_token(plain_text.as_bytes(), &salt);
    let Ok(token) = String::from_utf8(token) else {
        unreachable!("sentinel, hex digest, and salter alphabet are all ASCII");
    };
    Ok(token)
}

/// Check `plain_text` against a token produced by [`salted_sha1`].
///
/// Fails closed: any token too short to contain the sentinel and hex digest
/// is rejected without further processing.
pub fn salted_sha1_matches(token: &str, plain_text: &str) -> bool {
    let token = token.as_bytes();
    if token.len() < MIN_TOKEN_LEN {
        return false;
    }

    // Everything past the fixed sentinel+hex region is salt
    let salt = &token[MIN_TOKEN_LEN..];
    let candidate = build_token(plain_text.as_bytes(), salt);

    candidate == token
}

/// Assemble the token byte layout: sentinel, hex digest, raw salt bytes.
///
/// Byte-level on purpose: salt bytes are appended verbatim, never re-encoded,
/// so the layout holds for any salt a token might carry.
fn build_token(plain_text: &[u8], salt: &[u8]) -> Vec<u8> {
    let digest = sha1(&[plain_text, salt]);

    let mut token = Vec::with_capacity(MIN_TOKEN_LEN + salt.len());
    token.push(SENTINEL);
    token.extend_from_slice(hex::encode(digest).as_bytes());
    token.extend_from_slice(salt);
    token
}

#[cfg(test)]
mod tests {
    use proptest::proptest;

    use super::*;

    #[test]
    fn token_round_trips() {
        let token = salted_sha1("correct horse battery staple").unwrap();
        assert!(salted_sha1_matches(&token, "correct horse battery staple"));
    }

    #[test]
    fn wrong_plaintext_is_rejected() {
        let token = salted_sha1("hunter2").unwrap();
        assert!(!salted_sha1_matches(&token, "hunter2x"));
        assert!(!salted_sha1_matches(&token, "hunter"));
        assert!(!salted_sha1_matches(&token, ""));
    }

    #[test]
    fn token_layout() {
        let token = salted_sha1("secret").unwrap();
        let bytes = token.as_bytes();

        assert_eq!(bytes[0], b'{');
        assert_eq!(bytes.len(), 1 + 2 * SHA1_DIGEST_LEN + SALT_LEN);
        assert!(
            bytes[1..=2 * SHA1_DIGEST_LEN]
                .iter()
                .all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase())
        );
        assert!(bytes[MIN_TOKEN_LEN..].iter().all(|b| SALTER.contains(b)));
    }

    #[test]
    fn under_length_tokens_fail_closed() {
        assert!(!salted_sha1_matches("", "secret"));
        assert!(!salted_sha1_matches("{", "secret"));
        assert!(!salted_sha1_matches("not a token", "secret"));

        // Exact boundary: fixed region minus one byte
        let short = "{".repeat(MIN_TOKEN_LEN - 1);
        assert!(!salted_sha1_matches(&short, "secret"));
    }

    fn build_token_str(plain_text: &[u8], salt: &[u8]) -> String {
        String::from_utf8(build_token(plain_text, salt)).unwrap()
    }

    #[test]
    fn empty_salt_token_at_minimum_length() {
        // A token with no salt is degenerate but well-formed; the digest is
        // then over the bare plaintext
        let token = build_token_str(b"secret", &[]);
        assert_eq!(token.len(), MIN_TOKEN_LEN);
        assert!(salted_sha1_matches(&token, "secret"));
        assert!(!salted_sha1_matches(&token, "other"));
    }

    #[test]
    fn variable_salt_lengths_verify() {
        for salt in [&b"ab"[..], b"abcd", b"0123456789abcdef"] {
            let token = build_token_str(b"passphrase", salt);
            assert!(salted_sha1_matches(&token, "passphrase"));
            assert!(!salted_sha1_matches(&token, "passphrasE"));
        }
    }

    #[test]
    fn token_layout_is_byte_exact_for_any_salt() {
        // Salt bytes land in the token verbatim, one byte each, even above
        // the ASCII range; re-encoding would widen 0xE9 to two bytes
        let token = build_token(b"secret", &[0xE9, 0x00, 0xFF]);
        assert_eq!(token.len(), MIN_TOKEN_LEN + 3);
        assert_eq!(&token[MIN_TOKEN_LEN..], &[0xE9, 0x00, 0xFF]);
    }

    #[test]
    fn multibyte_salt_chars_verify_against_their_bytes() {
        // A token carrying non-ASCII salt must verify against exactly the
        // bytes it carries
        let token = build_token_str("secret".as_bytes(), "\u{00e9}!".as_bytes());
        assert!(salted_sha1_matches(&token, "secret"));
        assert!(!salted_sha1_matches(&token, "Secret"));
    }

    #[test]
    fn tampered_digest_is_rejected() {
        let token = salted_sha1("secret").unwrap();
        let mut tampered = token.into_bytes();
        tampered[1] = if tampered[1] == b'0' { b'1' } else { b'0' };
        let tampered = String::from_utf8(tampered).unwrap();
        assert!(!salted_sha1_matches(&tampered, "secret"));
    }

    #[test]
    fn tokens_for_same_plaintext_differ() {
        // Fresh salts make tokens unique; collision needs 64^-8 odds
        let one = salted_sha1("same input").unwrap();
        let two = salted_sha1("same input").unwrap();
        assert_ne!(one, two);
        assert!(salted_sha1_matches(&one, "same input"));
        assert!(salted_sha1_matches(&two, "same input"));
    }

    #[test]
    fn non_ascii_token_does_not_panic() {
        assert!(!salted_sha1_matches("{\u{00e9}\u{00e9}\u{00e9}", "secret"));
        let long_utf8 = "\u{00e9}".repeat(MIN_TOKEN_LEN);
        assert!(!salted_sha1_matches(&long_utf8, "secret"));
    }

    proptest! {
        #[test]
        fn arbitrary_plaintexts_round_trip(plain in ".*") {
            let token = salted_sha1(&plain).unwrap();
            assert!(token.starts_with('{'));
            assert!(salted_sha1_matches(&token, &plain));

            let mut altered = plain.clone();
            altered.push('x');
            assert!(!salted_sha1_matches(&token, &altered));
        }
    }
}
