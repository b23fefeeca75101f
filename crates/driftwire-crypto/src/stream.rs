//! RC4 keystream adapter for the obfuscated handshake
//!
//! Thin wrapper over the `rc4` crate, fixed to the digest-sized keys the
//! handshake derives. RC4 is used here for obfuscation compatibility, not
//! confidentiality; nothing in this crate treats it as a secure cipher.

use rc4::{Key, KeyInit, Rc4, StreamCipher, consts::U20};

use crate::digest::SHA1_DIGEST_LEN;

/// An RC4 keystream keyed with a 20-byte (SHA-1 sized) key.
///
/// Encryption and decryption are the same operation; two instances with the
/// same key produce the same keystream.
pub struct Rc4Stream {
    inner: Rc4<U20>,
}

impl Rc4Stream {
    /// Key a fresh keystream.
    pub fn new(key: &[u8; SHA1_DIGEST_LEN]) -> Self {
        Self { inner: Rc4::new(Key::<U20>::from_slice(key)) }
    }

    /// XOR the next keystream bytes into `data` in place, advancing the
    /// stream position. A zero-length slice is a no-op.
    pub fn process(&mut self, data: &mut [u8]) {
        if data.is_empty() {
            return;
        }
        self.inner.apply_keystream(data);
    }

    /// Advance the keystream without producing output.
    ///
    /// The obfuscation handshake discards an initial keystream prefix on
    /// both sides.
    pub fn discard(&mut self, count: usize) {
        let mut sink = [0u8; 64];
        let mut remaining = count;
        while remaining > 0 {
            let chunk = remaining.min(sink.len());
            self.inner.apply_keystream(&mut sink[..chunk]);
            remaining -= chunk;
        }
    }
}
