//! Diffie-Hellman key exchange over caller-supplied group parameters
//!
//! The exponentiation naturally yields variable-width integers; both the
//! public key and the shared secret are returned as exactly
//! [`key_size`](DhExchange::key_size) bytes, right-aligned and zero-padded,
//! so both sides of an exchange always trade fixed-width values.

use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::Zeroize;

use crate::error::CryptoError;
use crate::random;

/// One side of a Diffie-Hellman exchange.
///
/// Holds the group parameters and, after [`generate_key`](Self::generate_key),
/// the private/public key pair. Not for concurrent use; a context computes
/// one agreement at a time (repeatable with different peers).
pub struct DhExchange {
    prime: BigUint,
    generator: BigUint,
    private_key: Option<BigUint>,
}

impl DhExchange {
    /// Build an exchange context from big-endian unsigned modulus and
    /// generator bytes.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` if either value is empty or zero.
    pub fn new(prime: &[u8], generator: &[u8]) -> Result<Self, CryptoError> {
        let prime = parse_positive(prime, "prime is empty or zero")?;
        let generator = parse_positive(generator, "generator is empty or zero")?;
        Ok(Self { prime, generator, private_key: None })
    }

    /// Byte length of the modulus; the width of every public key and shared
    /// secret this context produces.
    ///
    /// Derived from the modulus's bit length, so leading zero bytes in the
    /// caller's encoding do not widen it.
    pub fn key_size(&self) -> usize {
        self.prime.bits().div_ceil(8) as usize
    }

    /// Generate a key pair with a `8 * private_key_length`-bit private
    /// exponent and return the public key, right-aligned and zero-padded to
    /// exactly [`key_size`](Self::key_size) bytes.
    ///
    /// Calling again replaces the previous key pair.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` if `private_key_length` is zero;
    /// `PrimitiveFailure` if the entropy source cannot produce the exponent.
    pub fn generate_key(&mut self, private_key_length: usize) -> Result<Vec<u8>, CryptoError> {
        if private_key_length == 0 {
            return Err(CryptoError::InvalidParameters { reason: "private key length is zero" });
        }

        let mut raw = vec![0u8; private_key_length];
        let private_key = loop {
            random::fill_buffer(&mut raw)?;
            let candidate = BigUint::from_bytes_be(&raw);
            // An all-zero exponent would make the key pair trivial; redraw
            if !candidate.is_zero() {
                break candidate;
            }
        };
        raw.zeroize();

        let public_key = self.generator.modpow(&private_key, &self.prime);
        self.private_key = Some(private_key);

        Ok(self.aligned(&public_key))
    }

    /// Compute the shared secret with a peer's public key (big-endian
    /// unsigned bytes).
    ///
    /// The secret is exactly [`key_size`](Self::key_size) bytes with the
    /// same right-alignment invariant as the public key, and is wiped when
    /// dropped. No partial secret is returned on any failure.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` if the peer key is empty or zero, or if
    /// [`generate_key`](Self::generate_key) has not been called.
    pub fn agree(&self, peer_public_key: &[u8]) -> Result<DhSecret, CryptoError> {
        let peer = parse_positive(peer_public_key, "peer public key is empty or zero")?;
        let private_key = self
            .private_key
            .as_ref()
            .ok_or(CryptoError::InvalidParameters { reason: "key pair not generated" })?;

        let shared = peer.modpow(private_key, &self.prime);
        Ok(DhSecret { bytes: self.aligned(&shared) })
    }

    /// Render a value reduced mod the prime as a fixed-width buffer.
    fn aligned(&self, value: &BigUint) -> Vec<u8> {
        let raw = value.to_bytes_be();
        let mut buffer = vec![0u8; self.key_size()];
        // value < prime, so raw never exceeds key_size
        buffer[..raw.len()].copy_from_slice(&raw);
        align_key(&mut buffer, raw.len());
        buffer
    }
}

/// Right-align the `significant_len` leading bytes of `buffer` and zero-fill
/// the vacated prefix.
///
/// The exponentiation can produce integers shorter than the modulus width
/// (with exponentially decreasing probability); shifting toward the end
/// preserves the big-endian numeric value, which left-alignment would not.
fn align_key(buffer: &mut [u8], significant_len: usize) {
    debug_assert!(significant_len <= buffer.len());

    if significant_len < buffer.len() {
        let offset = buffer.len() - significant_len;
        buffer.copy_within(..significant_len, offset);
        buffer[..offset].fill(0);
    }
}

/// Shared secret from a completed agreement.
///
/// Exactly [`DhExchange::key_size`] bytes; sensitive key material, zeroized
/// on drop.
pub struct DhSecret {
    bytes: Vec<u8>,
}

impl DhSecret {
    /// The secret bytes, right-aligned and zero-padded to the modulus width.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the secret in bytes (always the modulus width).
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the secret is empty (never true for a completed agreement).
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Drop for DhSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

fn parse_positive(bytes: &[u8], reason: &'static str) -> Result<BigUint, CryptoError> {
    if bytes.is_empty() {
        return Err(CryptoError::InvalidParameters { reason });
    }
    let value = BigUint::from_bytes_be(bytes);
    if value.is_zero() {
        return Err(CryptoError::InvalidParameters { reason });
    }
    Ok(value)
}
