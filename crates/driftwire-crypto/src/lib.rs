//! Driftwire Cryptographic Utilities
//!
//! The glue layer between the peer protocol and the primitive crates it
//! builds on: message digests, Diffie-Hellman exponentiation, the OS
//! entropy source, and the handshake stream cipher. The primitives come
//! from their respective crates; this layer owns the algorithmic pieces
//! with real invariants:
//!
//! - [`digest`] — incremental SHA-1/MD5 sessions with a consuming,
//!   one-shot finalize, plus multi-span helpers
//! - [`random`] — strong random bytes and bounded integers, with a
//!   lazily-seeded weak fallback generator for availability
//! - [`dh`] — DH key exchange producing fixed-width, right-aligned
//!   public keys and shared secrets
//! - [`salted`] — self-describing salted-SHA-1 credential tokens
//! - [`base32`] / [`base64`] — textual codecs for binary identifiers
//! - [`stream`] — RC4 keystream adapter for the obfuscated handshake
//!
//! # Fixed-width key material
//!
//! DH exponentiation yields integers whose byte length varies; shorter
//! results occur with exponentially decreasing probability as high-order
//! bits happen to be zero. Every public key and shared secret leaving this
//! crate is exactly the modulus width, significant bytes right-aligned and
//! the prefix zero-filled, so both sides of an exchange always trade
//! fixed-width values:
//!
//! ```text
//! raw exponentiation:        [ a7 31 .. 9c ]          (key_size - k short)
//! wire representation:  [ 00 .. 00 a7 31 .. 9c ]      (exactly key_size)
//! ```
//!
//! # Security
//!
//! - Shared secrets are owned buffers zeroized on drop; private-key byte
//!   material is wiped as soon as it is converted
//! - The weak random generator is an availability fallback only; falling
//!   back is logged as a degraded-security condition
//! - Salted tokens fail closed on any under-length input
//! - RC4 is carried for handshake obfuscation compatibility and must not
//!   be treated as a secure cipher
//!
//! # Concurrency
//!
//! Sessions, exchange contexts, and keystreams are single-threaded values;
//! share them across threads behind external synchronization or not at all.
//! The weak generator's seed state is the one process-wide resource, and
//! its initialization is race-safe.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod base32;
pub mod base64;
pub mod dh;
pub mod digest;
pub mod error;
pub mod random;
pub mod salted;
pub mod stream;

pub use crate::dh::{DhExchange, DhSecret};
pub use crate::digest::{
    DigestSession, MD5_DIGEST_LEN, Md5Session, SHA1_DIGEST_LEN, Sha1Session, md5, sha1,
};
pub use crate::error::CryptoError;
pub use crate::random::{fill_buffer, rand_int, weak_rand_int};
pub use crate::salted::{salted_sha1, salted_sha1_matches};
pub use crate::stream::Rc4Stream;
