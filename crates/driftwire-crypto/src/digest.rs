//! Incremental message digests (SHA-1, MD5)
//!
//! A [`DigestSession`] hashes zero or more byte spans and is consumed by
//! [`finalize`](DigestSession::finalize), so a finished session cannot be
//! updated again. The [`sha1`] and [`md5`] helpers hash an ordered sequence
//! of disjoint buffers in one call without copying them into a contiguous
//! allocation.

use digest::{Digest, Output};
use md5::Md5;
use sha1::Sha1;

/// SHA-1 digest length in bytes
pub const SHA1_DIGEST_LEN: usize = 20;

/// MD5 digest length in bytes
pub const MD5_DIGEST_LEN: usize = 16;

/// Incremental digest over zero or more byte spans.
///
/// Lifecycle is `new -> update* -> finalize`; `finalize` takes the session
/// by value, so the one-shot finalize discipline is enforced by the type
/// system rather than by a runtime flag.
pub struct DigestSession<D: Digest> {
    hasher: D,
}

/// SHA-1 digest session
pub type Sha1Session = DigestSession<Sha1>;

/// MD5 digest session
pub type Md5Session = DigestSession<Md5>;

impl<D: Digest> DigestSession<D> {
    /// Start a new digest session.
    pub fn new() -> Self {
        Self { hasher: D::new() }
    }

    /// Feed one span of bytes into the digest.
    ///
    /// A zero-length span is a no-op.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.hasher.update(data);
    }

    /// Consume the session and produce the digest.
    pub fn finalize(self) -> Output<D> {
        self.hasher.finalize()
    }
}

impl<D: Digest> Default for DigestSession<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// SHA-1 over an ordered sequence of byte spans.
///
/// Equivalent to hashing the concatenation of the spans, without building it.
pub fn sha1(spans: &[&[u8]]) -> [u8; SHA1_DIGEST_LEN] {
    digest_spans::<Sha1>(spans).into()
}

/// MD5 over an ordered sequence of byte spans.
pub fn md5(spans: &[&[u8]]) -> [u8; MD5_DIGEST_LEN] {
    digest_spans::<Md5>(spans).into()
}

fn digest_spans<D: Digest>(spans: &[&[u8]]) -> Output<D> {
    let mut session = DigestSession::<D>::new();
    for span in spans {
        session.update(span);
    }
    session.finalize()
}
