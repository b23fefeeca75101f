//! Random byte and bounded-integer source
//!
//! Two tiers: the strong path reads the OS entropy source and fails loudly,
//! and a weak, non-cryptographic fallback generator preserves availability
//! when the strong source cannot produce bytes at all. Persistent use of the
//! fallback is a degraded-security condition; it is logged at `warn` so it
//! shows up in observability rather than in a return code.

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, OnceLock};

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::error::CryptoError;

/// Process-wide weak generator, seeded exactly once from coarse wall-clock
/// time on first use. `OnceLock` gives initialize-once semantics even under
/// concurrent first callers.
static WEAK_RNG: OnceLock<Mutex<SmallRng>> = OnceLock::new();

/// Fill `buffer` with cryptographically strong random bytes.
///
/// On failure the buffer contents are unspecified and must not be consumed.
pub fn fill_buffer(buffer: &mut [u8]) -> Result<(), CryptoError> {
    getrandom::fill(buffer).map_err(|err| {
        tracing::error!(%err, "os random source failed");
        CryptoError::PrimitiveFailure { reason: "os random source" }
    })
}

/// Uniform-ish random integer in `[0, upper_bound)` from the strong source.
///
/// Draws a machine-word signed integer, takes its absolute value, and
/// reduces modulo the bound. A draw of `isize::MIN`, whose absolute value
/// does not fit, is discarded and redrawn. If the strong source itself
/// fails, falls back to [`weak_rand_int`] for this call.
pub fn rand_int(upper_bound: NonZeroUsize) -> usize {
    let mut raw = [0u8; size_of::<isize>()];

    while fill_buffer(&mut raw).is_ok() {
        let noise = isize::from_ne_bytes(raw);
        // abs(isize::MIN) overflows; that draw is rejected, not returned
        if let Some(noise) = noise.checked_abs() {
            return noise as usize % upper_bound.get();
        }
    }

    tracing::warn!("strong random source unavailable, using weak fallback generator");
    weak_rand_int(upper_bound)
}

/// Random integer in `[0, upper_bound)` from the weak fallback generator.
///
/// NOT cryptographically safe: the generator is non-cryptographic and its
/// seed is predictable (millisecond wall-clock time). This path exists only
/// to keep operations available when no secure entropy source works; callers
/// with security requirements must use [`rand_int`].
pub fn weak_rand_int(upper_bound: NonZeroUsize) -> usize {
    let mut rng = weak_rng();
    rng.next_u64() as usize % upper_bound.get()
}

fn weak_rng() -> MutexGuard<'static, SmallRng> {
    let rng = WEAK_RNG.get_or_init(|| Mutex::new(SmallRng::seed_from_u64(unix_millis())));
    match rng.lock() {
        Ok(guard) => guard,
        // The generator holds no invariants worth abandoning draws over
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[allow(clippy::disallowed_methods)]
fn unix_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).unwrap()
    }

    #[test]
    fn fill_buffer_produces_bytes() {
        // 32 zero bytes from a working CSPRNG is a 2^-256 event
        let mut buffer = [0u8; 32];
        fill_buffer(&mut buffer).unwrap();
        assert_ne!(buffer, [0u8; 32]);
    }

    #[test]
    fn fill_buffer_accepts_empty() {
        fill_buffer(&mut []).unwrap();
    }

    #[test]
    fn rand_int_stays_in_range() {
        for upper in [1usize, 2, 7, 100, 12345] {
            for _ in 0..1000 {
                assert!(rand_int(bound(upper)) < upper);
            }
        }
    }

    #[test]
    fn rand_int_with_bound_one_is_zero() {
        for _ in 0..100 {
            assert_eq!(rand_int(bound(1)), 0);
        }
    }

    #[test]
    fn rand_int_covers_all_buckets() {
        // Coarse uniformity: 100k draws over 8 buckets, expected 12500 each.
        // Bounds are loose enough to keep flake probability negligible.
        let mut counts = [0usize; 8];
        for _ in 0..100_000 {
            counts[rand_int(bound(8))] += 1;
        }
        for count in counts {
            assert!(count > 10_000, "bucket count {count} suggests bias");
            assert!(count < 15_000, "bucket count {count} suggests bias");
        }
    }

    #[test]
    fn weak_rand_int_stays_in_range() {
        for upper in [1usize, 3, 64, 5000] {
            for _ in 0..1000 {
                assert!(weak_rand_int(bound(upper)) < upper);
            }
        }
    }

    #[test]
    fn weak_rand_int_varies() {
        // 64 identical draws from any functioning generator is effectively
        // impossible; guards against a broken seed-once path
        let first = weak_rand_int(bound(1_000_000));
        let all_same = (0..64).all(|_| weak_rand_int(bound(1_000_000)) == first);
        assert!(!all_same);
    }
}
