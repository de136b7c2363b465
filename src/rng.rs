//! # Random Number Generators
//!
//! Every randomised strategy in this crate is generic over [`rand::Rng`], so any
//! generator works. Two are provided here.
//!
//! `RandomNumberGenerator` wraps `StdRng` and can be seeded for reproducible
//! runs:
//!
//! ```rust
//! use genetics::rng::RandomNumberGenerator;
//! use rand::Rng;
//!
//! let mut a = RandomNumberGenerator::from_seed(7);
//! let mut b = RandomNumberGenerator::from_seed(7);
//! assert_eq!(a.gen::<u64>(), b.gen::<u64>());
//! ```
//!
//! ## Thread-safe RNG
//!
//! `ThreadSafeRng` is a cheap, cloneable handle that can be shared between
//! strategies running on different threads. Each thread lazily receives its
//! own `StdRng`, seeded from a shared seed sequence, so no locking is needed:
//!
//! ```rust
//! use genetics::rng::ThreadSafeRng;
//! use rand::Rng;
//!
//! let rng = ThreadSafeRng::new();
//! let mut handle = rng.clone();
//! let value: f64 = handle.gen_range(0.0..1.0);
//! assert!((0.0..1.0).contains(&value));
//! ```

use std::cell::RefCell;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rand::{rngs::StdRng, RngCore, SeedableRng};
use thread_local::ThreadLocal;

/// A wrapper around the `rand` crate's `StdRng`.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for RandomNumberGenerator {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Hands out decorrelated seeds, one per call.
struct SeedSequence {
    base: u64,
    counter: AtomicU64,
}

impl SeedSequence {
    fn new(base: u64) -> Self {
        Self {
            base,
            counter: AtomicU64::new(0),
        }
    }

    /// splitmix64 over `base + k * golden_gamma`.
    fn next_seed(&self) -> u64 {
        let k = self.counter.fetch_add(1, Ordering::Relaxed);
        let mut z = self
            .base
            .wrapping_add(k.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

struct Shared {
    sequence: SeedSequence,
    generators: ThreadLocal<RefCell<StdRng>>,
}

/// A random number generator that may be shared across threads.
///
/// Clones share the same per-thread generators: two handles used on the same
/// thread draw from one stream, handles used on different threads draw from
/// independently seeded streams.
#[derive(Clone)]
pub struct ThreadSafeRng {
    shared: Arc<Shared>,
}

impl ThreadSafeRng {
    /// Creates a generator whose seed sequence starts from system entropy.
    pub fn new() -> Self {
        Self::from_seed(StdRng::from_entropy().next_u64())
    }

    /// Creates a generator with a fixed base seed.
    ///
    /// The n-th thread to draw from the generator gets the n-th seed of the
    /// sequence, so single-threaded use is fully reproducible.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            shared: Arc::new(Shared {
                sequence: SeedSequence::new(seed),
                generators: ThreadLocal::new(),
            }),
        }
    }

    fn with_local<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let cell = self.shared.generators.get_or(|| {
            RefCell::new(StdRng::seed_from_u64(self.shared.sequence.next_seed()))
        });
        f(&mut cell.borrow_mut())
    }
}

impl Default for ThreadSafeRng {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThreadSafeRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadSafeRng")
            .field("base_seed", &self.shared.sequence.base)
            .finish()
    }
}

impl RngCore for ThreadSafeRng {
    fn next_u32(&mut self) -> u32 {
        self.with_local(|rng| rng.next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        self.with_local(|rng| rng.next_u64())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.with_local(|rng| rng.fill_bytes(dest))
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.with_local(|rng| rng.try_fill_bytes(dest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::thread;

    #[test]
    fn test_seeded_generators_agree() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = rng1.clone();

        let nums1: Vec<u32> = (0..5).map(|_| rng1.gen()).collect();
        let nums2: Vec<u32> = (0..5).map(|_| rng2.gen()).collect();

        assert_eq!(nums1, nums2);
    }

    #[test]
    fn test_gen_range_stays_in_bounds() {
        let mut rng = RandomNumberGenerator::new();
        for _ in 0..100 {
            let x = rng.gen_range(-1000.0..1000.0);
            assert!((-1000.0..1000.0).contains(&x));
        }
    }

    #[test]
    fn test_thread_safe_rng_is_reproducible_on_one_thread() {
        let mut a = ThreadSafeRng::from_seed(9);
        let mut b = ThreadSafeRng::from_seed(9);

        let xs: Vec<u64> = (0..8).map(|_| a.gen()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.gen()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_thread_safe_rng_clones_share_thread_stream() {
        let mut a = ThreadSafeRng::from_seed(3);
        let mut reference = ThreadSafeRng::from_seed(3);
        let mut b = a.clone();

        let interleaved = [a.next_u64(), b.next_u64(), a.next_u64()];
        let sequential = [
            reference.next_u64(),
            reference.next_u64(),
            reference.next_u64(),
        ];
        assert_eq!(interleaved, sequential);
    }

    #[test]
    fn test_thread_safe_rng_threads_are_independent() {
        let rng = ThreadSafeRng::from_seed(11);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let mut local = rng.clone();
                thread::spawn(move || (0..4).map(|_| local.next_u64()).collect::<Vec<_>>())
            })
            .collect();

        let streams: Vec<Vec<u64>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for i in 0..streams.len() {
            for j in (i + 1)..streams.len() {
                assert_ne!(streams[i], streams[j]);
            }
        }
    }
}
