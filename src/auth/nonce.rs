//! Nonce generation for private requests with monotonic guarantees.
//!
//! Nonces follow wall-clock microseconds so they keep increasing across
//! process restarts, and fall back to `last + 1` whenever the clock has not
//! advanced (same tick, concurrent callers, or a clock step backwards).

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of the current time, enabling deterministic tests.
pub trait Clock: Send + Sync {
    /// Current time in microseconds since the Unix epoch.
    fn now_micros(&self) -> u64;
}

/// System clock implementation using real time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_micros(&self) -> u64 {
        // A clock before the epoch yields 0; the counter still advances.
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_micros() as u64)
            .unwrap_or_default()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now_micros(&self) -> u64 {
        (**self).now_micros()
    }
}

/// Issues strictly increasing nonces for one credential.
///
/// # Guarantees
/// - Every value is greater than every value previously returned
/// - Thread-safe: concurrent callers never receive equal values
/// - Tracks the clock when it is ahead of the counter
pub struct NonceGenerator<C: Clock = SystemClock> {
    /// Last issued nonce.
    last: AtomicU64,
    clock: C,
}

impl<C: Clock> NonceGenerator<C> {
    /// The counter is seeded from the clock so the first nonce is not small.
    #[must_use]
    pub fn new(clock: C) -> Self {
        let seed = clock.now_micros();
        Self {
            last: AtomicU64::new(seed.saturating_sub(1)),
            clock,
        }
    }

    /// Returns `max(last + 1, now)`.
    ///
    /// Thread-safe via CAS loop.
    pub fn next(&self) -> u64 {
        let now = self.clock.now_micros();

        loop {
            let current = self.last.load(Ordering::Acquire);
            let next_val = current.saturating_add(1).max(now);

            match self.last.compare_exchange_weak(
                current,
                next_val,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return next_val,
                Err(_) => continue,
            }
        }
    }

    /// Last nonce handed out (or the seed if none yet).
    #[must_use]
    pub fn last(&self) -> u64 {
        self.last.load(Ordering::Acquire)
    }
}

impl NonceGenerator<SystemClock> {
    #[must_use]
    pub fn with_system_clock() -> Self {
        Self::new(SystemClock)
    }
}

impl Default for NonceGenerator<SystemClock> {
    fn default() -> Self {
        Self::with_system_clock()
    }
}

impl<C: Clock> std::fmt::Debug for NonceGenerator<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NonceGenerator")
            .field("last", &self.last())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    /// Mock clock with controllable time.
    struct MockClock {
        micros: AtomicU64,
    }

    impl MockClock {
        fn new(initial: u64) -> Self {
            Self {
                micros: AtomicU64::new(initial),
            }
        }

        fn set(&self, micros: u64) {
            self.micros.store(micros, Ordering::Release);
        }
    }

    impl Clock for MockClock {
        fn now_micros(&self) -> u64 {
            self.micros.load(Ordering::Acquire)
        }
    }

    const BASE: u64 = 1_389_810_605_000_000;

    #[test]
    fn test_first_nonce_tracks_clock() {
        let nonces = NonceGenerator::new(MockClock::new(BASE));
        assert_eq!(nonces.next(), BASE);
    }

    #[test]
    fn test_frozen_clock_still_increases() {
        let nonces = NonceGenerator::new(MockClock::new(BASE));
        let mut prev = 0;
        for _ in 0..1000 {
            let n = nonces.next();
            assert!(n > prev, "nonce must be strictly increasing");
            prev = n;
        }
        assert_eq!(prev, BASE + 999);
    }

    #[test]
    fn test_clock_regression_no_decrease() {
        let clock = Arc::new(MockClock::new(BASE));
        let nonces = NonceGenerator::new(Arc::clone(&clock));

        let n1 = nonces.next();
        clock.set(BASE - 10_000_000);
        let n2 = nonces.next();
        assert!(n2 > n1, "nonce must not decrease when the clock regresses");
    }

    #[test]
    fn test_jumps_forward_with_clock() {
        let clock = Arc::new(MockClock::new(BASE));
        let nonces = NonceGenerator::new(Arc::clone(&clock));

        nonces.next();
        clock.set(BASE + 5_000_000);
        assert_eq!(nonces.next(), BASE + 5_000_000);
    }

    #[test]
    fn test_concurrent_unique_and_increasing_per_thread() {
        let nonces = Arc::new(NonceGenerator::new(MockClock::new(BASE)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let nonces = Arc::clone(&nonces);
                thread::spawn(move || (0..1000).map(|_| nonces.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut all = Vec::new();
        for handle in handles {
            let seen = handle.join().unwrap();
            assert!(seen.windows(2).all(|w| w[1] > w[0]));
            all.extend(seen);
        }

        let total = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), total, "all nonces must be unique across threads");
    }

    #[test]
    fn test_system_clock_generator() {
        let nonces = NonceGenerator::with_system_clock();
        let a = nonces.next();
        let b = nonces.next();
        assert!(b > a);
        assert!(a > BASE);
    }
}
