use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A point on the server clock's timeline, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub fn as_millis(self) -> u64 {
        self.0
    }

    pub fn saturating_add(self, duration: Duration) -> Timestamp {
        let millis = duration.as_millis().min(u64::MAX as u128) as u64;
        Timestamp(self.0.saturating_add(millis))
    }

    /// Time elapsed since `earlier`, zero if `earlier` is in the future.
    pub fn saturating_since(self, earlier: Timestamp) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }
}

/// Source of the current time. The engine never reads the wall clock
/// directly, so tests can drive it with a [`VirtualClock`].
pub trait Clock {
    fn now(&self) -> Timestamp;
}

pub type SharedClock = Arc<dyn Clock + Send + Sync>;

/// Monotonic process clock for production hosting.
#[derive(Debug)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let elapsed = self.started.elapsed();
        Timestamp(elapsed.as_millis().min(u64::MAX as u128) as u64)
    }
}

/// Deterministic clock that only moves when advanced explicitly.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now_ms: AtomicU64,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, duration: Duration) -> Timestamp {
        let millis = duration.as_millis().min(u64::MAX as u128) as u64;
        let next = self.now_ms.load(Ordering::SeqCst).saturating_add(millis);
        self.now_ms.store(next, Ordering::SeqCst);
        Timestamp(next)
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.now_ms.load(Ordering::SeqCst))
    }
}
