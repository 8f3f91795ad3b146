// ============================================================================
// src/util/stopwatch.rs – scoped wall-clock measurement
// ============================================================================

use std::time::{Duration, Instant};

/// Measures one span of work. Each run owns its own stopwatch; nothing is global.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Run `f` and return its result together with how long it took.
    pub fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
        let sw = Self::start();
        let out = f();
        (out, sw.elapsed())
    }
}

/// Whole milliseconds, rounded half away from zero.
pub fn rounded_millis(d: Duration) -> u128 {
    (d.as_nanos() + 500_000) / 1_000_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_millisecond() {
        assert_eq!(rounded_millis(Duration::from_micros(1_499)), 1);
        assert_eq!(rounded_millis(Duration::from_micros(1_500)), 2);
        assert_eq!(rounded_millis(Duration::ZERO), 0);
    }

    #[test]
    fn time_returns_closure_result() {
        let (value, elapsed) = Stopwatch::time(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(5));
    }
}
